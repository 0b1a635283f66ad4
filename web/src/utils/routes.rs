//! Paths the app links and navigates to. Kept next to each other so links
//! always point at a route `App` actually registers.

pub const HOME_PATH: &str = "/";
pub const BOOKING_PATH: &str = "/booking";

/// Details page for one hotel. Ids are percent-encoded into the path segment.
pub fn hotel_path(hotel_id: &str) -> String {
    format!("/hotels/{}", urlencoding::encode(hotel_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_path() {
        assert_eq!(hotel_path("h1"), "/hotels/h1");
    }

    #[test]
    fn test_hotel_path_encodes_id() {
        assert_eq!(hotel_path("a b/c?d"), "/hotels/a%20b%2Fc%3Fd");
    }
}
