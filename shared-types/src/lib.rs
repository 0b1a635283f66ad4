use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HotelLocation {
    pub city: String,
    pub state: String,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

/// A hotel as shown on its details page. Read-only on the client.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HotelRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub description: String,
    pub images: Vec<String>,
    pub price_per_night: f64,
    /// 0 to 5 inclusive.
    pub star_rating: u8,
    pub rating: f32,
    pub review_count: u32,
    pub amenities: Vec<String>,
    pub available: bool,
    pub featured: bool,
    pub location: HotelLocation,
}

/// What the details page hands to the booking flow. Dates travel as `YYYY-MM-DD`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub hotel_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_request_uses_camel_case_and_iso_dates() {
        let request = BookingRequest {
            hotel_id: "h1".to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            guests: 2,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hotelId": "h1",
                "checkIn": "2024-01-01",
                "checkOut": "2024-01-04",
                "guests": 2
            })
        );
    }

    #[test]
    fn hotel_record_accepts_missing_coordinates() {
        let json = serde_json::json!({
            "id": "h1",
            "name": "Harbor View",
            "address": "1 Pier Rd",
            "description": "On the water.",
            "images": ["a.jpg"],
            "price_per_night": 200.0,
            "star_rating": 4,
            "rating": 4.6,
            "review_count": 120,
            "amenities": ["Pool"],
            "available": true,
            "featured": false,
            "location": { "city": "Portland", "state": "ME", "lat": null, "long": null }
        });

        let record: HotelRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.location.city, "Portland");
        assert!(record.location.lat.is_none());
        assert_eq!(record.images, vec!["a.jpg".to_string()]);
    }
}
