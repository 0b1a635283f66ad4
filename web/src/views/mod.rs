pub mod booking;
pub mod home;
pub mod hotel_details;
pub mod not_found;

pub use booking::BookingReview;
pub use home::HomePage;
pub use hotel_details::HotelDetails;
pub use not_found::NotFoundPage;
