pub mod booking_panel;
pub mod error;
pub mod hotel_gallery;
pub mod loading;
pub mod star_rating;

// Re-export commonly used types
pub use booking_panel::BookingPanel;
pub use error::ErrorView;
pub use hotel_gallery::HotelGallery;
pub use loading::LoadingView;
pub use star_rating::StarRating;
