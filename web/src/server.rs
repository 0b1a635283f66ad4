use leptos::prelude::*;
use leptos::server;
use shared_types::HotelRecord;

#[cfg(feature = "ssr")]
use crate::db::hotel_repository::find_hotel_by_id;

/// Fetch one hotel for its details page. `Ok(None)` means no such hotel.
#[server]
pub async fn get_hotel(hotel_id: String) -> Result<Option<HotelRecord>, ServerFnError> {
    let hotel_id = hotel_id.trim();
    if hotel_id.is_empty() {
        return Ok(None);
    }

    match find_hotel_by_id(hotel_id).await {
        Ok(hotel) => {
            tracing::debug!(hotel_id, found = hotel.is_some(), "hotel lookup");
            Ok(hotel)
        }
        Err(e) => {
            tracing::error!(hotel_id, error = %e, "hotel lookup failed");
            Err(ServerFnError::new(format!("Failed to load hotel: {}", e)))
        }
    }
}
