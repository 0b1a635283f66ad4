use leptos::prelude::*;
use shared_types::{BookingRequest, HotelRecord};

use super::booking_draft::{BookingDraft, BookingValidationError};

/// Everything the booking flow needs from the details page.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingHandoff {
    pub hotel: HotelRecord,
    pub request: BookingRequest,
}

impl BookingHandoff {
    pub fn nights(&self) -> Option<u32> {
        super::booking_draft::compute_nights(self.request.check_in, self.request.check_out)
    }

    pub fn total(&self) -> Option<f64> {
        self.nights()
            .map(|nights| super::booking_draft::compute_total(nights, self.hotel.price_per_night))
    }
}

/// Unavailable hotels are rejected before the dates are looked at.
pub fn prepare_handoff(
    hotel: &HotelRecord,
    draft: &BookingDraft,
) -> Result<BookingHandoff, BookingValidationError> {
    if !hotel.available {
        return Err(BookingValidationError::Unavailable);
    }

    let (check_in, check_out) = draft.validate()?;

    Ok(BookingHandoff {
        hotel: hotel.clone(),
        request: BookingRequest {
            hotel_id: hotel.id.clone(),
            check_in,
            check_out,
            guests: draft.guests.get(),
        },
    })
}

/// App-wide slot the details page fills before navigating to `/booking`.
#[derive(Debug, Clone, Copy)]
pub struct BookingHandoffStore(RwSignal<Option<BookingHandoff>>);

impl BookingHandoffStore {
    pub fn provide() -> Self {
        let store = Self(RwSignal::new(None));
        provide_context(store);
        store
    }

    pub fn use_store() -> Option<Self> {
        use_context::<Self>()
    }

    pub fn set(&self, handoff: BookingHandoff) {
        self.0.set(Some(handoff));
    }

    /// Untracked read; the booking page renders the handoff once.
    pub fn current(&self) -> Option<BookingHandoff> {
        self.0.get_untracked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::booking_draft::parse_date_input;
    use shared_types::HotelLocation;

    fn hotel(available: bool) -> HotelRecord {
        HotelRecord {
            id: "h1".to_string(),
            name: "Harbor View".to_string(),
            address: "1 Pier Rd".to_string(),
            description: String::new(),
            images: vec!["a".to_string(), "b".to_string()],
            price_per_night: 200.0,
            star_rating: 4,
            rating: 4.7,
            review_count: 88,
            amenities: vec!["Pool".to_string()],
            available,
            featured: false,
            location: HotelLocation {
                city: "Portland".to_string(),
                state: "ME".to_string(),
                lat: None,
                long: None,
            },
        }
    }

    fn draft(check_in: &str, check_out: &str) -> BookingDraft {
        let mut draft = BookingDraft::default();
        draft.set_check_in(parse_date_input(check_in));
        draft.set_check_out(parse_date_input(check_out));
        draft
    }

    #[test]
    fn test_handoff_carries_request_and_hotel() {
        let hotel = hotel(true);
        let handoff = prepare_handoff(&hotel, &draft("2024-01-01", "2024-01-04")).unwrap();

        assert_eq!(handoff.hotel, hotel);
        assert_eq!(handoff.request.hotel_id, "h1");
        assert_eq!(handoff.request.check_in, parse_date_input("2024-01-01").unwrap());
        assert_eq!(handoff.request.check_out, parse_date_input("2024-01-04").unwrap());
        assert_eq!(handoff.request.guests, 2);
        assert_eq!(handoff.nights(), Some(3));
        assert_eq!(handoff.total(), Some(600.0));
    }

    #[test]
    fn test_missing_check_out_blocks_handoff() {
        let result = prepare_handoff(&hotel(true), &draft("2024-01-01", ""));
        assert_eq!(result, Err(BookingValidationError::MissingDates));
    }

    #[test]
    fn test_unavailable_blocks_handoff_even_with_dates() {
        let result = prepare_handoff(&hotel(false), &draft("2024-01-01", "2024-01-04"));
        assert_eq!(result, Err(BookingValidationError::Unavailable));

        let result = prepare_handoff(&hotel(false), &draft("", ""));
        assert_eq!(result, Err(BookingValidationError::Unavailable));
    }

    #[test]
    fn test_reversed_dates_block_handoff() {
        let result = prepare_handoff(&hotel(true), &draft("2024-01-04", "2024-01-01"));
        assert_eq!(result, Err(BookingValidationError::CheckOutBeforeCheckIn));
    }

    #[test]
    fn test_guest_choice_is_forwarded() {
        let mut draft = draft("2024-06-01", "2024-06-02");
        draft.set_guests("5".parse().unwrap());

        let handoff = prepare_handoff(&hotel(true), &draft).unwrap();
        assert_eq!(handoff.request.guests, 5);
    }
}
