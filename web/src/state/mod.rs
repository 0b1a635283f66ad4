//! View-state for the hotel details page and the booking handoff.
//!
//! Everything except `BookingHandoffStore` is plain data with no reactive
//! runtime involved: the page keeps each piece inside an `RwSignal` and the
//! logic stays unit-testable. The store is the one context-held signal.

pub mod booking_draft;
pub mod gallery;
pub mod handoff;
pub mod load;
pub mod page;

pub use booking_draft::{BookingDraft, BookingValidationError, GuestCount, StayQuote};
pub use gallery::GalleryState;
pub use handoff::{prepare_handoff, BookingHandoff, BookingHandoffStore};
pub use load::{HotelLoader, LoadState, LoadTicket};
pub use page::{begin_page_load, retry_page_load};
