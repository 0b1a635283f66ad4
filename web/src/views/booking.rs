use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    state::BookingHandoffStore,
    utils::{
        format::{format_price, format_stay_date},
        routes::{hotel_path, HOME_PATH},
    },
};

/// Landing page of the booking flow. Shows what the details page handed over;
/// a direct visit or a reload has nothing to show.
#[component]
pub fn BookingReview() -> impl IntoView {
    let handoff = BookingHandoffStore::use_store().and_then(|store| store.current());

    let Some(handoff) = handoff else {
        return view! {
            <div class="booking-review-container">
                <div class="booking-review-card">
                    <h1 class="booking-review-title">"No stay selected"</h1>
                    <p class="booking-review-subtitle">
                        "Pick your dates on a hotel's page to start a booking."
                    </p>
                    <a href=HOME_PATH class="booking-review-link">"← Back to home"</a>
                </div>
            </div>
        }
        .into_any();
    };

    let hotel_href = hotel_path(&handoff.request.hotel_id);
    let guests = handoff.request.guests;
    let nights = handoff.nights().unwrap_or(0);
    let total = handoff.total().unwrap_or(0.0);

    view! {
        <Title text=format!("Book {}", handoff.hotel.name) />
        <div class="booking-review-container">
            <div class="booking-review-card">
                <h1 class="booking-review-title">"Review Your Stay"</h1>
                <p class="booking-review-subtitle">{handoff.hotel.name.clone()}</p>
                <p class="booking-review-address">{handoff.hotel.address.clone()}</p>

                <dl class="booking-review-details">
                    <div class="booking-review-row">
                        <dt>"Check-in"</dt>
                        <dd>{format_stay_date(handoff.request.check_in)}</dd>
                    </div>
                    <div class="booking-review-row">
                        <dt>"Check-out"</dt>
                        <dd>{format_stay_date(handoff.request.check_out)}</dd>
                    </div>
                    <div class="booking-review-row">
                        <dt>"Guests"</dt>
                        <dd>{guests}</dd>
                    </div>
                    <div class="booking-review-row">
                        <dt>"Nights"</dt>
                        <dd>{nights}</dd>
                    </div>
                    <div class="booking-review-row booking-review-total">
                        <dt>"Total"</dt>
                        <dd>{format_price(total)}</dd>
                    </div>
                </dl>

                <a href=hotel_href class="booking-review-link">"← Change dates"</a>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_review_links_home() {
        let html = view! { <BookingReview /> }.to_html();

        assert!(html.contains("No stay selected"));
        assert!(html.contains(r#"href="/""#));
    }
}
