use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared_types::HotelRecord;

use crate::{
    state::{
        booking_draft::{format_date_input, parse_date_input},
        prepare_handoff, BookingDraft, BookingHandoffStore, GuestCount,
    },
    utils::{
        format::{format_price, today},
        routes::BOOKING_PATH,
    },
};

/// Sidebar with the stay dates, guest count, live price summary and the
/// "Book Now" action.
#[component]
pub fn BookingPanel(hotel: HotelRecord, draft: RwSignal<BookingDraft>) -> impl IntoView {
    let navigate = use_navigate();
    let handoff_store = BookingHandoffStore::use_store();
    let price_per_night = hotel.price_per_night;
    let available = hotel.available;
    let hotel = StoredValue::new(hotel);

    let check_in_value =
        move || draft.with(|d| d.check_in.map(format_date_input).unwrap_or_default());
    let check_out_value =
        move || draft.with(|d| d.check_out.map(format_date_input).unwrap_or_default());
    let min_check_in = move || format_date_input(BookingDraft::min_check_in(today()));
    let min_check_out = move || format_date_input(draft.with(|d| d.min_check_out(today())));

    let handle_book = move |_| {
        let result = hotel.with_value(|hotel| draft.with_untracked(|d| prepare_handoff(hotel, d)));
        match result {
            Ok(handoff) => {
                if let Ok(json) = serde_json::to_string(&handoff.request) {
                    leptos::logging::log!("Booking handoff: {}", json);
                }
                match handoff_store {
                    Some(store) => {
                        store.set(handoff);
                        navigate(BOOKING_PATH, Default::default());
                    }
                    None => leptos::logging::error!("BookingHandoffStore missing from context"),
                }
            }
            Err(e) => draft.update(|d| d.validation_error = Some(e)),
        }
    };

    view! {
        <div class="booking-panel">
            <h3 class="booking-panel-title">"Book Your Stay"</h3>

            <div class="booking-panel-fields">
                <div class="form-group">
                    <label for="check-in">"Check-in Date"</label>
                    <input
                        id="check-in"
                        type="date"
                        class="booking-panel-input"
                        required
                        min=min_check_in
                        prop:value=check_in_value
                        on:input=move |ev| {
                            let date = parse_date_input(&event_target_value(&ev));
                            draft.update(|d| d.set_check_in(date));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="check-out">"Check-out Date"</label>
                    <input
                        id="check-out"
                        type="date"
                        class="booking-panel-input"
                        required
                        min=min_check_out
                        prop:value=check_out_value
                        on:input=move |ev| {
                            let date = parse_date_input(&event_target_value(&ev));
                            draft.update(|d| d.set_check_out(date));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="guests">"Guests"</label>
                    <select
                        id="guests"
                        class="booking-panel-input"
                        prop:value=move || draft.with(|d| d.guests.to_string())
                        on:change=move |ev| {
                            if let Ok(guests) = event_target_value(&ev).parse::<GuestCount>() {
                                draft.update(|d| d.set_guests(guests));
                            }
                        }
                    >
                        {GuestCount::choices()
                            .map(|count| {
                                view! {
                                    <option
                                        value=count.to_string()
                                        selected=move || draft.with(|d| d.guests == count)
                                    >
                                        {count.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            {move || {
                if draft.with(|d| d.is_range_reversed()) {
                    return view! {
                        <p class="booking-panel-hint">"Check-out must be on or after check-in"</p>
                    }
                    .into_any();
                }

                match draft.with(|d| d.quote(price_per_night)) {
                    Some(quote) => view! {
                        <div class="booking-panel-summary">
                            <div class="booking-panel-row">
                                <span>"Rate per night"</span>
                                <span>{format_price(quote.price_per_night)}</span>
                            </div>
                            <div class="booking-panel-row">
                                <span>"Nights"</span>
                                <span>{quote.nights}</span>
                            </div>
                            <div class="booking-panel-row booking-panel-total">
                                <span>"Total"</span>
                                <span>{format_price(quote.total)}</span>
                            </div>
                        </div>
                    }
                    .into_any(),
                    None => view! {}.into_any(),
                }
            }}

            {move || {
                draft.with(|d| d.validation_error.clone()).map(|error| {
                    view! {
                        <p class="booking-panel-error" role="alert">{error.to_string()}</p>
                    }
                })
            }}

            <button
                class="booking-panel-submit"
                disabled={!available}
                on:click=handle_book
            >
                {if available { "📅 Book Now" } else { "Unavailable" }}
            </button>

            {available.then(|| view! {
                <p class="booking-panel-note">"Free cancellation • No booking fees"</p>
            })}
        </div>
    }
}

