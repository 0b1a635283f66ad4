use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use shared_types::{HotelLocation, HotelRecord};
use thaw::{Badge, BadgeColor};

use crate::{
    components::{BookingPanel, ErrorView, HotelGallery, LoadingView, StarRating},
    server::get_hotel,
    state::{
        begin_page_load, retry_page_load, BookingDraft, GalleryState, HotelLoader, LoadState,
        LoadTicket,
    },
    utils::{
        format::{format_price, format_review_count},
        history::go_back,
    },
};

/// Server errors carry the repository's message; anything else (transport,
/// deserialization) falls back to the full error text.
fn load_failure_message(error: ServerFnError) -> String {
    match error {
        ServerFnError::ServerError(message) => message,
        other => other.to_string(),
    }
}

#[component]
pub fn HotelDetails() -> impl IntoView {
    let params = use_params_map();

    let hotel_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let loader = RwSignal::new(HotelLoader::default());
    let gallery = RwSignal::new(GalleryState::default());
    let draft = RwSignal::new(BookingDraft::default());

    let run_load = move |ticket: LoadTicket| {
        spawn_local(async move {
            let outcome = get_hotel(ticket.hotel_id.clone())
                .await
                .map_err(load_failure_message);

            if let Err(message) = &outcome {
                leptos::logging::error!("Failed to load hotel {}: {}", ticket.hotel_id, message);
            }

            let applied = loader
                .try_update(|l| l.complete(&ticket, outcome))
                .unwrap_or(false);
            if !applied {
                leptos::logging::log!("Dropping stale response for hotel {}", ticket.hotel_id);
            }
        });
    };

    // Reload only when the route id actually changes
    Effect::new(move |_| {
        let id = hotel_id.get();
        let ticket = loader
            .try_update(|l| gallery.try_update(|g| begin_page_load(l, g, id)))
            .flatten();
        if let Some(ticket) = ticket {
            run_load(ticket);
        }
    });

    let retry = Callback::new(move |_: ()| {
        let ticket = loader
            .try_update(|l| gallery.try_update(|g| retry_page_load(l, g)).flatten())
            .flatten();
        if let Some(ticket) = ticket {
            run_load(ticket);
        }
    });

    view! {
        <div class="hotel-details-page">
            {move || match loader.with(|l| l.state().clone()) {
                LoadState::Loading => view! {
                    <LoadingView message="Loading hotel details..." />
                }
                .into_any(),
                LoadState::Failed(message) => view! {
                    <ErrorView message=message on_retry=retry />
                }
                .into_any(),
                LoadState::NotFound => view! {
                    <ErrorView message="Hotel not found" />
                }
                .into_any(),
                LoadState::Ready(hotel) => view! {
                    <HotelDetailsContent hotel=hotel gallery=gallery draft=draft />
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn HotelDetailsContent(
    hotel: HotelRecord,
    gallery: RwSignal<GalleryState>,
    draft: RwSignal<BookingDraft>,
) -> impl IntoView {
    view! {
        <Title text=hotel.name.clone() />

        <div class="hotel-hero">
            <HotelGallery
                images=hotel.images.clone()
                hotel_name=hotel.name.clone()
                gallery=gallery
            />

            <div class="hotel-hero-back">
                <button class="hotel-back-button" on:click=move |_| go_back()>
                    "← Back"
                </button>
            </div>

            <div class="hotel-hero-badges">
                {(!hotel.available).then(|| view! {
                    <Badge color=BadgeColor::Danger>"Unavailable"</Badge>
                })}
                {hotel.featured.then(|| view! {
                    <Badge color=BadgeColor::Brand>"Featured"</Badge>
                })}
            </div>
        </div>

        <div class="hotel-details-container">
            <div class="hotel-details-grid">
                <div class="hotel-details-main">
                    <section class="hotel-header">
                        <div class="hotel-header-top">
                            <div>
                                <h1 class="hotel-name">{hotel.name.clone()}</h1>
                                <div class="hotel-address">
                                    <span class="hotel-address-icon">"📍"</span>
                                    <span>{hotel.address.clone()}</span>
                                </div>
                            </div>
                            <div class="hotel-price">
                                <div class="hotel-price-amount">
                                    {format_price(hotel.price_per_night)}
                                </div>
                                <div class="hotel-price-unit">"per night"</div>
                            </div>
                        </div>

                        <div class="hotel-ratings">
                            <StarRating rating=hotel.star_rating />
                            <div class="hotel-review-score">
                                <span class="hotel-review-star">"★"</span>
                                <span class="hotel-review-value">{format!("{:.1}", hotel.rating)}</span>
                                <span class="hotel-review-count">
                                    {format_review_count(hotel.review_count)}
                                </span>
                            </div>
                        </div>
                    </section>

                    <section class="hotel-card">
                        <h2 class="hotel-section-title">"About This Hotel"</h2>
                        <p class="hotel-description">{hotel.description.clone()}</p>
                    </section>

                    <section class="hotel-card">
                        <h2 class="hotel-section-title">"Amenities & Services"</h2>
                        <div class="hotel-amenities">
                            {hotel
                                .amenities
                                .iter()
                                .map(|amenity| {
                                    view! {
                                        <div class="hotel-amenity">
                                            <span class="hotel-amenity-check">"✓"</span>
                                            <span>{amenity.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <LocationCard location=hotel.location.clone() address=hotel.address.clone() />
                </div>

                <aside class="hotel-details-sidebar">
                    <BookingPanel hotel=hotel draft=draft />
                </aside>
            </div>
        </div>
    }
}

#[component]
fn LocationCard(location: HotelLocation, address: String) -> impl IntoView {
    let city_state = format!("{}, {}", location.city, location.state);

    let map = match (location.lat, location.long) {
        (Some(lat), Some(long)) => view! {
            <div class="hotel-map-container">
                <iframe
                    src=format!(
                        "https://www.openstreetmap.org/export/embed.html?bbox={},{},{},{}&layer=mapnik&marker={},{}",
                        long - 0.01, lat - 0.01, long + 0.01, lat + 0.01, lat, long,
                    )
                    class="hotel-map-iframe"
                    title="Hotel Location Map"
                ></iframe>
            </div>
            <a
                href=format!(
                    "https://www.google.com/maps/dir/?api=1&destination={}",
                    urlencoding::encode(&address),
                )
                target="_blank"
                class="hotel-directions-link"
            >
                "Get Directions"
            </a>
        }
        .into_any(),
        _ => view! {
            <div class="hotel-map-placeholder">
                <span class="hotel-map-placeholder-icon">"📍"</span>
                <p>{city_state.clone()}</p>
                <p class="hotel-map-placeholder-address">{address.clone()}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <section class="hotel-card">
            <h2 class="hotel-section-title">"Location"</h2>
            <p class="hotel-location-text">{city_state}</p>
            {map}
        </section>
    }
}
