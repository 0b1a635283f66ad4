use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::utils::routes::hotel_path;

/// Landing page. Hotel pages are normally reached by link; this lets a
/// visitor open one by id.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let hotel_id = RwSignal::new(String::new());

    let open_hotel = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = hotel_id.get_untracked();
        let id = id.trim();
        if !id.is_empty() {
            navigate(&hotel_path(id), Default::default());
        }
    };

    view! {
        <Title text="Hotels" />
        <div class="booking-review-container">
            <div class="booking-review-card">
                <h1 class="booking-review-title">"Find your stay"</h1>
                <p class="booking-review-subtitle">
                    "Open a hotel from its link, or enter its id below."
                </p>
                <form class="home-lookup" on:submit=open_hotel>
                    <input
                        type="text"
                        class="booking-panel-input"
                        placeholder="Hotel id"
                        prop:value=move || hotel_id.get()
                        on:input=move |ev| hotel_id.set(event_target_value(&ev))
                    />
                    <button type="submit" class="booking-panel-submit">"View hotel"</button>
                </form>
            </div>
        </div>
    }
}
