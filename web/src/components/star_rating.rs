use leptos::prelude::*;

const MAX_STARS: u8 = 5;

#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    let filled = rating.min(MAX_STARS);

    view! {
        <div class="star-rating" aria-label=format!("{} out of {} stars", filled, MAX_STARS)>
            {(0..MAX_STARS)
                .map(|i| {
                    view! {
                        <span class={if i < filled { "star-rating-star filled" } else { "star-rating-star" }}>
                            "★"
                        </span>
                    }
                })
                .collect_view()}
            <span class="star-rating-label">{format!("{} Star Hotel", filled)}</span>
        </div>
    }
}
