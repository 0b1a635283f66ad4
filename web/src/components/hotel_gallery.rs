use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::state::GalleryState;

/// Main photo, thumbnail strip and the full-screen viewer.
///
/// Thumbnails and the viewer's indicator dots all go through
/// `GalleryState::select_image`, so the index can never leave the image list.
#[component]
pub fn HotelGallery(
    images: Vec<String>,
    hotel_name: String,
    gallery: RwSignal<GalleryState>,
) -> impl IntoView {
    let image_count = images.len();
    let images = StoredValue::new(images);
    let hotel_name = StoredValue::new(hotel_name);

    let current_image = move || {
        let selected = gallery.with(|g| g.selected());
        images.with_value(|imgs| imgs.get(selected).cloned().unwrap_or_default())
    };

    if image_count == 0 {
        return view! {
            <div class="hotel-gallery-empty">
                <p>"No photos available"</p>
            </div>
        }
        .into_any();
    }

    let viewer_ref = NodeRef::<leptos::html::Div>::new();

    // Focus the overlay when it opens so arrow keys and Escape reach it
    Effect::new(move |_| {
        if gallery.with(|g| g.is_viewer_open()) {
            if let Some(viewer) = viewer_ref.get() {
                if let Err(e) = viewer.focus() {
                    leptos::logging::error!("Failed to focus image viewer: {:?}", e);
                }
            }
        }
    });

    let handle_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Escape" => gallery.update(|g| g.close_viewer()),
        "ArrowRight" => gallery.update(|g| g.next(image_count)),
        "ArrowLeft" => gallery.update(|g| g.previous(image_count)),
        _ => {}
    };

    view! {
        <div class="hotel-gallery">
            <img
                class="hotel-gallery-main"
                src=current_image
                alt=move || hotel_name.get_value()
                on:click=move |_| gallery.update(|g| g.open_viewer())
            />
            <div class="hotel-gallery-shade"></div>

            <div class="hotel-gallery-thumbnails">
                {(0..image_count)
                    .map(|index| {
                        let src = images.with_value(|imgs| imgs[index].clone());
                        view! {
                            <button
                                class=move || {
                                    if gallery.with(|g| g.selected()) == index {
                                        "hotel-gallery-thumb selected"
                                    } else {
                                        "hotel-gallery-thumb"
                                    }
                                }
                                on:click=move |_| gallery.update(|g| g.select_image(index, image_count))
                            >
                                <img src=src alt=format!("View {}", index + 1) />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || gallery.with(|g| g.is_viewer_open())>
                <div
                    class="hotel-gallery-viewer"
                    tabindex="-1"
                    node_ref=viewer_ref
                    on:click=move |_| gallery.update(|g| g.close_viewer())
                    on:keydown=handle_keydown
                >
                    <div class="hotel-gallery-viewer-content" on:click=|ev| ev.stop_propagation()>
                        <img
                            class="hotel-gallery-viewer-image"
                            src=current_image
                            alt=move || {
                                format!(
                                    "{} - Image {}",
                                    hotel_name.get_value(),
                                    gallery.with(|g| g.selected()) + 1,
                                )
                            }
                        />

                        <button
                            class="hotel-gallery-viewer-close"
                            aria-label="Close"
                            on:click=move |_| gallery.update(|g| g.close_viewer())
                        >
                            "×"
                        </button>

                        {(image_count > 1).then(|| view! {
                            <button
                                class="hotel-gallery-viewer-prev"
                                aria-label="Previous image"
                                on:click=move |_| gallery.update(|g| g.previous(image_count))
                            >
                                "‹"
                            </button>
                            <button
                                class="hotel-gallery-viewer-next"
                                aria-label="Next image"
                                on:click=move |_| gallery.update(|g| g.next(image_count))
                            >
                                "›"
                            </button>
                        })}

                        <div class="hotel-gallery-viewer-dots">
                            {(0..image_count)
                                .map(|index| {
                                    view! {
                                        <button
                                            class=move || {
                                                if gallery.with(|g| g.selected()) == index {
                                                    "hotel-gallery-dot selected"
                                                } else {
                                                    "hotel-gallery-dot"
                                                }
                                            }
                                            aria-label=format!("Show image {}", index + 1)
                                            on:click=move |_| gallery.update(|g| g.select_image(index, image_count))
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
    .into_any()
}
