use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, MessageBar, MessageBarIntent};

/// Error banner. A retry button is shown only when `on_retry` is given.
#[component]
pub fn ErrorView(
    #[prop(optional, into)] message: Option<String>,
    #[prop(optional, into)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-container">
            <MessageBar intent=MessageBarIntent::Error>
                {message.unwrap_or_else(|| "An error occurred. Please try again.".to_string())}
            </MessageBar>
            {on_retry.map(|callback| {
                view! {
                    <div class="error-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| callback.run(())
                        >
                            "Try Again"
                        </Button>
                    </div>
                }
            })}
        </div>
    }
}
