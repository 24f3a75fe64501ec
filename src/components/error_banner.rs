use leptos::prelude::*;

/// Failure banner shown above the page content.
#[component]
pub fn ErrorBanner(
    /// Display message of the failure
    #[prop(into)]
    message: String,
    /// Hides the banner until the next failure
    #[prop(into)]
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="status-text status-error">{message}</span>
            <button class="btn btn-small" on:click=move |_| on_dismiss.run(())>
                "Dismiss"
            </button>
        </div>
    }
}
