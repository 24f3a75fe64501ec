use leptos::prelude::*;

// 112px = 64px header + 2 * 24px content padding
const FRAME_STYLE: &str = "border: 0px; height: calc(100vh - 112px); width: 100%;";

/// Embeds the Linkerd community page.
#[component]
pub fn CommunityFrame(#[prop(into)] src: String) -> impl IntoView {
    view! {
        <iframe title="Community" src=src style=FRAME_STYLE></iframe>
    }
}
