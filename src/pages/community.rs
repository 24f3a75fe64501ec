use leptos::prelude::*;

use crate::components::community_frame::CommunityFrame;
use crate::config::DashboardConfig;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();

    view! {
        <div class="page community-page">
            <CommunityFrame src=config.community_url />
        </div>
    }
}
