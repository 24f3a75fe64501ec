use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::config::DashboardConfig;
use crate::pages::check::CheckPage;
use crate::pages::community::CommunityPage;

#[component]
pub fn App() -> impl IntoView {
    provide_context(DashboardConfig::from_document());

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=CheckPage />
                        <Route path=path!("/community") view=CommunityPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
