use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{CheckApi, HttpCheckApi};
use crate::components::check_runner::CheckRunner;
use crate::config::DashboardConfig;

#[component]
pub fn CheckPage() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let api: Rc<dyn CheckApi> = Rc::new(HttpCheckApi::new(config.path_prefix));

    view! {
        <div class="page check-page">
            <h2>"Check"</h2>
            <p class="page-description">
                "Validate that the control plane and data plane are installed and healthy."
            </p>

            <CheckRunner api=api />
        </div>
    }
}
