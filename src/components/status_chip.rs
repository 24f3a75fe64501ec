use leptos::prelude::*;

use crate::check::OverallStatus;

/// Overall outcome chip shown in the check modal header.
#[component]
pub fn StatusChip(status: OverallStatus) -> impl IntoView {
    let class = if status.is_good() {
        "status-chip chip-good"
    } else {
        "status-chip chip-bad"
    };

    view! {
        <span class=class>{status.label()}</span>
    }
}
