use leptos::prelude::*;

use crate::check::view::{FailureDetail, GroupView, RowView};

#[component]
pub fn CheckResults(group: GroupView) -> impl IntoView {
    view! {
        <div class="check-group">
            <p class="check-group-title">{group.title}</p>
            {group.rows.into_iter().map(|row| {
                view! { <ResultRow row=row /> }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ResultRow(row: RowView) -> impl IntoView {
    let icon_class = row.category.class_name();
    let icon = row.category.icon();

    view! {
        <div class="check-row">
            <span class=icon_class>{icon}</span>
            <div class="check-row-body">
                <p class="check-result" data-i18n=row.i18n_key>{row.description}</p>
                {row.failure.map(|failure| view! { <FailureLines failure=failure /> })}
            </div>
        </div>
    }
}

/// Error message and hint link under a failing or warning row.
#[component]
fn FailureLines(failure: FailureDetail) -> impl IntoView {
    view! {
        <p class="check-result-error">{failure.message}</p>
        {failure.hint_url.map(|url| {
            let href = url.clone();
            view! {
                <p class="check-result-error">
                    "see"
                    <a class="hint-link" href=href target="_blank" rel="noopener noreferrer">
                        {url}
                    </a>
                    "for hints"
                </p>
            }
        })}
    }
}
