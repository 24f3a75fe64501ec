use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::CheckApi;
use crate::check::{start_check, CheckOutcome, CheckView, ModalBody, RunState, RunTicket};
use crate::components::check_results::CheckResults;
use crate::components::error_banner::ErrorBanner;
use crate::components::status_chip::StatusChip;
use crate::error::CheckError;

/// "Run Linkerd Check" button and result modal. The request runs as an
/// abortable local task that is aborted when the component is torn down.
#[component]
pub fn CheckRunner(
    /// Collaborator used to issue check requests
    api: Rc<dyn CheckApi>,
) -> impl IntoView {
    let state = RwSignal::new(RunState::new());
    let view_model = Memo::new(move |_| state.with(CheckView::from_state));
    let api = StoredValue::new_local(api);
    let in_flight = StoredValue::new(None::<AbortHandle>);

    let trigger_run = move || {
        let Some(ticket) = begin_run(state) else {
            return;
        };
        let Some(run) = api.try_with_value(|api| start_check(&**api)) else {
            return;
        };

        let (handle, registration) = AbortHandle::new_pair();
        in_flight.set_value(Some(handle));
        tracing::info!(run = ticket.id(), "check run started");

        spawn_local(async move {
            drive_run(state, ticket, run, registration).await;
        });
    };

    let toggle_visibility = move || state.update(|s| *s = s.toggle_visibility());

    on_cleanup(move || {
        if let Some(handle) = in_flight.try_update_value(|slot| slot.take()).flatten() {
            handle.abort();
        }
        api.try_with_value(|api| api.cancel_current_requests());
    });

    let on_rerun = Callback::new(move |_: ()| trigger_run());
    let on_close = Callback::new(move |_: ()| toggle_visibility());
    let on_dismiss = Callback::new(move |_: ()| state.update(|s| *s = s.dismiss_error()));

    view! {
        <div class="check-runner">
            <style>{include_str!("check_runner.css")}</style>

            <div class="check-trigger">
                <button
                    class="btn btn-outline"
                    disabled=move || view_model.with(|v| v.trigger_disabled)
                    on:click=move |_| trigger_run()
                >
                    "Run Linkerd Check"
                </button>
            </div>

            {move || {
                view_model
                    .with(|v| v.banner.clone())
                    .map(|message| view! { <ErrorBanner message=message on_dismiss=on_dismiss /> })
            }}

            <Show when=move || view_model.with(|v| v.modal.open)>
                <CheckModal
                    view_model=view_model
                    on_rerun=on_rerun
                    on_close=on_close
                />
            </Show>
        </div>
    }
}

/// Returns `None` once the component's state has been disposed.
fn begin_run(state: RwSignal<RunState>) -> Option<RunTicket> {
    state.try_update(|s| {
        let (next, ticket) = s.begin_run();
        *s = next;
        ticket
    })
}

/// Await `run` unless it is aborted first, then apply its result.
async fn drive_run<F>(
    state: RwSignal<RunState>,
    ticket: RunTicket,
    run: F,
    registration: AbortRegistration,
) -> Option<bool>
where
    F: Future<Output = Result<CheckOutcome, CheckError>>,
{
    let Ok(result) = Abortable::new(run, registration).await else {
        tracing::debug!(run = ticket.id(), "check run aborted");
        return None;
    };

    match &result {
        Ok(outcome) => tracing::info!(
            run = ticket.id(),
            success = outcome.overall_success,
            groups = outcome.groups.len(),
            results = outcome.result_count(),
            "check run finished"
        ),
        Err(e) => tracing::warn!(run = ticket.id(), error = %e, "check run failed"),
    }

    apply_completion(state, ticket, result)
}

/// `Some(true)` when applied, `Some(false)` when superseded, `None` when the
/// state is gone.
fn apply_completion(
    state: RwSignal<RunState>,
    ticket: RunTicket,
    result: Result<CheckOutcome, CheckError>,
) -> Option<bool> {
    let applied = state.try_update(|s| {
        let accepted = s.accepts(ticket);
        *s = s.complete(ticket, result);
        accepted
    });
    if applied != Some(true) {
        tracing::debug!(run = ticket.id(), "ignoring superseded check run");
    }
    applied
}

#[component]
fn CheckModal(
    view_model: Memo<CheckView>,
    #[prop(into)] on_rerun: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <span class="modal-title">"Linkerd Check"</span>
                    {move || {
                        view_model
                            .with(|v| v.modal.chip)
                            .map(|status| view! { <StatusChip status=status /> })
                    }}
                </div>

                <div class="modal-content">
                    <div class="modal-console">
                        {move || modal_body(view_model.with(|v| v.modal.body.clone()))}
                    </div>
                </div>

                <div class="modal-actions">
                    <button class="btn" on:click=move |_| on_rerun.run(())>"Re-Run Check"</button>
                    <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}

fn modal_body(body: ModalBody) -> AnyView {
    match body {
        ModalBody::Progress => view! {
            <div class="check-spinner" role="progressbar" aria-label="Running check"></div>
        }
        .into_any(),
        ModalBody::Failed => view! {
            <p class="check-placeholder">"The check could not be completed."</p>
        }
        .into_any(),
        ModalBody::Groups(groups) => groups
            .into_iter()
            .map(|group| view! { <CheckResults group=group /> })
            .collect::<Vec<_>>()
            .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn outcome() -> CheckOutcome {
        CheckOutcome {
            overall_success: true,
            groups: Vec::new(),
        }
    }

    #[test]
    fn test_completion_applies_to_live_state() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(RunState::new());
            let ticket = begin_run(state).unwrap();

            assert_eq!(apply_completion(state, ticket, Ok(outcome())), Some(true));
            let settled = state.get_untracked();
            assert!(!settled.is_running);
            assert_eq!(settled.outcome, Some(outcome()));
        });
    }

    #[test]
    fn test_superseded_completion_is_ignored() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(RunState::new());
            let stale = begin_run(state).unwrap();
            let current = begin_run(state).unwrap();

            assert_eq!(apply_completion(state, stale, Ok(outcome())), Some(false));
            assert!(state.get_untracked().is_running);
            assert_eq!(apply_completion(state, current, Ok(outcome())), Some(true));
        });
    }

    #[test]
    fn test_completion_after_teardown_is_noop() {
        let owner = Owner::new();
        let (state, ticket) = owner.with(|| {
            let state = RwSignal::new(RunState::new());
            let ticket = begin_run(state).unwrap();
            (state, ticket)
        });
        owner.cleanup();
        drop(owner);

        assert_eq!(apply_completion(state, ticket, Ok(outcome())), None);
        assert_eq!(
            apply_completion(state, ticket, Err(CheckError::Network("late".to_string()))),
            None
        );
    }

    #[test]
    fn test_aborted_run_never_touches_state() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(RunState::new());
            let ticket = begin_run(state).unwrap();
            let before = state.get_untracked();

            let (handle, registration) = AbortHandle::new_pair();
            handle.abort();
            let run = async { Ok(outcome()) };

            assert_eq!(block_on(drive_run(state, ticket, run, registration)), None);
            assert_eq!(state.get_untracked(), before);
        });
    }

    #[test]
    fn test_run_settles_through_drive_run() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(RunState::new());
            let ticket = begin_run(state).unwrap();
            let (_handle, registration) = AbortHandle::new_pair();
            let run = async { Err(CheckError::Network("network down".to_string())) };

            assert_eq!(block_on(drive_run(state, ticket, run, registration)), Some(true));
            let view = CheckView::from_state(&state.get_untracked());
            assert_eq!(view.banner.as_deref(), Some("network down"));
            assert!(!view.trigger_disabled);
        });
    }
}
