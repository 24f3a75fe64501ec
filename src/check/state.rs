use crate::check::model::CheckOutcome;
use crate::error::CheckError;

/// Identifies one issued run. Completions must present the ticket of the
/// latest run to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTicket(u64);

impl RunTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// View state of the check runner. Every transition returns a complete new
/// value; nothing is merged in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    pub is_open: bool,
    pub is_running: bool,
    pub outcome: Option<CheckOutcome>,
    pub error: Option<CheckError>,
    /// Set once the user dismisses the banner for the current error.
    pub error_dismissed: bool,
    run_id: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal and mark a request in flight. Outcome and error are
    /// carried over; the view hides them while running.
    pub fn begin_run(&self) -> (Self, RunTicket) {
        let run_id = self.run_id + 1;
        let next = Self {
            is_open: true,
            is_running: true,
            outcome: self.outcome.clone(),
            error: self.error.clone(),
            error_dismissed: self.error_dismissed,
            run_id,
        };
        (next, RunTicket(run_id))
    }

    pub fn resolve(&self, ticket: RunTicket, outcome: CheckOutcome) -> Self {
        if !self.accepts(ticket) {
            return self.clone();
        }
        Self {
            is_open: self.is_open,
            is_running: false,
            outcome: Some(outcome),
            error: None,
            error_dismissed: false,
            run_id: self.run_id,
        }
    }

    /// The previous outcome is kept but not shown while the error stands.
    pub fn reject(&self, ticket: RunTicket, error: CheckError) -> Self {
        if !self.accepts(ticket) {
            return self.clone();
        }
        Self {
            is_open: self.is_open,
            is_running: false,
            outcome: self.outcome.clone(),
            error: Some(error),
            error_dismissed: false,
            run_id: self.run_id,
        }
    }

    pub fn complete(&self, ticket: RunTicket, result: Result<CheckOutcome, CheckError>) -> Self {
        match result {
            Ok(outcome) => self.resolve(ticket, outcome),
            Err(error) => self.reject(ticket, error),
        }
    }

    pub fn toggle_visibility(&self) -> Self {
        Self {
            is_open: !self.is_open,
            ..self.clone()
        }
    }

    /// Hide the banner for the current error. A later failure shows again.
    pub fn dismiss_error(&self) -> Self {
        Self {
            error_dismissed: self.error.is_some(),
            ..self.clone()
        }
    }

    /// Whether a completion for `ticket` may still change this state.
    pub fn accepts(&self, ticket: RunTicket) -> bool {
        self.is_running && ticket.0 == self.run_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::model::{CheckGroup, CheckResult};

    fn outcome(success: bool) -> CheckOutcome {
        CheckOutcome {
            overall_success: success,
            groups: vec![CheckGroup {
                title: "pods".to_string(),
                results: vec![CheckResult {
                    description: "pod ok".to_string(),
                    is_error: false,
                    error_message: None,
                    hint_url: None,
                    is_warning: false,
                }],
            }],
        }
    }

    #[test]
    fn test_initial_state() {
        let state = RunState::new();
        assert!(!state.is_open);
        assert!(!state.is_running);
        assert!(state.outcome.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_begin_run_opens_and_runs() {
        let (state, _) = RunState::new().begin_run();
        assert!(state.is_open);
        assert!(state.is_running);
    }

    #[test]
    fn test_resolve_clears_previous_error() {
        let (running, ticket) = RunState::new().begin_run();
        let failed = running.reject(ticket, CheckError::Network("down".to_string()));
        assert!(failed.error.is_some());

        let (running, ticket) = failed.begin_run();
        let done = running.resolve(ticket, outcome(true));
        assert!(!done.is_running);
        assert!(done.error.is_none());
        assert_eq!(done.outcome, Some(outcome(true)));
    }

    #[test]
    fn test_reject_keeps_outcome() {
        let (running, ticket) = RunState::new().begin_run();
        let done = running.resolve(ticket, outcome(false));

        let (running, ticket) = done.begin_run();
        let failed = running.reject(ticket, CheckError::Network("network down".to_string()));
        assert!(!failed.is_running);
        assert_eq!(failed.outcome, Some(outcome(false)));
        assert_eq!(failed.error, Some(CheckError::Network("network down".to_string())));
    }

    #[test]
    fn test_toggle_only_flips_visibility() {
        let (running, _) = RunState::new().begin_run();
        let toggled = running.toggle_visibility();
        assert!(!toggled.is_open);
        assert_eq!(toggled.is_running, running.is_running);
        assert_eq!(toggled.outcome, running.outcome);
        assert_eq!(toggled.error, running.error);
        assert_eq!(toggled.toggle_visibility(), running);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let (first, stale) = RunState::new().begin_run();
        let (second, current) = first.begin_run();

        let after_stale = second.resolve(stale, outcome(false));
        assert_eq!(after_stale, second);

        let done = after_stale.resolve(current, outcome(true));
        assert_eq!(done.outcome, Some(outcome(true)));
    }

    #[test]
    fn test_completion_after_settle_is_ignored() {
        let (running, ticket) = RunState::new().begin_run();
        let done = running.resolve(ticket, outcome(true));
        let again = done.reject(ticket, CheckError::Cancelled);
        assert_eq!(again, done);
    }

    #[test]
    fn test_dismiss_survives_toggle_until_next_failure() {
        let (running, ticket) = RunState::new().begin_run();
        let failed = running.reject(ticket, CheckError::Network("down".to_string()));
        let dismissed = failed.dismiss_error().toggle_visibility();
        assert!(dismissed.error_dismissed);
        assert_eq!(dismissed.error, failed.error);

        let (running, ticket) = dismissed.begin_run();
        assert!(running.error_dismissed);
        let failed_again = running.reject(ticket, CheckError::Network("down".to_string()));
        assert!(!failed_again.error_dismissed);
    }

    #[test]
    fn test_dismiss_without_error_is_noop() {
        let state = RunState::new().dismiss_error();
        assert_eq!(state, RunState::new());
    }

    #[test]
    fn test_complete_dispatches_on_result() {
        let (running, ticket) = RunState::new().begin_run();
        let failed = running.complete(ticket, Err(CheckError::EmptyResponse));
        assert_eq!(failed.error, Some(CheckError::EmptyResponse));

        let (running, ticket) = failed.begin_run();
        let done = running.complete(ticket, Ok(outcome(true)));
        assert!(done.error.is_none());
    }
}
