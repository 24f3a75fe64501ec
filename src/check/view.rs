use crate::check::model::{CheckGroup, CheckOutcome, CheckResult, ResultCategory};
use crate::check::state::RunState;

/// What the check runner shows for a given [`RunState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckView {
    pub trigger_disabled: bool,
    /// Shown outside the modal until dismissed.
    pub banner: Option<String>,
    pub modal: ModalView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub open: bool,
    pub chip: Option<OverallStatus>,
    pub body: ModalBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallStatus {
    Success,
    Error,
}

impl OverallStatus {
    pub fn label(self) -> &'static str {
        match self {
            OverallStatus::Success => "Success",
            OverallStatus::Error => "Error",
        }
    }

    pub fn is_good(self) -> bool {
        self == OverallStatus::Success
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalBody {
    Progress,
    /// The last run failed; neither progress nor stale results.
    Failed,
    Groups(Vec<GroupView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub title: String,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// `"{group}_{n}"`, 1-based.
    pub i18n_key: String,
    pub description: String,
    pub category: ResultCategory,
    pub failure: Option<FailureDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDetail {
    pub message: String,
    pub hint_url: Option<String>,
}

impl CheckView {
    pub fn from_state(state: &RunState) -> Self {
        let settled = !state.is_running && state.error.is_none();

        let chip = state
            .outcome
            .as_ref()
            .filter(|_| settled)
            .map(|o| if o.overall_success { OverallStatus::Success } else { OverallStatus::Error });

        let body = if state.is_running {
            ModalBody::Progress
        } else if state.error.is_some() {
            ModalBody::Failed
        } else {
            match &state.outcome {
                Some(outcome) => ModalBody::Groups(group_views(outcome)),
                None => ModalBody::Groups(Vec::new()),
            }
        };

        Self {
            trigger_disabled: state.is_running,
            banner: state
                .error
                .as_ref()
                .filter(|_| !state.error_dismissed)
                .map(ToString::to_string),
            modal: ModalView {
                open: state.is_open,
                chip,
                body,
            },
        }
    }
}

fn group_views(outcome: &CheckOutcome) -> Vec<GroupView> {
    outcome.groups.iter().map(group_view).collect()
}

fn group_view(group: &CheckGroup) -> GroupView {
    GroupView {
        title: group.title.clone(),
        rows: group
            .results
            .iter()
            .enumerate()
            .map(|(index, result)| row_view(&group.title, index, result))
            .collect(),
    }
}

fn row_view(title: &str, index: usize, result: &CheckResult) -> RowView {
    let category = result.category();
    let failure = category.is_failure().then(|| FailureDetail {
        message: result.error_message.clone().unwrap_or_default(),
        hint_url: result.hint_url.clone().filter(|url| !url.is_empty()),
    });

    RowView {
        i18n_key: format!("{}_{}", title, index + 1),
        description: result.description.clone(),
        category,
        failure,
    }
}
