//! Picker options and status presentation.

use crate::types::{ChallengeStatus, ChallengeType, ChallengeTypeOption};

pub const ALL_STATUSES_LABEL: &str = "All Challenge Status";
pub const ALL_TYPES_LABEL: &str = "All Challenge Types";

/// One entry of a select box. `value: None` is the "all" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub label: String,
    pub value: Option<T>,
}

pub fn status_options() -> Vec<SelectOption<ChallengeStatus>> {
    std::iter::once(SelectOption {
        label: ALL_STATUSES_LABEL.to_string(),
        value: None,
    })
    .chain(ChallengeStatus::ALL.into_iter().map(|s| SelectOption {
        label: s.label().to_string(),
        value: Some(s),
    }))
    .collect()
}

pub fn challenge_type_options(types: &[ChallengeType]) -> Vec<SelectOption<ChallengeTypeOption>> {
    std::iter::once(SelectOption {
        label: ALL_TYPES_LABEL.to_string(),
        value: None,
    })
    .chain(types.iter().map(|t| SelectOption {
        label: t.name.clone(),
        value: Some(ChallengeTypeOption::from(t)),
    }))
    .collect()
}

/// Tab highlighted for the displayed status filter.
pub fn selected_tab(status: Option<ChallengeStatus>, self_service: bool) -> usize {
    match status {
        Some(ChallengeStatus::Approved) => 1,
        Some(ChallengeStatus::New) if self_service => 3,
        Some(ChallengeStatus::New) => 1,
        Some(ChallengeStatus::Draft) => 2,
        Some(ChallengeStatus::Completed) => 3,
        Some(ChallengeStatus::Cancelled) => 4,
        Some(ChallengeStatus::Active) | None => 0,
    }
}

/// Status text shown on a challenge row.
///
/// Self-service submitters see their drafts as awaiting approval.
pub fn status_text(status: ChallengeStatus, self_service: bool) -> String {
    match status {
        ChallengeStatus::Draft if self_service => "Waiting for approval".to_string(),
        ChallengeStatus::Draft => "Draft".to_string(),
        other => other.to_string(),
    }
}
