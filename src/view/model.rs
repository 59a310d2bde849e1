//! View model for the challenges page.
//!
//! This module turns coordinator state plus the owner's inputs into plain
//! values a renderer can draw without making decisions of its own.

use serde::{Deserialize, Serialize};

use crate::config::ListConfig;
use crate::coordinator::QueryState;
use crate::query::{DisplayedQuery, SortSpec};
use crate::types::{
    Challenge, ChallengeStatus, ChallengeType, ChallengeTypeOption, DateRange, SortColumn,
};

use super::options::{
    SelectOption, challenge_type_options, selected_tab, status_options, status_text,
};
use super::pagination::{PaginationViewModel, page_window};

// ============================================================================
// Input Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<u64>,
    pub name: String,
}

/// Billing account state as reported by the owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingStatus {
    pub is_loading: bool,
    pub load_failed: bool,
    pub expired: bool,
    pub start_date: String,
    pub end_date: String,
}

/// Everything the owner passes down besides the query itself.
#[derive(Debug, Clone, Default)]
pub struct ListProps {
    pub displayed: DisplayedQuery,
    pub challenges: Vec<Challenge>,
    pub challenge_types: Vec<ChallengeType>,
    pub is_loading: bool,
    pub warn_message: Option<String>,
    pub active_project: Option<Project>,
    pub billing: BillingStatus,
}

// ============================================================================
// View Model Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengesPage {
    pub header: ProjectHeader,
    pub body: ListScreen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScreen {
    Loading,
    Warning(String),
    List(Box<ListViewModel>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectHeader {
    pub title: String,
    pub view_project_url: Option<String>,
    pub launch_new_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingBanner {
    Hidden,
    LoadFailed,
    Active { start_date: String, end_date: String },
    Inactive { start_date: String, end_date: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortIndicator {
    pub column: SortColumn,
    pub active: bool,
    pub ascending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRow {
    pub challenge: Challenge,
    pub status_text: String,
    pub show_current_phase: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    /// Nothing matched; shown instead of the table
    Empty {
        project_name: Option<String>,
        self_service: bool,
    },
    Rows(Vec<ChallengeRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorModal {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub billing: BillingBanner,
    pub search_text: String,
    pub status_selection: Option<SelectOption<ChallengeStatus>>,
    pub type_selection: Option<ChallengeTypeOption>,
    pub date_range: DateRange,
    pub status_options: Vec<SelectOption<ChallengeStatus>>,
    pub type_options: Vec<SelectOption<ChallengeTypeOption>>,
    pub selected_tab: usize,
    pub body: ListBody,
    pub sort_indicators: Vec<SortIndicator>,
    pub pagination: PaginationViewModel,
    pub error_modal: Option<ErrorModal>,
}

// ============================================================================
// Computation
// ============================================================================

pub fn project_header(project: Option<&Project>, config: &ListConfig) -> ProjectHeader {
    let title = project.map(|p| p.name.clone()).unwrap_or_default();
    let id = project.and_then(|p| p.id);

    let view_project_url = id.and_then(|id| {
        config
            .connect_app_url
            .as_deref()
            .map(|base| format!("{}/projects/{id}", base.trim_end_matches('/')))
    });
    let launch_new_path = id.map(|id| format!("/projects/{id}/challenges/new"));

    ProjectHeader {
        title,
        view_project_url,
        launch_new_path,
    }
}

pub fn billing_banner(billing: &BillingStatus) -> BillingBanner {
    if billing.is_loading {
        return BillingBanner::Hidden;
    }
    if billing.load_failed {
        return BillingBanner::LoadFailed;
    }
    let start_date = billing.start_date.clone();
    let end_date = billing.end_date.clone();
    if billing.expired {
        BillingBanner::Inactive {
            start_date,
            end_date,
        }
    } else {
        BillingBanner::Active {
            start_date,
            end_date,
        }
    }
}

pub fn sort_indicators(sort: SortSpec) -> Vec<SortIndicator> {
    SortColumn::ALL
        .into_iter()
        .map(|column| SortIndicator {
            column,
            active: sort.by == column,
            ascending: sort.by == column && sort.is_ascending(),
        })
        .collect()
}

pub fn compute_view_model(state: &QueryState, props: &ListProps, config: &ListConfig) -> ChallengesPage {
    let header = project_header(props.active_project.as_ref(), config);

    let body = if props.is_loading {
        ListScreen::Loading
    } else if let Some(warning) = &props.warn_message {
        ListScreen::Warning(warning.clone())
    } else {
        ListScreen::List(Box::new(compute_list(state, props, config)))
    };

    ChallengesPage { header, body }
}

fn compute_list(state: &QueryState, props: &ListProps, config: &ListConfig) -> ListViewModel {
    let displayed = &props.displayed;
    let self_service = displayed.self_service;
    let tab = selected_tab(displayed.filters.status, self_service);

    let body = if props.challenges.is_empty() {
        ListBody::Empty {
            project_name: props.active_project.as_ref().map(|p| p.name.clone()),
            self_service,
        }
    } else {
        ListBody::Rows(
            props
                .challenges
                .iter()
                .map(|c| ChallengeRow {
                    challenge: c.clone(),
                    status_text: status_text(c.status, self_service),
                    show_current_phase: tab == 0,
                })
                .collect(),
        )
    };

    ListViewModel {
        billing: billing_banner(&props.billing),
        search_text: state.filters.search_text.clone(),
        status_selection: state.filters.status.map(|s| SelectOption {
            label: s.label().to_string(),
            value: Some(s),
        }),
        type_selection: state.filters.challenge_type.clone(),
        date_range: state.filters.date_range,
        status_options: status_options(),
        type_options: challenge_type_options(&props.challenge_types),
        selected_tab: tab,
        body,
        sort_indicators: sort_indicators(state.sort),
        pagination: page_window(
            displayed.page,
            displayed.per_page,
            displayed.total_count,
            config.page_range_displayed,
        ),
        error_modal: state.error_message.as_ref().map(|message| ErrorModal {
            title: "Error".to_string(),
            message: message.clone(),
        }),
    }
}
