//! Presentation boundary for the challenge list
//!
//! Pure functions over coordinator state and the owner's inputs. Nothing
//! here emits load requests; renderers call back into the coordinator.

pub mod model;
mod options;
mod pagination;
mod search_input;

pub use model::{
    BillingBanner, BillingStatus, ChallengeRow, ChallengesPage, ErrorModal, ListBody, ListProps,
    ListScreen, ListViewModel, Project, ProjectHeader, SortIndicator, billing_banner,
    compute_view_model, project_header, sort_indicators,
};
pub use options::{
    ALL_STATUSES_LABEL, ALL_TYPES_LABEL, SelectOption, challenge_type_options, selected_tab,
    status_options, status_text,
};
pub use pagination::{PaginationViewModel, page_window};
pub use search_input::search_input_change;
