#[macro_use]
mod macros;

pub mod config;
pub mod coordinator;
pub mod debounce;
pub mod error;
pub mod identity;
pub mod query;
pub mod types;
pub mod view;

pub use config::ListConfig;
pub use coordinator::driver::{CoordinatorHandle, spawn as spawn_coordinator};
pub use coordinator::{ChallengeLoader, ListAction, QueryCoordinator, QueryState};
pub use debounce::{Clock, Debouncer, ManualClock, SystemClock, TokioClock};
pub use error::{ChallengeListError, Result};
pub use identity::{AdminRoles, HandleScope, Identity, UserProfile};
pub use query::{
    DisplayedQuery, DraftQuery, FilterTuple, InitialFilters, LoadRequest, SortSpec,
};
pub use types::{
    Challenge, ChallengeStatus, ChallengeType, ChallengeTypeOption, DateRange, DateRangeField,
    SortColumn, SortOrder,
};
