//! Query-state coordinator for the challenge list.
//!
//! The coordinator turns raw interaction events into at most one outbound
//! load request per logical change:
//! - filter edits are debounced and only fetch when they change what is on
//!   screen
//! - page changes, reloads and sort clicks fetch immediately
//! - error display is a passive sink and never fetches
//!
//! It owns a [`DraftQuery`] and compares it against the [`DisplayedQuery`]
//! reported by the owner. It does no I/O and none of its operations fail.

pub mod driver;
mod loader;

pub use loader::ChallengeLoader;

use std::time::Instant;

use crate::config::ListConfig;
use crate::debounce::{Clock, Debouncer, SystemClock};
use crate::identity::{AdminRoles, HandleScope, Identity};
use crate::query::{DisplayedQuery, DraftQuery, FilterTuple, LoadRequest, SortSpec};
use crate::types::SortColumn;

/// Everything a caller can ask of the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// Replace the filters (debounced)
    UpdateFilter(FilterTuple),
    /// Request another page
    ChangePage(u32),
    /// Re-fetch the current page unchanged
    Reload,
    /// Header click on a sortable column
    ToggleSort(SortColumn),
    /// Show a display error
    ShowError(String),
    /// Acknowledge the display error
    HideError,
    /// The owner finished a fetch and is now showing this query
    SyncDisplayed(DisplayedQuery),
    /// Replace the caller identity
    SetIdentity(Identity),
    /// Fire the filter debounce if it is due
    Tick,
}

/// Read-only snapshot of coordinator state for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub filters: FilterTuple,
    pub sort: SortSpec,
    pub error_message: Option<String>,
    /// A filter edit is waiting out its debounce window
    pub filter_pending: bool,
}

pub struct QueryCoordinator<L, C = SystemClock> {
    draft: DraftQuery,
    displayed: DisplayedQuery,
    identity: Identity,
    admin_roles: AdminRoles,
    error_message: Option<String>,
    pending: Debouncer<FilterTuple>,
    loader: L,
    clock: C,
}

impl<L: ChallengeLoader> QueryCoordinator<L, SystemClock> {
    pub fn new(
        displayed: DisplayedQuery,
        identity: Identity,
        loader: L,
        config: &ListConfig,
    ) -> Self {
        Self::with_clock(displayed, identity, loader, config, SystemClock)
    }
}

impl<L: ChallengeLoader, C: Clock> QueryCoordinator<L, C> {
    /// Mount a coordinator seeded from the query already on screen.
    pub fn with_clock(
        displayed: DisplayedQuery,
        identity: Identity,
        loader: L,
        config: &ListConfig,
        clock: C,
    ) -> Self {
        let draft = DraftQuery {
            filters: displayed.filters.clone(),
            sort: displayed.sort,
        };
        Self {
            draft,
            displayed,
            identity,
            admin_roles: config.admin_roles(),
            error_message: None,
            pending: Debouncer::new(config.filter_debounce()),
            loader,
            clock,
        }
    }

    pub fn state(&self) -> QueryState {
        QueryState {
            filters: self.draft.filters.clone(),
            sort: self.draft.sort,
            error_message: self.error_message.clone(),
            filter_pending: self.pending.is_armed(),
        }
    }

    pub fn displayed(&self) -> &DisplayedQuery {
        &self.displayed
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// When the pending filter edit becomes due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.deadline()
    }

    /// Route an action to its operation. Returns whether a load request
    /// was emitted.
    pub fn dispatch(&mut self, action: ListAction) -> bool {
        match action {
            ListAction::UpdateFilter(filters) => {
                self.update_filter(filters);
                false
            }
            ListAction::ChangePage(page) => self.change_page(page),
            ListAction::Reload => {
                self.reload();
                true
            }
            ListAction::ToggleSort(column) => {
                self.toggle_sort(column);
                true
            }
            ListAction::ShowError(message) => {
                self.show_error(message);
                false
            }
            ListAction::HideError => {
                self.hide_error();
                false
            }
            ListAction::SyncDisplayed(displayed) => {
                self.sync_displayed(displayed);
                false
            }
            ListAction::SetIdentity(identity) => {
                self.set_identity(identity);
                false
            }
            ListAction::Tick => self.tick(),
        }
    }

    /// Record a filter edit and (re)start the debounce window.
    ///
    /// The draft reflects the edit at once; whether to fetch is decided
    /// when the window elapses, from the last edit of the burst.
    pub fn update_filter(&mut self, filters: FilterTuple) {
        self.draft.filters = filters.clone();
        let rearmed = self.pending.arm(filters, self.clock.now());
        tracing::debug!(rearmed, "filter edit pending");
    }

    /// Fire the filter debounce if its window has elapsed.
    ///
    /// Emits a page-1 request only when the settled filters differ from
    /// the displayed ones. Returns whether a request was emitted.
    pub fn tick(&mut self) -> bool {
        let Some(filters) = self.pending.take_due(self.clock.now()) else {
            return false;
        };

        if !filters.differs_from(&self.displayed.filters) {
            tracing::debug!("filter edit settled on the displayed query, not fetching");
            return false;
        }

        let request = LoadRequest::new(
            1,
            &self.displayed,
            &filters,
            self.draft.sort,
            self.resolve_handle(),
        );
        self.emit(request);
        true
    }

    /// Request `page`, keeping the displayed filters and current sort.
    ///
    /// Returns `false` without emitting when `page` is already displayed.
    pub fn change_page(&mut self, page: u32) -> bool {
        if page == 0 {
            tracing::warn!("ignoring request for page 0");
            return false;
        }
        if page == self.displayed.page {
            tracing::debug!(page, "page already displayed");
            return false;
        }

        let request = self.request_with_displayed_filters(page, self.draft.sort);
        self.emit(request);
        true
    }

    /// Re-fetch the displayed page as-is, e.g. after a row was edited.
    pub fn reload(&mut self) {
        let request = self.request_with_displayed_filters(self.displayed.page, self.draft.sort);
        self.emit(request);
    }

    /// Header click: flip the direction on the active column, or switch
    /// to `column` sorted descending. Stays on the displayed page.
    ///
    /// Search text, type and date range come from the draft, so an edit
    /// still in its debounce window is fetched now; the status stays the
    /// displayed one.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.draft.sort = self.draft.sort.toggled(column);
        let filters = self
            .draft
            .filters
            .clone()
            .with_status(self.displayed.filters.status);
        let request = LoadRequest::new(
            self.displayed.page,
            &self.displayed,
            &filters,
            self.draft.sort,
            self.resolve_handle(),
        );
        self.emit(request);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn hide_error(&mut self) {
        self.error_message = None;
    }

    pub fn resolve_handle(&self) -> HandleScope {
        self.identity.resolve_handle(&self.admin_roles)
    }

    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = identity;
    }

    /// Adopt the query the owner is now showing.
    ///
    /// Draft filters follow the displayed ones unless an edit is still
    /// waiting out its debounce window. Sort state stays local.
    pub fn sync_displayed(&mut self, displayed: DisplayedQuery) {
        if !self.pending.is_armed() {
            self.draft.filters = displayed.filters.clone();
        }
        self.displayed = displayed;
    }

    fn request_with_displayed_filters(&self, page: u32, sort: SortSpec) -> LoadRequest {
        LoadRequest::new(
            page,
            &self.displayed,
            &self.displayed.filters,
            sort,
            self.resolve_handle(),
        )
    }

    fn emit(&mut self, request: LoadRequest) {
        tracing::debug!(%request, "loading challenges");
        self.loader.load_challenges_by_page(request);
    }
}
