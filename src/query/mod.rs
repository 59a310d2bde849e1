//! Query model for the challenge list.
//!
//! Two structures describe the list query:
//! - [`DisplayedQuery`] is what the owner last fetched and is showing. It is
//!   authoritative and only the owner replaces it.
//! - [`DraftQuery`] is the coordinator's in-progress copy, edited by the user.
//!
//! A [`LoadRequest`] is the effective query sent to the loader.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::identity::HandleScope;
use crate::types::{ChallengeStatus, ChallengeTypeOption, DateRange, SortColumn, SortOrder};

pub mod sort;

pub use sort::SortSpec;

/// The four user-editable filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterTuple {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub status: Option<ChallengeStatus>,
    #[serde(default)]
    pub challenge_type: Option<ChallengeTypeOption>,
    #[serde(default)]
    pub date_range: DateRange,
}

impl FilterTuple {
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_status(mut self, status: Option<ChallengeStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_challenge_type(mut self, challenge_type: Option<ChallengeTypeOption>) -> Self {
        self.challenge_type = challenge_type;
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    fn type_value(&self) -> Option<&str> {
        self.challenge_type.as_ref().map(|t| t.value.as_str())
    }

    /// Whether fetching with `self` would yield different data than `other`.
    ///
    /// Status and search text compare exactly, the type by its value only,
    /// the date range bound by bound.
    pub fn differs_from(&self, other: &FilterTuple) -> bool {
        self.status != other.status
            || self.search_text != other.search_text
            || self.type_value() != other.type_value()
            || self.date_range != other.date_range
    }
}

/// Coordinator-owned copy of the query being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftQuery {
    pub filters: FilterTuple,
    pub sort: SortSpec,
}

/// The query behind the data currently on screen, as reported by the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayedQuery {
    pub page: u32,
    pub per_page: u32,
    pub total_count: u64,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub self_service: bool,
    #[serde(default)]
    pub filters: FilterTuple,
    #[serde(default)]
    pub sort: SortSpec,
}

impl Default for DisplayedQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            total_count: 0,
            project_id: None,
            self_service: false,
            filters: FilterTuple::default(),
            sort: SortSpec::default(),
        }
    }
}

/// Initial filter values for a freshly mounted list, e.g. restored from a
/// shared link. Anything left out falls back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialFilters {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub self_service: bool,
    #[serde(flatten)]
    pub filters: FilterTuple,
    #[serde(default)]
    pub sort_by: Option<SortColumn>,
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
}

impl InitialFilters {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Build the starting displayed query, using `default_sort` for any
    /// missing sort field.
    pub fn into_displayed(self, default_sort: SortSpec) -> DisplayedQuery {
        let defaults = DisplayedQuery::default();
        DisplayedQuery {
            page: self.page.filter(|p| *p >= 1).unwrap_or(defaults.page),
            per_page: self.per_page.unwrap_or(defaults.per_page),
            total_count: 0,
            project_id: self.project_id,
            self_service: self.self_service,
            filters: self.filters,
            sort: SortSpec {
                by: self.sort_by.unwrap_or(default_sort.by),
                order: self.sort_order.unwrap_or(default_sort.order),
            },
        }
    }
}

/// Effective query handed to the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRequest {
    pub page: u32,
    pub project_id: Option<u64>,
    pub status: Option<ChallengeStatus>,
    pub search_text: String,
    pub self_service: bool,
    pub handle: Option<String>,
    pub challenge_type: Option<ChallengeTypeOption>,
    pub date_range: DateRange,
    pub sort_by: SortColumn,
    pub sort_order: SortOrder,
}

impl LoadRequest {
    pub fn new(
        page: u32,
        displayed: &DisplayedQuery,
        filters: &FilterTuple,
        sort: SortSpec,
        handle: HandleScope,
    ) -> Self {
        Self {
            page,
            project_id: displayed.project_id,
            status: filters.status,
            search_text: filters.search_text.clone(),
            self_service: displayed.self_service,
            handle: handle.into_handle(),
            challenge_type: filters.challenge_type.clone(),
            date_range: filters.date_range,
            sort_by: sort.by,
            sort_order: sort.order,
        }
    }

    pub fn filters(&self) -> FilterTuple {
        FilterTuple {
            search_text: self.search_text.clone(),
            status: self.status,
            challenge_type: self.challenge_type.clone(),
            date_range: self.date_range,
        }
    }

    pub fn sort(&self) -> SortSpec {
        SortSpec::new(self.sort_by, self.sort_order)
    }
}

impl fmt::Display for LoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_dash<T: fmt::Display>(v: Option<T>) -> String {
            v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
        }

        write!(
            f,
            "page={} project={} status={} search={:?} self_service={} handle={} type={} dates={} sort={}:{}",
            self.page,
            or_dash(self.project_id),
            or_dash(self.status),
            self.search_text,
            self.self_service,
            or_dash(self.handle.as_deref()),
            or_dash(self.challenge_type.as_ref().map(|t| t.value.as_str())),
            self.date_range,
            self.sort_by,
            self.sort_order,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DateRangeField;

    fn ts(s: &str) -> jiff::Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_identical_filters_do_not_differ() {
        let a = FilterTuple::default()
            .with_search_text("logo")
            .with_status(Some(ChallengeStatus::Active));
        assert!(!a.differs_from(&a.clone()));
    }

    #[test]
    fn test_type_compares_by_value_only() {
        let a = FilterTuple::default()
            .with_challenge_type(Some(ChallengeTypeOption::new("Challenge", "CH")));
        let b = FilterTuple::default()
            .with_challenge_type(Some(ChallengeTypeOption::new("Renamed Challenge", "CH")));
        let c = FilterTuple::default()
            .with_challenge_type(Some(ChallengeTypeOption::new("Challenge", "F2F")));

        assert!(!a.differs_from(&b));
        assert!(a.differs_from(&c));
        assert!(a.differs_from(&FilterTuple::default()));
    }

    #[test]
    fn test_each_field_difference_is_detected() {
        let base = FilterTuple::default();
        assert!(base.clone().with_search_text("x").differs_from(&base));
        assert!(
            base.clone()
                .with_status(Some(ChallengeStatus::Draft))
                .differs_from(&base)
        );
        let dated = base.clone().with_date_range(
            DateRange::default().with(DateRangeField::EndDateEnd, Some(ts("2024-05-01T00:00:00Z"))),
        );
        assert!(dated.differs_from(&base));
    }

    #[test]
    fn test_initial_filters_from_json() {
        let json = r#"{
            "page": 3,
            "projectId": 42,
            "searchText": "logo",
            "status": "ACTIVE",
            "sortBy": "name"
        }"#;
        let initial: InitialFilters = serde_json::from_str(json).unwrap();
        let displayed = initial.into_displayed(SortSpec::default());

        assert_eq!(displayed.page, 3);
        assert_eq!(displayed.project_id, Some(42));
        assert_eq!(displayed.filters.search_text, "logo");
        assert_eq!(displayed.filters.status, Some(ChallengeStatus::Active));
        assert_eq!(
            displayed.sort,
            SortSpec::new(SortColumn::Name, SortOrder::Desc)
        );
    }

    #[test]
    fn test_initial_filters_reject_page_zero() {
        let initial = InitialFilters {
            page: Some(0),
            ..Default::default()
        };
        assert_eq!(initial.into_displayed(SortSpec::default()).page, 1);
    }

    #[test]
    fn test_load_request_wire_shape() {
        let displayed = DisplayedQuery {
            project_id: Some(7),
            ..Default::default()
        };
        let filters = FilterTuple::default().with_search_text("logo");
        let request = LoadRequest::new(
            1,
            &displayed,
            &filters,
            SortSpec::default(),
            HandleScope::Submitter("jdoe".to_string()),
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["page"], 1);
        assert_eq!(value["projectId"], 7);
        assert_eq!(value["status"], serde_json::Value::Null);
        assert_eq!(value["searchText"], "logo");
        assert_eq!(value["selfService"], false);
        assert_eq!(value["handle"], "jdoe");
        assert_eq!(value["sortBy"], "startDate");
        assert_eq!(value["sortOrder"], "desc");
        assert_eq!(request.filters(), filters);
    }

    #[test]
    fn test_load_request_display() {
        let request = LoadRequest::new(
            2,
            &DisplayedQuery::default(),
            &FilterTuple::default().with_status(Some(ChallengeStatus::Draft)),
            SortSpec::new(SortColumn::Name, SortOrder::Asc),
            HandleScope::Unscoped,
        );
        insta::assert_snapshot!(
            request.to_string(),
            @r#"page=2 project=- status=DRAFT search="" self_service=false handle=- type=- dates={} sort=name:asc"#
        );
    }
}
