use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::ChallengeListError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChallengeStatus {
    Active,
    Approved,
    New,
    Draft,
    Completed,
    Cancelled,
}

impl ChallengeStatus {
    /// Every status, in the order the status picker lists them.
    pub const ALL: [ChallengeStatus; 6] = [
        ChallengeStatus::Active,
        ChallengeStatus::Approved,
        ChallengeStatus::New,
        ChallengeStatus::Draft,
        ChallengeStatus::Completed,
        ChallengeStatus::Cancelled,
    ];

    /// Capitalized form used for picker labels ("Draft", "Cancelled").
    pub fn label(self) -> &'static str {
        match self {
            ChallengeStatus::Active => "Active",
            ChallengeStatus::Approved => "Approved",
            ChallengeStatus::New => "New",
            ChallengeStatus::Draft => "Draft",
            ChallengeStatus::Completed => "Completed",
            ChallengeStatus::Cancelled => "Cancelled",
        }
    }
}

enum_display_fromstr!(
    ChallengeStatus,
    ChallengeListError::InvalidStatus,
    {
        Active => "ACTIVE",
        Approved => "APPROVED",
        New => "NEW",
        Draft => "DRAFT",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
);

/// A challenge type as delivered by the type catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeType {
    pub name: String,
    pub abbreviation: String,
}

/// A selected challenge type filter.
///
/// Only `value` takes part in query comparison; `label` is display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeTypeOption {
    pub label: String,
    pub value: String,
}

impl ChallengeTypeOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Normalize a picker selection into a filter.
    ///
    /// The "all types" entry carries no value and maps to `None`.
    pub fn from_selection(label: impl Into<String>, value: Option<String>) -> Option<Self> {
        match value {
            Some(value) if !value.is_empty() => Some(Self::new(label, value)),
            _ => None,
        }
    }
}

impl From<&ChallengeType> for ChallengeTypeOption {
    fn from(t: &ChallengeType) -> Self {
        Self::new(t.name.clone(), t.abbreviation.clone())
    }
}

/// One bound of a [`DateRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeField {
    StartDateStart,
    StartDateEnd,
    EndDateStart,
    EndDateEnd,
}

/// Start/end date window filter. Absent bounds are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_start: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_end: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_start: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_end: Option<Timestamp>,
}

impl DateRange {
    pub fn get(&self, field: DateRangeField) -> Option<Timestamp> {
        match field {
            DateRangeField::StartDateStart => self.start_date_start,
            DateRangeField::StartDateEnd => self.start_date_end,
            DateRangeField::EndDateStart => self.end_date_start,
            DateRangeField::EndDateEnd => self.end_date_end,
        }
    }

    /// Copy of this range with one bound replaced.
    pub fn with(mut self, field: DateRangeField, value: Option<Timestamp>) -> Self {
        let slot = match field {
            DateRangeField::StartDateStart => &mut self.start_date_start,
            DateRangeField::StartDateEnd => &mut self.start_date_end,
            DateRangeField::EndDateStart => &mut self.end_date_start,
            DateRangeField::EndDateEnd => &mut self.end_date_end,
        };
        *slot = value;
        self
    }

    pub fn is_unbounded(&self) -> bool {
        *self == DateRange::default()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = [
            ("startDateStart", self.start_date_start),
            ("startDateEnd", self.start_date_end),
            ("endDateStart", self.end_date_start),
            ("endDateEnd", self.end_date_end),
        ];
        f.write_str("{")?;
        let mut first = true;
        for (name, value) in bounds {
            if let Some(ts) = value {
                if !first {
                    f.write_str(",")?;
                }
                write!(f, "{name}:{ts}")?;
                first = false;
            }
        }
        f.write_str("}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortColumn {
    #[serde(rename = "name")]
    Name,
    #[default]
    #[serde(rename = "startDate")]
    StartDate,
    #[serde(rename = "endDate")]
    EndDate,
}

impl SortColumn {
    /// Columns whose header toggles sorting.
    pub const ALL: [SortColumn; 3] = [SortColumn::Name, SortColumn::StartDate, SortColumn::EndDate];
}

enum_display_fromstr!(
    SortColumn,
    ChallengeListError::InvalidSortColumn,
    {
        Name => "name",
        StartDate => "startDate",
        EndDate => "endDate",
    }
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn flip(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

enum_display_fromstr!(
    SortOrder,
    ChallengeListError::InvalidSortOrder,
    {
        Asc => "asc",
        Desc => "desc",
    }
);

/// A challenge record as handed to the row renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub name: String,
    pub status: ChallengeStatus,
    #[serde(default)]
    pub type_abbreviation: Option<String>,
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
}
