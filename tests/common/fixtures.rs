//! Builders for query and challenge fixtures.

use challenge_list::{
    Challenge, ChallengeStatus, ChallengeType, DisplayedQuery, FilterTuple, SortColumn, SortOrder,
    SortSpec,
};

pub fn challenge(id: &str, status: ChallengeStatus) -> Challenge {
    Challenge {
        id: id.to_string(),
        name: format!("Challenge {id}"),
        status,
        type_abbreviation: None,
        start_date: None,
        end_date: None,
    }
}

pub fn challenge_types() -> Vec<ChallengeType> {
    vec![
        ChallengeType {
            name: "Challenge".to_string(),
            abbreviation: "CH".to_string(),
        },
        ChallengeType {
            name: "First2Finish".to_string(),
            abbreviation: "F2F".to_string(),
        },
        ChallengeType {
            name: "Task".to_string(),
            abbreviation: "TSK".to_string(),
        },
    ]
}

/// Builder for the query the owner reports as on screen.
pub struct DisplayedBuilder {
    query: DisplayedQuery,
}

impl DisplayedBuilder {
    pub fn new() -> Self {
        Self {
            query: DisplayedQuery::default(),
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.query.page = page;
        self
    }

    pub fn total(mut self, total_count: u64) -> Self {
        self.query.total_count = total_count;
        self
    }

    pub fn project(mut self, project_id: u64) -> Self {
        self.query.project_id = Some(project_id);
        self
    }

    pub fn self_service(mut self) -> Self {
        self.query.self_service = true;
        self
    }

    pub fn filters(mut self, filters: FilterTuple) -> Self {
        self.query.filters = filters;
        self
    }

    pub fn sort(mut self, by: SortColumn, order: SortOrder) -> Self {
        self.query.sort = SortSpec::new(by, order);
        self
    }

    pub fn build(self) -> DisplayedQuery {
        self.query
    }
}
