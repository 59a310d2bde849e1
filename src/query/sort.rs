//! Column sort state for the challenge list.
//!
//! Clicking the active column flips its direction; clicking any other
//! column selects it and always starts descending, whatever direction the
//! previous column was left in.

use serde::{Deserialize, Serialize};

use crate::types::{SortColumn, SortOrder};

/// Sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub by: SortColumn,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(by: SortColumn, order: SortOrder) -> Self {
        Self { by, order }
    }

    /// Sort state after a click on `column`'s header.
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.by == column {
            Self {
                by: column,
                order: self.order.flip(),
            }
        } else {
            Self {
                by: column,
                order: SortOrder::Desc,
            }
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.order == SortOrder::Asc
    }
}
