//! Row types for the character table and the timeline events

use serde::{Deserialize, Serialize};

use crate::backfill::YearSpan;

/// Display label for a missing category value
pub const UNKNOWN_LABEL: &str = "Unknown";

// ============================================================================
// Character Rows
// ============================================================================

/// One row of the character table.
///
/// A row carries the character's attributes and, when `relationship_target`
/// is set, one outgoing relationship edge as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub house: Option<String>,
    pub culture: Option<String>,
    pub book: Option<String>,
    pub born: Option<i32>,
    pub died: Option<i32>,
    pub detail: Option<String>,
    pub url: Option<String>,
    pub relationship_target: Option<String>,
    pub relationship_type: Option<String>,
}

impl CharacterRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// House for display, `"Unknown"` when absent
    pub fn house_label(&self) -> &str {
        self.house.as_deref().unwrap_or(UNKNOWN_LABEL)
    }

    /// Culture for display, `"Unknown"` when absent
    pub fn culture_label(&self) -> &str {
        self.culture.as_deref().unwrap_or(UNKNOWN_LABEL)
    }

    pub fn years(&self) -> YearSpan {
        YearSpan::new(self.born, self.died)
    }

    /// `died - born` when both years are known
    pub fn lifespan(&self) -> Option<i32> {
        self.years().lifespan()
    }

    /// True when this row also encodes an edge to another character
    pub fn is_edge(&self) -> bool {
        self.relationship_target
            .as_deref()
            .is_some_and(|target| target != self.name)
    }
}

// ============================================================================
// Timeline Events
// ============================================================================

/// A `(year, label)` annotation drawn on the lifespan timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMarker {
    pub year: i32,
    pub label: String,
}
