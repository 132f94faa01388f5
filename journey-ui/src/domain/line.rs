//! Line, cycle, and alternative-departure metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A transit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Line identity, used to match alternative departures of the same line
    pub id: String,
    /// Display name shown on the line badge
    #[serde(default)]
    pub name: Option<String>,
    /// Raw transport product code (e.g. `"suburban"`, `"regionalExp"`, `"taxi"`)
    #[serde(default)]
    pub product: Option<String>,
}

impl Line {
    /// Creates a line with no name or product.
    pub fn new(id: String) -> Self {
        Self {
            id,
            name: None,
            product: None,
        }
    }
}

/// Recurring-departure interval metadata for a line.
///
/// Intervals are in seconds. `max` is meaningful only when it differs from
/// `min`; equal values describe a fixed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Minimum interval between departures
    pub min: i64,
    /// Maximum interval, when departures are not evenly spaced
    #[serde(default)]
    pub max: Option<i64>,
}

/// A candidate other departure of the same line.
///
/// Used to derive a "next occurrence" display when explicit cycle data is
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    /// The line this departure belongs to
    pub line: Line,
    /// Departure time; `None` when the upstream value did not parse
    #[serde(default)]
    pub when: Option<DateTime<Utc>>,
}
