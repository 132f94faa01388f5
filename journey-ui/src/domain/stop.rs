//! Stop and stopover types.
//!
//! A `Stop` is a place a vehicle calls at. A `Stopover` pairs a stop with a
//! scheduled time and an optional delay; it appears both at leg boundaries
//! and as an intermediate call of a transit leg.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stop or station touched by a journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Stop identity
    pub id: String,
    /// Display name
    pub name: String,
    /// Parent station id, when this stop belongs to a larger station
    #[serde(default)]
    pub station: Option<String>,
}

impl Stop {
    /// Creates a stop with no parent station.
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            station: None,
        }
    }
}

/// A stop together with a scheduled time and optional delay.
///
/// The scheduled time is `None` when the upstream value was absent or did
/// not parse; rendering then omits the time annotation rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stopover {
    /// The stop being called at
    pub stop: Stop,
    /// Scheduled time of the call
    #[serde(default)]
    pub when: Option<DateTime<Utc>>,
    /// Delay in seconds, when known
    #[serde(default)]
    pub delay: Option<i64>,
}

impl Stopover {
    /// Creates a stopover with no time or delay information.
    pub fn new(stop: Stop) -> Self {
        Self {
            stop,
            when: None,
            delay: None,
        }
    }
}
