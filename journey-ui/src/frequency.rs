//! Ride-frequency resolution.
//!
//! Derives an "every N minutes" or "also departs at" description for a
//! transit leg. Concrete alternative departures take precedence over cycle
//! metadata.

use chrono::{DateTime, Duration, Utc};

use crate::domain::TransitLeg;

/// How often, or when next, a leg's line departs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frequency {
    /// The earliest other departure of the same line.
    NextDeparture(DateTime<Utc>),
    /// A recurring interval; `max` is present only when it differs from `min`.
    Every {
        /// Minimum interval between departures
        min: Duration,
        /// Maximum interval, when departures are not evenly spaced
        max: Option<Duration>,
    },
}

/// Resolves frequency information for a transit leg.
///
/// A leg carrying an alternatives list is resolved from that list alone:
/// the earliest timed departure of the leg's own line wins, and zero
/// matches yield `None` without falling back to cycle data. A leg without
/// alternatives falls back to its cycle, when one is present.
pub fn resolve(leg: &TransitLeg) -> Option<Frequency> {
    if let Some(alternatives) = &leg.alternatives {
        let line_id = leg.line.as_ref().map(|line| line.id.as_str());
        return alternatives
            .iter()
            .filter(|alternative| line_id == Some(alternative.line.id.as_str()))
            .filter_map(|alternative| alternative.when)
            .min()
            .map(Frequency::NextDeparture);
    }

    let cycle = leg.cycle?;
    let max = cycle
        .max
        .filter(|&max| max != cycle.min)
        .map(Duration::seconds);
    Some(Frequency::Every {
        min: Duration::seconds(cycle.min),
        max,
    })
}
