//! Journey type.

use serde::{Deserialize, Serialize};

use super::Leg;

/// An ordered sequence of legs making up one trip.
///
/// Legs are assumed temporally and spatially contiguous; consecutive legs
/// may share an endpoint stop. No contiguity validation happens here — the
/// renderer treats journey data defensively and degrades rather than fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    /// The legs in travel order
    pub legs: Vec<Leg>,
}

impl Journey {
    /// Creates a journey from legs in travel order.
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }
}
