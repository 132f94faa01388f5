//! Journey leg types.
//!
//! A `Leg` is one contiguous segment of a journey, either a walk or a ride
//! on a transit line. The two kinds are a tagged variant so that rendering
//! can match exhaustively instead of sniffing for fields.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{Alternative, Cycle, Line, Stop, Stopover};

/// A walk between two stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkingLeg {
    /// Origin stop
    pub origin: Stop,
    /// Destination stop
    pub destination: Stop,
    /// Departure time; `None` when the upstream value did not parse
    #[serde(default)]
    pub departure: Option<DateTime<Utc>>,
    /// Arrival time; `None` when the upstream value did not parse
    #[serde(default)]
    pub arrival: Option<DateTime<Utc>>,
    /// Departure delay in seconds
    #[serde(default)]
    pub departure_delay: Option<i64>,
    /// Arrival delay in seconds
    #[serde(default)]
    pub arrival_delay: Option<i64>,
}

impl WalkingLeg {
    /// Creates a walking leg with no timing data.
    pub fn new(origin: Stop, destination: Stop) -> Self {
        Self {
            origin,
            destination,
            departure: None,
            arrival: None,
            departure_delay: None,
            arrival_delay: None,
        }
    }

    /// Walk duration; `None` when either timestamp is missing.
    pub fn duration(&self) -> Option<Duration> {
        match (self.departure, self.arrival) {
            (Some(departure), Some(arrival)) => Some(arrival - departure),
            _ => None,
        }
    }
}

/// A ride on a transit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitLeg {
    /// Origin stop
    pub origin: Stop,
    /// Destination stop
    pub destination: Stop,
    /// Departure time; `None` when the upstream value did not parse
    #[serde(default)]
    pub departure: Option<DateTime<Utc>>,
    /// Arrival time; `None` when the upstream value did not parse
    #[serde(default)]
    pub arrival: Option<DateTime<Utc>>,
    /// Departure delay in seconds
    #[serde(default)]
    pub departure_delay: Option<i64>,
    /// Arrival delay in seconds
    #[serde(default)]
    pub arrival_delay: Option<i64>,
    /// The line being ridden
    #[serde(default)]
    pub line: Option<Line>,
    /// Direction label, e.g. the terminus shown on the vehicle
    #[serde(default)]
    pub direction: Option<String>,
    /// All calls of this leg, including both endpoints
    #[serde(default)]
    pub stopovers: Option<Vec<Stopover>>,
    /// Recurring-departure interval metadata
    #[serde(default)]
    pub cycle: Option<Cycle>,
    /// Other departures of the same line
    #[serde(default)]
    pub alternatives: Option<Vec<Alternative>>,
    /// Platform position indicator at the arrival stop
    #[serde(default)]
    pub arrival_position: Option<u32>,
    /// Trip identity for demand-responsive booking
    #[serde(default)]
    pub trip_id: Option<String>,
}

impl TransitLeg {
    /// Creates a transit leg with no line, timing, or stopover data.
    pub fn new(origin: Stop, destination: Stop) -> Self {
        Self {
            origin,
            destination,
            departure: None,
            arrival: None,
            departure_delay: None,
            arrival_delay: None,
            line: None,
            direction: None,
            stopovers: None,
            cycle: None,
            alternatives: None,
            arrival_position: None,
            trip_id: None,
        }
    }

    /// Ride duration; `None` when either timestamp is missing.
    pub fn duration(&self) -> Option<Duration> {
        match (self.departure, self.arrival) {
            (Some(departure), Some(arrival)) => Some(arrival - departure),
            _ => None,
        }
    }
}

/// One contiguous segment of a journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Leg {
    /// A walk between stops
    Walking(WalkingLeg),
    /// A ride on a transit line
    Transit(TransitLeg),
}

impl Leg {
    /// Returns the origin stop of this leg.
    pub fn origin(&self) -> &Stop {
        match self {
            Leg::Walking(walk) => &walk.origin,
            Leg::Transit(transit) => &transit.origin,
        }
    }

    /// Returns the destination stop of this leg.
    pub fn destination(&self) -> &Stop {
        match self {
            Leg::Walking(walk) => &walk.destination,
            Leg::Transit(transit) => &transit.destination,
        }
    }

    /// Returns the departure time, when known.
    pub fn departure(&self) -> Option<DateTime<Utc>> {
        match self {
            Leg::Walking(walk) => walk.departure,
            Leg::Transit(transit) => transit.departure,
        }
    }

    /// Returns the arrival time, when known.
    pub fn arrival(&self) -> Option<DateTime<Utc>> {
        match self {
            Leg::Walking(walk) => walk.arrival,
            Leg::Transit(transit) => transit.arrival,
        }
    }

    /// Returns the departure delay in seconds, when known.
    pub fn departure_delay(&self) -> Option<i64> {
        match self {
            Leg::Walking(walk) => walk.departure_delay,
            Leg::Transit(transit) => transit.departure_delay,
        }
    }

    /// Returns the arrival delay in seconds, when known.
    pub fn arrival_delay(&self) -> Option<i64> {
        match self {
            Leg::Walking(walk) => walk.arrival_delay,
            Leg::Transit(transit) => transit.arrival_delay,
        }
    }

    /// Leg duration; `None` when either timestamp is missing.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Leg::Walking(walk) => walk.duration(),
            Leg::Transit(transit) => transit.duration(),
        }
    }

    /// Returns true if this is a walking leg.
    pub fn is_walking(&self) -> bool {
        matches!(self, Leg::Walking(_))
    }

    /// Returns true if this is a transit leg.
    pub fn is_transit(&self) -> bool {
        matches!(self, Leg::Transit(_))
    }

    /// Returns the transit leg, if this is one.
    pub fn as_transit(&self) -> Option<&TransitLeg> {
        match self {
            Leg::Walking(_) => None,
            Leg::Transit(transit) => Some(transit),
        }
    }
}
