//! Demand-responsive booking control.
//!
//! Demand-responsive legs carry a booking control whose payload the host's
//! booking collaborator consumes. The control has five mutually-exclusive
//! visual states; which one is shown is entirely the host's concern — the
//! engine only emits the control, its faces, and the payload.

use serde::{Deserialize, Serialize};

use crate::domain::TransitLeg;
use crate::tree::{Element, Node};

use super::{Renderer, cls};

/// Payload handed to the host's booking collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    /// Trip identity of the demand-responsive leg
    pub trip_id: Option<String>,
    /// Origin stop id
    pub origin: String,
    /// Destination stop id
    pub destination: String,
    /// Display name of the line
    pub line_name: Option<String>,
}

impl BookingPayload {
    fn from_leg(leg: &TransitLeg) -> Self {
        Self {
            trip_id: leg.trip_id.clone(),
            origin: leg.origin.id.clone(),
            destination: leg.destination.id.clone(),
            line_name: leg.line.as_ref().and_then(|line| line.name.clone()),
        }
    }
}

/// The five state faces, in emission order.
const STATE_FACES: [(&str, &str); 5] = [
    ("loading", "⌛️"),
    ("success", "✅ Booked"),
    ("failure", "❌ Fully booked"),
    ("unavailable", "📞 Not available"),
    ("idle", "Book"),
];

impl Renderer {
    pub(super) fn render_booking_control(&self, leg: &TransitLeg) -> Node {
        let payload = BookingPayload::from_leg(leg);
        let value = serde_json::to_string(&payload).unwrap_or_default();

        let mut control = Element::new("button")
            .class(cls("booking-button"))
            .class(cls("idle"))
            .attr("value", value);

        for (state, label) in STATE_FACES {
            control = control.child(
                Element::new("div")
                    .class(cls(&format!("booking-{state}")))
                    .child(Node::text(label)),
            );
        }

        control.into()
    }
}
