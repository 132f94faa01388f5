//! Leg fragments.
//!
//! One fragment per leg, dispatching on the leg kind. Walking legs are a
//! single line of text; transit legs carry the line badge, product icon,
//! direction, the ride-details row, and — when expanded — the transfer
//! position and intermediate stopovers.

use std::rc::Rc;

use crate::domain::{TransitLeg, WalkingLeg};
use crate::duration;
use crate::frequency::{self, Frequency};
use crate::style::{
    self, DEMAND_RESPONSIVE_PRODUCT, NEUTRAL_BACKGROUND, NEUTRAL_BORDER, NEUTRAL_FOREGROUND,
};
use crate::tree::{Element, Handler, Node};

use super::{Renderer, cls};

impl Renderer {
    pub(super) fn render_walking_leg(&self, leg: &WalkingLeg) -> Node {
        let mut text = format!("{} walk", self.pedestrian);
        if let Some(walk) = leg.duration() {
            text.push_str(" for ");
            text.push_str(&duration::long(walk));
        }

        Element::new("li")
            .class(cls("leg"))
            .class(cls("walking"))
            .style("border-left-color", NEUTRAL_BORDER)
            .child(
                Element::new("div")
                    .class(cls("details"))
                    .child(Node::text(text)),
            )
            .into()
    }

    pub(super) fn render_transit_leg(&self, leg: &TransitLeg, index: usize, expanded: bool) -> Node {
        let product = leg.line.as_ref().and_then(|line| line.product.as_deref());
        let style = product.and_then(|product| style::line_style(&self.styles, product));
        let background = style.as_ref().map(|style| style.background.as_str());
        let foreground = style.as_ref().map(|style| style.foreground.as_str());

        let label = leg
            .line
            .as_ref()
            .and_then(|line| line.name.as_deref())
            .unwrap_or("?");
        let badge = Element::new("div").class(cls("line-container")).child(
            Element::new("span")
                .class(cls("line"))
                .style("background-color", background.unwrap_or(NEUTRAL_BACKGROUND))
                .style("color", foreground.unwrap_or(NEUTRAL_FOREGROUND))
                .child(Node::text(label)),
        );

        let mut element = Element::new("li")
            .class(cls("leg"))
            .style("border-left-color", background.unwrap_or(NEUTRAL_BORDER))
            .child(badge);

        if let (Some(product), Some(icons)) = (product, &self.icons) {
            let category = style::canonical_category(product);
            element = element.child(
                Element::new("img")
                    .class(cls("product"))
                    .attr("alt", category)
                    .attr("src", icons(category)),
            );
        }

        if let Some(direction) = &leg.direction {
            element = element.child(
                Element::new("span")
                    .class(cls("direction"))
                    .child(Node::text(" "))
                    .child(
                        Element::new("abbr")
                            .attr("title", "in direction of")
                            .child(Node::text("→")),
                    )
                    .child(Node::text(format!(" {direction}"))),
            );
        }

        element = element.child(self.render_leg_details(leg, index, expanded));

        if product == Some(DEMAND_RESPONSIVE_PRODUCT) {
            element = element.child(self.render_booking_control(leg));
        }

        if expanded {
            if let Some(stopovers) = &leg.stopovers {
                if stopovers.len() > 2 {
                    let intermediate = stopovers[1..stopovers.len() - 1].iter().map(|stopover| {
                        Element::new("li")
                            .child(self.render_stopover(&stopover.stop, background))
                            .into()
                    });
                    element = element.child(
                        Element::new("ul")
                            .class(cls("details"))
                            .children_from(intermediate),
                    );
                }
            }
        }

        element.into()
    }

    /// The ride-details row: duration, frequency, stopover count, and —
    /// when expanded — the transfer position.
    fn render_leg_details(&self, leg: &TransitLeg, index: usize, expanded: bool) -> Node {
        let mut details = Element::new("div").class(cls("details"));

        if let Some(ride) = leg.duration() {
            details = details
                .child(
                    Element::new("abbr")
                        .attr("title", duration::long(ride))
                        .child(Node::text(format!("{} ride", duration::abbrev(ride)))),
                )
                .child(Node::text(" · "));
        }

        if let Some(frequency) = frequency::resolve(leg) {
            details = details
                .child(self.render_frequency(frequency))
                .child(Node::text(" · "));
        }

        if let Some(stopovers) = &leg.stopovers {
            // The count excludes one endpoint; observable behavior the host
            // team depends on, kept as is.
            let count = stopovers.len() as i64 - 1;
            let unit = if stopovers.len() == 2 { "stop" } else { "stops" };
            details = details.child(
                Element::new("span")
                    .class(cls("link"))
                    .on_click(self.toggle_details_handler(index, expanded))
                    .child(Node::text(format!("{count} {unit}"))),
            );
        }

        if expanded {
            if let Some(position) = leg.arrival_position {
                details = details.child(self.render_transfer_position(position));
            }
        }

        details.into()
    }

    fn render_frequency(&self, frequency: Frequency) -> Node {
        match frequency {
            Frequency::NextDeparture(when) => Element::new("span")
                .child(Node::text("also at "))
                .child(self.render_time(when))
                .into(),
            Frequency::Every { min, max } => {
                let mut text = format!("every {}", duration::abbrev(min));
                if let Some(max) = max {
                    text.push('–');
                    text.push_str(&duration::abbrev(max));
                }
                Element::new("span").child(Node::text(text)).into()
            }
        }
    }

    /// Expand/collapse handler for the stopover-count label, or `None`
    /// when the host supplied no callback for the current direction.
    fn toggle_details_handler(&self, index: usize, expanded: bool) -> Option<Handler> {
        let action = if expanded {
            self.actions.hide_leg_details.clone()
        } else {
            self.actions.show_leg_details.clone()
        }?;
        Some(Rc::new(move || action(index)))
    }
}
