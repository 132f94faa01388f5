//! Stop and stopover fragments.
//!
//! Stops render as selectable nodes wired to the host's `select_stop`
//! callback. Boundary stopovers (leg origins and destinations) additionally
//! carry time and delay annotations when that data is present.

use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::domain::Stop;
use crate::tree::{Element, Handler, Node};

use super::{Renderer, cls};

impl Renderer {
    /// Click handler selecting a stop, or `None` when the host supplied no
    /// callback (the node stays inert).
    fn select_stop_handler(&self, stop: &Stop) -> Option<Handler> {
        let action = self.actions.select_stop.clone()?;
        let id = stop.id.clone();
        let station = stop.station.clone();
        Some(Rc::new(move || action(&id, station.as_deref())))
    }

    /// Selectable stop node.
    fn render_stop(&self, stop: &Stop) -> Node {
        Element::new("div")
            .class(cls("link"))
            .on_click(self.select_stop_handler(stop))
            .child(Node::text(stop.name.clone()))
            .into()
    }

    /// Selectable intermediate stopover, underlined with the leg color.
    pub(super) fn render_stopover(&self, stop: &Stop, color: Option<&str>) -> Node {
        let mut element = Element::new("div")
            .class(cls("link"))
            .class(cls("stopover"))
            .on_click(self.select_stop_handler(stop));
        if let Some(color) = color {
            element = element.style("border-bottom-color", color);
        }
        element.child(Node::text(stop.name.clone())).into()
    }

    /// Boundary stopover: the stop name, then — when present — the
    /// scheduled time and the delay annotation. An absent or unparsable
    /// time simply drops the annotation.
    pub(super) fn render_boundary(
        &self,
        stop: &Stop,
        when: Option<DateTime<Utc>>,
        delay: Option<i64>,
    ) -> Node {
        let mut element = Element::new("li").class(cls("stopover")).child(
            Element::new("div")
                .class(cls("name"))
                .child(self.render_stop(stop)),
        );

        if let Some(when) = when {
            element = element.child(
                Element::new("div")
                    .class(cls("when"))
                    .child(self.render_time(when)),
            );
        }

        if let Some(delay) = delay {
            element = element.child(
                Element::new("div")
                    .class(cls("delay"))
                    .child(Node::text((self.format_delay)(delay))),
            );
        }

        element.into()
    }
}
