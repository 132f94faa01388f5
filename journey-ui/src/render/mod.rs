//! Journey rendering.
//!
//! [`Renderer`] turns a journey plus the host's expanded-leg selection into
//! a view-tree. Construction validates the host-supplied formatters once
//! and fails fast when one is missing; rendering itself never fails —
//! absent or unparsable data degrades to omitted fragments or neutral
//! styling while the rest of the tree renders normally.

mod booking;
mod leg;
mod stopover;
mod transfer;

pub use booking::BookingPayload;

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use tracing::{debug, trace};

use crate::domain::{Journey, Leg};
use crate::style::StyleTable;
use crate::tree::{Element, Node};

/// Class prefix shared by every node the renderer emits.
pub const CLASS_PREFIX: &str = "journey-ui-";

const PEDESTRIANS: [&str; 10] = [
    "🚶🏻‍♀️",
    "🚶🏼‍♀️",
    "🚶🏽‍♀️",
    "🚶🏾‍♀️",
    "🚶🏿‍♀️",
    "🚶🏻‍♂️",
    "🚶🏼‍♂️",
    "🚶🏽‍♂️",
    "🚶🏾‍♂️",
    "🚶🏿‍♂️",
];

/// Formats an absolute timestamp for display.
pub type TimeFormatter = Rc<dyn Fn(DateTime<Utc>) -> String>;
/// Formats a delay in seconds for display.
pub type DelayFormatter = Rc<dyn Fn(i64) -> String>;
/// Resolves an icon reference for a canonical product category.
pub type IconResolver = Rc<dyn Fn(&str) -> String>;
/// Stop-selection callback, receiving the stop id and its parent-station id.
pub type SelectStopFn = Rc<dyn Fn(&str, Option<&str>)>;
/// Expand/collapse callback for a leg index.
pub type LegDetailsFn = Rc<dyn Fn(usize)>;

/// Host-supplied interaction callbacks.
///
/// Every entry is optional; an absent entry leaves the corresponding
/// interaction inert rather than being an error.
#[derive(Clone, Default)]
pub struct Actions {
    /// Invoked when a stop node is selected
    pub select_stop: Option<SelectStopFn>,
    /// Invoked when a collapsed leg's stopover count is activated
    pub show_leg_details: Option<LegDetailsFn>,
    /// Invoked when an expanded leg's stopover count is activated
    pub hide_leg_details: Option<LegDetailsFn>,
}

/// Host-owned set of leg indices currently expanded for detail display.
///
/// The renderer treats this as read-only input per call; expanding and
/// collapsing happen on the host's side in response to the
/// [`Actions::show_leg_details`]/[`Actions::hide_leg_details`] callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSelector(BTreeSet<usize>);

impl DetailSelector {
    /// No legs expanded.
    pub fn none() -> Self {
        Self::default()
    }

    /// Marks a leg index as expanded.
    pub fn expand(&mut self, leg: usize) {
        self.0.insert(leg);
    }

    /// Marks a leg index as collapsed.
    pub fn collapse(&mut self, leg: usize) {
        self.0.remove(&leg);
    }

    /// Returns true if the leg index is expanded.
    pub fn is_expanded(&self, leg: usize) -> bool {
        self.0.contains(&leg)
    }
}

impl FromIterator<usize> for DetailSelector {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fatal configuration errors raised when building a [`Renderer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No time formatter was supplied
    #[error("a time formatter is required")]
    MissingTimeFormatter,
    /// No delay formatter was supplied
    #[error("a delay formatter is required")]
    MissingDelayFormatter,
}

/// Configuration for a [`Renderer`].
///
/// The two formatters are required; everything else defaults to inert or
/// empty.
#[derive(Clone, Default)]
pub struct RendererConfig {
    /// Required timestamp formatter
    pub format_time: Option<TimeFormatter>,
    /// Required delay formatter
    pub format_delay: Option<DelayFormatter>,
    /// Interaction callbacks
    pub actions: Actions,
    /// Product-style lookup table
    pub styles: StyleTable,
    /// Icon resolver keyed by canonical product category
    pub icons: Option<IconResolver>,
}

/// Renders journeys into view-trees.
///
/// One render call consumes one journey plus one [`DetailSelector`] and
/// produces one immutable tree; calls are independent and stateless apart
/// from the decorative walking glyph fixed at construction.
pub struct Renderer {
    format_time: TimeFormatter,
    format_delay: DelayFormatter,
    actions: Actions,
    styles: StyleTable,
    icons: Option<IconResolver>,
    // Fixed once per instance; every walking leg of every render reuses it.
    pedestrian: &'static str,
}

impl Renderer {
    /// Builds a renderer, validating that both formatters are present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either formatter is absent. This is
    /// the only error this crate ever raises; rendering itself cannot fail.
    pub fn new(config: RendererConfig) -> Result<Self, ConfigError> {
        let format_time = config
            .format_time
            .ok_or(ConfigError::MissingTimeFormatter)?;
        let format_delay = config
            .format_delay
            .ok_or(ConfigError::MissingDelayFormatter)?;

        let pedestrian = *PEDESTRIANS
            .choose(&mut rand::rng())
            .unwrap_or(&PEDESTRIANS[0]);

        Ok(Self {
            format_time,
            format_delay,
            actions: config.actions,
            styles: config.styles,
            icons: config.icons,
            pedestrian,
        })
    }

    /// Renders a journey into a view-tree.
    ///
    /// Emits, per leg, the origin stopover and the leg fragment, plus the
    /// destination stopover whenever the following leg does not begin at
    /// the same stop id (or there is no following leg). Consecutive legs
    /// sharing an endpoint thus produce a single stopover node between
    /// their fragments.
    ///
    /// Returns `None` for an absent or empty journey.
    pub fn render(&self, journey: Option<&Journey>, expanded: &DetailSelector) -> Option<Node> {
        let journey = journey?;
        if journey.legs.is_empty() {
            return None;
        }
        debug!(legs = journey.legs.len(), "rendering journey");

        let mut items = Vec::with_capacity(journey.legs.len() * 3);
        for (i, leg) in journey.legs.iter().enumerate() {
            trace!(leg = i, walking = leg.is_walking(), "rendering leg");

            items.push(self.render_boundary(
                leg.origin(),
                leg.departure(),
                leg.departure_delay(),
            ));
            items.push(self.render_leg(leg, i, expanded.is_expanded(i)));

            let render_destination = match journey.legs.get(i + 1) {
                None => true,
                Some(next) => next.origin().id != leg.destination().id,
            };
            if render_destination {
                items.push(self.render_boundary(
                    leg.destination(),
                    leg.arrival(),
                    leg.arrival_delay(),
                ));
            }
        }

        Some(
            Element::new("ul")
                .class(cls("journey"))
                .children_from(items)
                .into(),
        )
    }

    fn render_leg(&self, leg: &Leg, index: usize, expanded: bool) -> Node {
        match leg {
            Leg::Walking(walk) => self.render_walking_leg(walk),
            Leg::Transit(transit) => self.render_transit_leg(transit, index, expanded),
        }
    }

    /// `time` element wrapping the formatted timestamp.
    fn render_time(&self, when: DateTime<Utc>) -> Node {
        Element::new("time")
            .attr("datetime", when.to_rfc3339())
            .child(Node::text((self.format_time)(when)))
            .into()
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("pedestrian", &self.pedestrian)
            .finish_non_exhaustive()
    }
}

/// Prefixes a class name with the shared naming scheme.
fn cls(name: &str) -> String {
    format!("{CLASS_PREFIX}{name}")
}

#[cfg(test)]
mod test_support {
    use super::*;

    pub fn config() -> RendererConfig {
        RendererConfig {
            format_time: Some(Rc::new(|when| when.format("%H:%M").to_string())),
            format_delay: Some(Rc::new(|seconds| format!("+{}", seconds / 60))),
            ..Default::default()
        }
    }

    pub fn renderer() -> Renderer {
        Renderer::new(config()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{config, renderer};
    use super::*;
    use chrono::TimeZone;

    use crate::domain::{Stop, TransitLeg, WalkingLeg};

    fn stop(id: &str, name: &str) -> Stop {
        Stop::new(id.into(), name.into())
    }

    fn transit(from: &str, to: &str) -> Leg {
        Leg::Transit(TransitLeg::new(
            stop(from, &from.to_uppercase()),
            stop(to, &to.to_uppercase()),
        ))
    }

    fn journey(legs: Vec<Leg>) -> Journey {
        Journey::new(legs)
    }

    #[test]
    fn missing_time_formatter_is_a_config_error() {
        let mut config = config();
        config.format_time = None;

        assert_eq!(
            Renderer::new(config).unwrap_err(),
            ConfigError::MissingTimeFormatter
        );
    }

    #[test]
    fn missing_delay_formatter_is_a_config_error() {
        let mut config = config();
        config.format_delay = None;

        assert_eq!(
            Renderer::new(config).unwrap_err(),
            ConfigError::MissingDelayFormatter
        );
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::MissingTimeFormatter.to_string(),
            "a time formatter is required"
        );
        assert_eq!(
            ConfigError::MissingDelayFormatter.to_string(),
            "a delay formatter is required"
        );
    }

    #[test]
    fn absent_journey_renders_nothing() {
        let tree = renderer().render(None, &DetailSelector::none());

        assert!(tree.is_none());
    }

    #[test]
    fn empty_journey_renders_nothing() {
        let tree = renderer().render(Some(&journey(Vec::new())), &DetailSelector::none());

        assert!(tree.is_none());
    }

    #[test]
    fn single_leg_emits_both_boundaries() {
        let tree = renderer()
            .render(Some(&journey(vec![transit("a", "b")])), &DetailSelector::none())
            .unwrap();

        let root = tree.as_element().unwrap();
        assert_eq!(root.tag(), "ul");
        assert!(root.has_class("journey-ui-journey"));
        // origin stopover, leg, destination stopover
        assert_eq!(root.children().len(), 3);
    }

    #[test]
    fn shared_endpoint_emits_one_stopover_between_legs() {
        let legs = vec![transit("a", "b"), transit("b", "c")];
        let tree = renderer()
            .render(Some(&journey(legs)), &DetailSelector::none())
            .unwrap();

        // origin A, leg, stopover B, leg, destination C — no duplicate B.
        let root = tree.as_element().unwrap();
        assert_eq!(root.children().len(), 5);

        let names: Vec<String> = tree
            .find_all_class("journey-ui-name")
            .iter()
            .map(|name| name.text_content())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn boundary_mismatch_emits_both_stopovers() {
        let legs = vec![transit("a", "b"), transit("c", "d")];
        let tree = renderer()
            .render(Some(&journey(legs)), &DetailSelector::none())
            .unwrap();

        // origin A, leg, destination B, origin C, leg, destination D.
        let root = tree.as_element().unwrap();
        assert_eq!(root.children().len(), 6);

        let names: Vec<String> = tree
            .find_all_class("journey-ui-name")
            .iter()
            .map(|name| name.text_content())
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn mixed_walking_and_transit_render_in_order() {
        let mut walk = WalkingLeg::new(stop("b", "B"), stop("c", "C"));
        walk.departure = Some(Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap());
        walk.arrival = Some(Utc.with_ymd_and_hms(2024, 3, 15, 10, 5, 0).unwrap());

        let legs = vec![transit("a", "b"), Leg::Walking(walk), transit("c", "d")];
        let tree = renderer()
            .render(Some(&journey(legs)), &DetailSelector::none())
            .unwrap();

        let walking = tree.find_all_class("journey-ui-walking");
        assert_eq!(walking.len(), 1);

        let legs = tree.find_all_class("journey-ui-leg");
        assert_eq!(legs.len(), 3);
    }

    #[test]
    fn detail_selector_round_trip() {
        let mut selector = DetailSelector::none();
        assert!(!selector.is_expanded(1));

        selector.expand(1);
        assert!(selector.is_expanded(1));

        selector.collapse(1);
        assert!(!selector.is_expanded(1));

        let selector: DetailSelector = [0, 2].into_iter().collect();
        assert!(selector.is_expanded(0));
        assert!(!selector.is_expanded(1));
        assert!(selector.is_expanded(2));
    }
}
