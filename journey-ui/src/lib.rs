//! Journey view-tree rendering for public-transport UIs.
//!
//! Turns a structured journey — an ordered sequence of walking and transit
//! legs with stopovers, timing, and line metadata — into a tree of
//! labelled, styled view nodes. The host UI owns the screen, the event
//! loop, and all persistent state; rendering here is a pure, synchronous
//! transformation with no I/O and no mutable state beyond the inputs of
//! each call.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use journey_ui::domain::{Journey, Leg, Line, Stop, TransitLeg};
//! use journey_ui::render::{DetailSelector, Renderer, RendererConfig};
//!
//! let config = RendererConfig {
//!     format_time: Some(Rc::new(|when| when.format("%H:%M").to_string())),
//!     format_delay: Some(Rc::new(|seconds| format!("+{} min", seconds / 60))),
//!     ..Default::default()
//! };
//! let renderer = Renderer::new(config).unwrap();
//!
//! let mut leg = TransitLeg::new(
//!     Stop::new("900003201".into(), "Hauptbahnhof".into()),
//!     Stop::new("900260005".into(), "Flughafen BER".into()),
//! );
//! leg.line = Some(Line::new("s9".into()));
//!
//! let journey = Journey::new(vec![Leg::Transit(leg)]);
//! let tree = renderer
//!     .render(Some(&journey), &DetailSelector::none())
//!     .unwrap();
//!
//! assert!(tree.as_element().unwrap().has_class("journey-ui-journey"));
//! ```

pub mod domain;
pub mod duration;
pub mod frequency;
pub mod render;
pub mod style;
pub mod tree;
