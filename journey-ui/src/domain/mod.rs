//! Domain types for journey rendering.
//!
//! These types model the journey data handed to the renderer: legs,
//! stopovers, lines, and their timing metadata. They are immutable inputs
//! for the duration of one render call; the renderer never mutates them.
//! Fields that can be absent or unparsable upstream are `Option`s, so
//! degraded data is representable without being an error.

mod journey;
mod leg;
mod line;
mod stop;

pub use journey::Journey;
pub use leg::{Leg, TransitLeg, WalkingLeg};
pub use line::{Alternative, Cycle, Line};
pub use stop::{Stop, Stopover};
