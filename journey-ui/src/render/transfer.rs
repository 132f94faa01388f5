//! Transfer-position fragment.

use crate::tree::{Element, Node};

use super::{Renderer, cls};

impl Renderer {
    /// Indicator for where along the arrival platform the transfer
    /// continues. Only rendered for expanded legs that carry a position.
    pub(super) fn render_transfer_position(&self, position: u32) -> Node {
        Element::new("div")
            .class(cls("transfer-position"))
            .child(
                Element::new("span")
                    .class(cls("position"))
                    .child(Node::text(format!("position {position}"))),
            )
            .into()
    }
}
