//! View-tree value types.
//!
//! The renderer produces a tree of `Node`s: element nodes with a tag,
//! classes, attributes, inline styles, and ordered children, plus plain
//! text runs. The host UI owns the screen and decides how the tree is
//! materialized. Interactive nodes carry opaque click handlers built over
//! the host's action callbacks; nothing here assumes a particular dispatch
//! mechanism.

use std::fmt;
use std::rc::Rc;

/// Opaque click handler embedded in a tree node.
pub type Handler = Rc<dyn Fn()>;

/// A view-tree node: an element or a run of text.
#[derive(Debug, Clone)]
pub enum Node {
    /// An element with tag, attributes, and children
    Element(Element),
    /// A run of text
    Text(String),
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Returns the element, if this is an element node.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Returns the text, if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Element(_) => None,
            Node::Text(text) => Some(text),
        }
    }

    /// Concatenated text content of this node and all its descendants,
    /// in document order.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }

    /// Depth-first search for the first descendant element carrying the
    /// given class (this node included).
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        let element = self.as_element()?;
        if element.has_class(class) {
            return Some(element);
        }
        element
            .children()
            .iter()
            .find_map(|child| child.find_class(class))
    }

    /// All descendant elements carrying the given class, in document order.
    pub fn find_all_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_class(class, &mut found);
        found
    }

    fn collect_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in element.children() {
                child.collect_class(class, found);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element node.
///
/// Built incrementally with the chaining methods; read back with the
/// accessor methods. Click handlers are intentionally excluded from
/// `Debug` output.
#[derive(Clone)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attrs: Vec<(&'static str, String)>,
    styles: Vec<(&'static str, String)>,
    on_click: Option<Handler>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element with the given tag.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            styles: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }

    /// Adds a class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Adds an attribute.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Adds an inline style property.
    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    /// Sets the click handler; `None` leaves the element inert.
    pub fn on_click(mut self, handler: Option<Handler>) -> Self {
        self.on_click = handler;
        self
    }

    /// Appends a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends all given child nodes.
    pub fn children_from(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns the tag name.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Returns the classes in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns true if this element carries the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an inline style value by property name.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(prop, _)| *prop == property)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the click handler, when one is set.
    pub fn handler(&self) -> Option<&Handler> {
        self.on_click.as_ref()
    }

    /// Returns the children in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text content of all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            text.push_str(&child.text_content());
        }
        text
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("classes", &self.classes)
            .field("attrs", &self.attrs)
            .field("styles", &self.styles)
            .field("on_click", &self.on_click.is_some())
            .field("children", &self.children)
            .finish()
    }
}
