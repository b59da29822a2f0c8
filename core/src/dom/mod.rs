//! Narrow element-building interface the summary view is written against.

pub use memory::*;

mod memory;

/// Attributes for a new element, either a class-string shorthand or a mapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Attrs<'a> {
    #[default]
    None,
    Class(&'a str),
    Map(&'a [(&'a str, &'a str)]),
}

impl<'a> Attrs<'a> {
    pub fn for_each(self, mut f: impl FnMut(&'a str, &'a str)) {
        match self {
            Attrs::None => {}
            Attrs::Class(class) => f("class", class),
            Attrs::Map(attrs) => attrs.iter().for_each(|&(name, value)| f(name, value)),
        }
    }
}

impl<'a> From<&'a str> for Attrs<'a> {
    fn from(class: &'a str) -> Self {
        Attrs::Class(class)
    }
}

/// Initial content of a new element. Text is already resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum Content<N> {
    Empty,
    Text(String),
    Nodes(Vec<N>),
}

impl<N> From<String> for Content<N> {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl<N> From<Vec<N>> for Content<N> {
    fn from(nodes: Vec<N>) -> Self {
        Content::Nodes(nodes)
    }
}

pub trait Dom {
    /// Handle to a live element; clones refer to the same element.
    type Node: Clone;
    /// Keeps a click registration alive until dropped.
    type Listener;

    fn create(&self, tag: &str, attrs: Attrs<'_>, content: Content<Self::Node>) -> Self::Node;

    /// Glyph for an action name.
    fn icon(&self, name: &str) -> Self::Node;

    /// Replaces all content of `node` with `text`.
    fn set_text(&self, node: &Self::Node, text: &str);

    fn set_class(&self, node: &Self::Node, class: &str, on: bool);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn on_click(&self, node: &Self::Node, handler: Box<dyn Fn()>) -> Self::Listener;
}
