use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::*;

/// In-process element tree, for tests and headless hosts.
#[derive(Copy, Clone, Debug, Default)]
pub struct MemoryDom;

#[derive(Clone)]
pub struct MemoryNode(Rc<NodeData>);

struct NodeData {
    tag: String,
    attrs: RefCell<Vec<(String, String)>>,
    classes: RefCell<Vec<String>>,
    text: RefCell<String>,
    children: RefCell<Vec<MemoryNode>>,
    listeners: RefCell<Vec<Rc<dyn Fn()>>>,
}

impl MemoryNode {
    fn new(tag: &str) -> Self {
        Self(Rc::new(NodeData {
            tag: tag.to_string(),
            attrs: Default::default(),
            classes: Default::default(),
            text: Default::default(),
            children: Default::default(),
            listeners: Default::default(),
        }))
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.0
            .attrs
            .borrow()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.classes.borrow().clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    fn set_class(&self, class: &str, on: bool) {
        let mut classes = self.0.classes.borrow_mut();
        let present = classes.iter().position(|c| c == class);
        match (present, on) {
            (None, true) => classes.push(class.to_string()),
            (Some(index), false) => {
                classes.remove(index);
            }
            _ => {}
        }
    }

    /// Text set directly on this node.
    pub fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    /// Text of this node and all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = self.text();
        for child in self.children() {
            out.push_str(&child.text_content());
        }
        out
    }

    fn set_text(&self, text: &str) {
        self.0.children.borrow_mut().clear();
        *self.0.text.borrow_mut() = text.to_string();
    }

    pub fn children(&self) -> Vec<MemoryNode> {
        self.0.children.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    /// Runs every click handler once. Handlers may mutate the tree.
    pub fn click(&self) {
        let listeners = self.0.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    /// First node carrying `class`, depth first, starting with `self`.
    pub fn find(&self, class: &str) -> Option<MemoryNode> {
        if self.has_class(class) {
            return Some(self.clone());
        }
        self.children().iter().find_map(|child| child.find(class))
    }

    pub fn find_all(&self, class: &str) -> Vec<MemoryNode> {
        let mut found = Vec::new();
        self.collect_class(class, &mut found);
        found
    }

    fn collect_class(&self, class: &str, found: &mut Vec<MemoryNode>) {
        if self.has_class(class) {
            found.push(self.clone());
        }
        for child in self.children() {
            child.collect_class(class, found);
        }
    }

    pub fn same_node(&self, other: &MemoryNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryNode")
            .field("tag", &self.0.tag)
            .field("classes", &self.0.classes.borrow())
            .field("text", &self.0.text.borrow())
            .field("children", &self.0.children.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Dom for MemoryDom {
    type Node = MemoryNode;
    type Listener = ();

    fn create(&self, tag: &str, attrs: Attrs<'_>, content: Content<Self::Node>) -> Self::Node {
        let node = MemoryNode::new(tag);
        attrs.for_each(|name, value| {
            if name == "class" {
                value
                    .split_whitespace()
                    .for_each(|class| node.set_class(class, true));
            } else {
                node.0
                    .attrs
                    .borrow_mut()
                    .push((name.to_string(), value.to_string()));
            }
        });
        match content {
            Content::Empty => {}
            Content::Text(text) => node.set_text(&text),
            Content::Nodes(children) => *node.0.children.borrow_mut() = children,
        }
        node
    }

    fn icon(&self, name: &str) -> Self::Node {
        let class = format!("icon icon-{}", name);
        self.create("i", Attrs::Class(&class), Content::Empty)
    }

    fn set_text(&self, node: &Self::Node, text: &str) {
        node.set_text(text);
    }

    fn set_class(&self, node: &Self::Node, class: &str, on: bool) {
        node.set_class(class, on);
    }

    fn has_class(&self, node: &Self::Node, class: &str) -> bool {
        node.has_class(class)
    }

    fn on_click(&self, node: &Self::Node, handler: Box<dyn Fn()>) -> Self::Listener {
        node.0.listeners.borrow_mut().push(Rc::from(handler));
    }
}
