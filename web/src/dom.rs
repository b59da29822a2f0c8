use breaklock_core::{Attrs, Content, Dom};
use gloo::events::EventListener;
use web_sys::{Document, Element};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// [`Dom`] backed by the browser document.
#[derive(Clone, Debug)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new() -> Self {
        Self::with_document(gloo::utils::document())
    }

    pub fn with_document(document: Document) -> Self {
        Self { document }
    }

    /// `createElement` only throws for malformed tag names, and every tag
    /// passed here is a literal in this workspace.
    fn element(&self, namespace: Option<&str>, tag: &str) -> Element {
        let created = match namespace {
            Some(_) => self.document.create_element_ns(namespace, tag),
            None => self.document.create_element(tag),
        };
        created.unwrap_or_else(|err| panic!("invalid tag name <{}>: {:?}", tag, err))
    }

    fn set_attribute(element: &Element, name: &str, value: &str) {
        if let Err(err) = element.set_attribute(name, value) {
            log::error!("failed to set {}={:?}: {:?}", name, value, err);
        }
    }

    fn append(parent: &Element, child: &Element) {
        if let Err(err) = parent.append_child(child) {
            log::error!("failed to append <{}>: {:?}", child.tag_name(), err);
        }
    }
}

impl Default for WebDom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for WebDom {
    type Node = Element;
    type Listener = EventListener;

    fn create(&self, tag: &str, attrs: Attrs<'_>, content: Content<Self::Node>) -> Self::Node {
        let element = self.element(None, tag);
        attrs.for_each(|name, value| Self::set_attribute(&element, name, value));
        match content {
            Content::Empty => {}
            Content::Text(text) => element.set_text_content(Some(&text)),
            Content::Nodes(children) => {
                for child in &children {
                    Self::append(&element, child);
                }
            }
        }
        element
    }

    fn icon(&self, name: &str) -> Self::Node {
        let svg = self.element(Some(SVG_NS), "svg");
        let glyph = self.element(Some(SVG_NS), "use");
        Self::set_attribute(&svg, "class", &format!("icon icon-{}", name));
        Self::set_attribute(&glyph, "href", &format!("#icon-{}", name));
        Self::append(&svg, &glyph);
        svg
    }

    fn set_text(&self, node: &Self::Node, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_class(&self, node: &Self::Node, class: &str, on: bool) {
        if let Err(err) = node.class_list().toggle_with_force(class, on) {
            log::error!("failed to toggle class {}: {:?}", class, err);
        }
    }

    fn has_class(&self, node: &Self::Node, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn on_click(&self, node: &Self::Node, handler: Box<dyn Fn()>) -> Self::Listener {
        EventListener::new(node, "click", move |_| handler())
    }
}
