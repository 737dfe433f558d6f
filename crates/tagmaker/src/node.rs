//! Node - anything renderable into the native document
//!
//! Text and raw text leaves live here; elements and wrappers have their own
//! modules.

use std::fmt;

use tagmaker_dom::{Document, DocumentId, DomError, DomResult, NodeId};

use crate::{Element, MultiWrap};

/// Capability shared by every renderable node.
///
/// With a document the node is created inside it; without one the node
/// builds a standalone document of its own and hands it back so the caller
/// can import it.
pub trait Node: fmt::Debug {
    fn to_dom_node(&self, doc: Option<&mut Document>) -> DomResult<NativeNode>;
}

/// Native node produced by [`Node::to_dom_node`], tagged with its owner
#[derive(Debug)]
pub enum NativeNode {
    /// Created inside the document passed to `to_dom_node`
    InDocument(NodeId),
    /// Created inside a document of its own
    Standalone { document: Document, node: NodeId },
}

impl NativeNode {
    /// Document that owns the produced node
    pub fn owner_document(&self) -> DocumentId {
        match self {
            Self::InDocument(id) => id.owner_document(),
            Self::Standalone { node, .. } => node.owner_document(),
        }
    }

    /// Resolve into a node owned by `doc`, importing the subtree when it was
    /// built elsewhere.
    pub fn adopt(self, doc: &mut Document) -> DomResult<NodeId> {
        match self {
            Self::InDocument(id) if id.owner_document() == doc.id() => Ok(id),
            Self::InDocument(_) => Err(DomError::WrongDocument),
            Self::Standalone { document, node } => doc.import_node(&document, node, true),
        }
    }
}

/// Run `build` in the supplied document, or in a fresh one when absent
pub(crate) fn build_native<F>(doc: Option<&mut Document>, build: F) -> DomResult<NativeNode>
where
    F: FnOnce(&mut Document) -> DomResult<NodeId>,
{
    match doc {
        Some(doc) => build(doc).map(NativeNode::InDocument),
        None => {
            let mut document = Document::new();
            let node = build(&mut document)?;
            Ok(NativeNode::Standalone { document, node })
        }
    }
}

/// Plain text; escaped when serialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    text: String,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Node for TextNode {
    fn to_dom_node(&self, doc: Option<&mut Document>) -> DomResult<NativeNode> {
        build_native(doc, |doc| doc.create_text(&self.text))
    }
}

/// Character data section; content is written verbatim, never escaped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTextNode {
    text: String,
}

impl RawTextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Node for RawTextNode {
    fn to_dom_node(&self, doc: Option<&mut Document>) -> DomResult<NativeNode> {
        build_native(doc, |doc| doc.create_cdata_section(&self.text))
    }
}

/// Child argument: any node, or a bare string wrapped as a [`TextNode`]
#[derive(Debug)]
pub struct Child(Box<dyn Node>);

impl Child {
    pub fn new(node: impl Node + 'static) -> Self {
        Self(Box::new(node))
    }

    pub fn as_node(&self) -> &dyn Node {
        self.0.as_ref()
    }
}

impl Node for Child {
    fn to_dom_node(&self, doc: Option<&mut Document>) -> DomResult<NativeNode> {
        self.0.to_dom_node(doc)
    }
}

impl From<Box<dyn Node>> for Child {
    fn from(node: Box<dyn Node>) -> Self {
        Self(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::new(TextNode::new(text))
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::new(TextNode::new(text))
    }
}

macro_rules! child_from_node {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Child {
                fn from(node: $ty) -> Self {
                    Self::new(node)
                }
            }
        )*
    };
}

child_from_node!(TextNode, RawTextNode, Element, MultiWrap);

/// Build a `Vec<Child>` from nodes and strings.
///
/// ```
/// use tagmaker::{Child, children, html};
///
/// let items: Vec<Child> = children![html::b(["Title"]), " and text"];
/// assert_eq!(items.len(), 2);
/// ```
#[macro_export]
macro_rules! children {
    ($($child:expr),* $(,)?) => {
        vec![$($crate::Child::from($child)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagmaker_dom::NodeData;

    #[test]
    fn test_standalone_without_document() {
        let native = TextNode::new("hi").to_dom_node(None).unwrap();
        let NativeNode::Standalone { document, node } = &native else {
            panic!("expected a standalone node");
        };
        assert_eq!(document.id(), native.owner_document());
        assert_eq!(document.text_content(*node), "hi");
    }

    #[test]
    fn test_in_document() {
        let mut doc = Document::new();
        let native = RawTextNode::new("a < b").to_dom_node(Some(&mut doc)).unwrap();
        assert_eq!(native.owner_document(), doc.id());

        let id = native.adopt(&mut doc).unwrap();
        assert_eq!(doc.get(id).unwrap().data(), &NodeData::CData("a < b".to_string()));
    }

    #[test]
    fn test_adopt_imports_standalone() {
        let mut doc = Document::new();
        let native = TextNode::new("moved").to_dom_node(None).unwrap();
        assert_ne!(native.owner_document(), doc.id());

        let id = native.adopt(&mut doc).unwrap();
        assert_eq!(id.owner_document(), doc.id());
        assert_eq!(doc.text_content(id), "moved");
    }

    #[test]
    fn test_adopt_rejects_unknown_owner() {
        let mut other = Document::new();
        let foreign = other.create_text("x").unwrap();
        let mut doc = Document::new();

        assert_eq!(
            NativeNode::InDocument(foreign).adopt(&mut doc),
            Err(DomError::WrongDocument)
        );
    }

    #[test]
    fn test_child_from_str() {
        let child = Child::from("plain");
        let native = child.to_dom_node(None).unwrap();
        let NativeNode::Standalone { document, node } = native else {
            panic!("expected a standalone node");
        };
        assert!(matches!(document.get(node).unwrap().data(), NodeData::Text(t) if t == "plain"));
    }
}
