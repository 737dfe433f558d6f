//! Document - Arena-backed node owner
//!
//! Every node belongs to exactly one document. Nodes from another document
//! must go through [`Document::import_node`] before they can be attached.

use crate::node::{Node, NodeData};
use crate::operations::validate_name;
use crate::{DocumentId, DomError, DomResult, NodeId};

/// Native document
#[derive(Debug, Clone)]
pub struct Document {
    id: DocumentId,
    nodes: Vec<Node>,
}

impl Document {
    /// Create a new document holding only its root node
    pub fn new() -> Self {
        Self {
            id: DocumentId::next(),
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    /// Identifier compared against `NodeId::owner_document`
    #[inline]
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Root node ID
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::root(self.id)
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing but the root has been created
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.owner_document() != self.id {
            return None;
        }
        self.nodes.get(id.index())
    }

    pub(crate) fn node(&self, id: NodeId) -> DomResult<&Node> {
        if id.owner_document() != self.id {
            return Err(DomError::WrongDocument);
        }
        self.nodes.get(id.index()).ok_or(DomError::NotFound)
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        if id.owner_document() != self.id {
            return Err(DomError::WrongDocument);
        }
        self.nodes.get_mut(id.index()).ok_or(DomError::NotFound)
    }

    fn push(&mut self, data: NodeData) -> DomResult<NodeId> {
        let id = NodeId::new(self.id, self.nodes.len())?;
        self.nodes.push(Node::new(data));
        Ok(id)
    }

    /// Create a detached element; HTML tag names are stored lowercase
    pub fn create_element(&mut self, tag: &str) -> DomResult<NodeId> {
        validate_name(tag)?;
        self.push(NodeData::Element(crate::ElementData::new(&tag.to_ascii_lowercase())))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> DomResult<NodeId> {
        self.push(NodeData::Text(text.to_string()))
    }

    /// Create a detached character data section
    pub fn create_cdata_section(&mut self, data: &str) -> DomResult<NodeId> {
        self.push(NodeData::CData(data.to_string()))
    }

    /// Create an empty document fragment
    pub fn create_document_fragment(&mut self) -> DomResult<NodeId> {
        self.push(NodeData::Fragment)
    }

    /// Tag name of an element node
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.tag_name())
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> DomResult<()> {
        validate_name(name)?;
        self.node_mut(element)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?
            .set_attr(name, value);
        Ok(())
    }

    /// Get an attribute value from an element
    pub fn get_attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.get(element)?.as_element()?.get_attr(name)
    }

    /// Check if an element carries an attribute
    pub fn has_attribute(&self, element: NodeId, name: &str) -> bool {
        self.get_attribute(element, name).is_some()
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, element: NodeId, name: &str) -> DomResult<Option<String>> {
        Ok(self
            .node_mut(element)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?
            .remove_attr(name))
    }

    /// Children of a node (empty for unknown IDs)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children()).unwrap_or(&[])
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent()
    }

    /// Concatenated text and character data of a subtree
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Text(text) | NodeData::CData(text) => out.push_str(text),
            _ => {
                for &child in node.children() {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Append a child, moving it out of any previous parent.
    ///
    /// Appending a fragment moves the fragment's children instead and leaves
    /// the fragment empty.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if !self.node(parent)?.is_container() {
            return Err(DomError::HierarchyRequest);
        }
        let is_fragment = match self.node(child)?.data {
            NodeData::Document => return Err(DomError::HierarchyRequest),
            NodeData::Fragment => true,
            _ => false,
        };
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest);
        }

        if is_fragment {
            let moved = std::mem::take(&mut self.node_mut(child)?.children);
            tracing::trace!(count = moved.len(), "splicing fragment children");
            for grandchild in moved {
                self.nodes[grandchild.index()].parent = None;
                self.append_child(parent, grandchild)?;
            }
            return Ok(child);
        }

        self.detach(child);
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(parent);
        Ok(child)
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old) = self.nodes[child.index()].parent.take() {
            self.nodes[old.index()].children.retain(|&c| c != child);
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Copy a node from another document into this one.
    ///
    /// With `deep` the whole subtree is copied, preserving child order. The
    /// returned node is detached.
    pub fn import_node(&mut self, source: &Document, node: NodeId, deep: bool) -> DomResult<NodeId> {
        let original = source.node(node)?;
        if matches!(original.data, NodeData::Document) {
            return Err(DomError::InvalidNodeType);
        }
        tracing::trace!(from = ?source.id(), to = ?self.id, deep, "importing node");

        let imported = self.push(original.data.clone())?;
        if deep {
            for &child in original.children() {
                let copy = self.import_node(source, child, true)?;
                self.append_child(imported, copy)?;
            }
        }
        Ok(imported)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
