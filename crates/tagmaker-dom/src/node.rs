//! DOM Node
//!
//! Nodes live in a document arena and refer to each other by `NodeId`.

use html5ever::{LocalName, Namespace, QualName};

use crate::NodeId;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    /// Parent node, if attached
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in document order
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Node-specific data
    #[inline]
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Whether children may be appended to this node
    pub(crate) fn is_container(&self) -> bool {
        matches!(
            self.data,
            NodeData::Document | NodeData::Fragment | NodeData::Element(_)
        )
    }
}

/// Node-specific data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Document root
    Document,
    /// Document fragment; its children move into the parent on append
    Fragment,
    /// Element
    Element(ElementData),
    /// Text content, escaped on serialization
    Text(String),
    /// Character data section, written verbatim
    CData(String),
}

/// Element-specific data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Tag name (HTML namespace)
    pub name: QualName,
    /// Attributes in insertion order
    pub attrs: Vec<Attribute>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            name: QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag)),
            attrs: Vec::new(),
        }
    }

    /// Local tag name
    pub fn tag_name(&self) -> &str {
        &self.name.local
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.local_name() == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, keeping its position when it already exists
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for attr in self.attrs.iter_mut() {
            if attr.local_name() == name {
                attr.value = value.to_string();
                return;
            }
        }
        self.attrs.push(Attribute::new(name, value));
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|a| a.local_name() == name)?;
        Some(self.attrs.remove(index).value)
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
            value: value.to_string(),
        }
    }

    pub fn local_name(&self) -> &str {
        &self.name.local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut elem = ElementData::new("a");
        elem.set_attr("href", "/one");
        elem.set_attr("id", "link");
        elem.set_attr("href", "/two");

        let names: Vec<_> = elem.attrs.iter().map(|a| a.local_name()).collect();
        assert_eq!(names, ["href", "id"]);
        assert_eq!(elem.get_attr("href"), Some("/two"));
    }

    #[test]
    fn test_remove_attr() {
        let mut elem = ElementData::new("input");
        elem.set_attr("disabled", "disabled");

        assert_eq!(elem.remove_attr("disabled").as_deref(), Some("disabled"));
        assert_eq!(elem.remove_attr("disabled"), None);
        assert!(elem.get_attr("disabled").is_none());
    }

    #[test]
    fn test_tag_name() {
        let elem = ElementData::new("section");
        assert_eq!(elem.tag_name(), "section");
    }
}
