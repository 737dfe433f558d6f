//! Element - a tag with attributes, classes and ordered children
//!
//! The class list and the attribute store are plain owned fields; `class` is
//! materialized from the [`ClassSet`] at render time only.

use tagmaker_dom::{Document, DomResult};

use crate::attributes::{AttributeMap, Attributes};
use crate::class_set::ClassSet;
use crate::node::{Child, NativeNode, Node, build_native};
use crate::renderer::materialize_element;
use crate::{TagError, is_void_element};

/// HTML element
#[derive(Debug, Default)]
pub struct Element {
    tag: String,
    class: ClassSet,
    attributes: AttributeMap,
    children: Vec<Child>,
}

impl Element {
    /// Create an element without children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Create an element with initial children.
    ///
    /// Fails for void tags as soon as one child is supplied.
    pub fn with_children<I, C>(tag: impl Into<String>, children: I) -> Result<Self, TagError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let mut element = Self::new(tag);
        for child in children {
            element.append_child(child)?;
        }
        Ok(element)
    }

    /// Build a known non-void tag; used by the `html` helpers
    pub(crate) fn container<I, C>(tag: &'static str, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        debug_assert!(!is_void_element(tag));
        Self {
            tag: tag.to_string(),
            children: children.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Tag name
    pub fn name(&self) -> &str {
        &self.tag
    }

    /// Rename the tag; attributes, classes and children are kept.
    ///
    /// Renaming to a void tag is refused while children are present.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self, TagError> {
        let name = name.into();
        if is_void_element(&name) && !self.children.is_empty() {
            return Err(TagError::VoidRename {
                from: self.tag.clone(),
                to: name,
            });
        }
        self.tag = name;
        Ok(self)
    }

    /// Whether the current tag name is a void element
    pub fn is_void(&self) -> bool {
        is_void_element(&self.tag)
    }

    /// Children in order
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    fn check_accepts_children(&self) -> Result<(), TagError> {
        if self.is_void() {
            return Err(TagError::VoidElementChildren {
                tag: self.tag.clone(),
            });
        }
        Ok(())
    }

    /// Append a child node or string
    pub fn append_child(&mut self, child: impl Into<Child>) -> Result<&mut Self, TagError> {
        self.check_accepts_children()?;
        self.children.push(child.into());
        Ok(self)
    }

    /// Prepend a child node or string
    pub fn prepend_child(&mut self, child: impl Into<Child>) -> Result<&mut Self, TagError> {
        self.check_accepts_children()?;
        self.children.insert(0, child.into());
        Ok(self)
    }

    // --- Attributes ---

    pub fn set_attribute(&mut self, name: &str, value: &str) -> &mut Self {
        self.attributes.set(name, value);
        self
    }

    /// Attribute value, `None` when unset
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    pub fn remove_attribute(&mut self, name: &str) -> &mut Self {
        self.attributes.remove(name);
        self
    }

    /// Attributes in insertion order. Classes are not included.
    pub fn iter_attributes(&self) -> Attributes<'_> {
        self.attributes.iter()
    }

    pub fn set_id(&mut self, id: &str) -> &mut Self {
        self.set_attribute("id", id)
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    /// Present boolean attributes carry their own name as value
    /// (`disabled="disabled"`); absent ones are removed.
    pub fn set_boolean_attribute(&mut self, name: &str, present: bool) -> &mut Self {
        if present {
            self.set_attribute(name, name)
        } else {
            self.remove_attribute(name)
        }
    }

    pub fn disabled(&mut self, disabled: bool) -> &mut Self {
        self.set_boolean_attribute("disabled", disabled)
    }

    pub fn checked(&mut self, checked: bool) -> &mut Self {
        self.set_boolean_attribute("checked", checked)
    }

    pub fn set_data_attribute(&mut self, key: &str, value: &str) -> &mut Self {
        self.set_attribute(&format!("data-{key}"), value)
    }

    pub fn get_data_attribute(&self, key: &str) -> Option<&str> {
        self.get_attribute(&format!("data-{key}"))
    }

    pub fn remove_data_attribute(&mut self, key: &str) -> &mut Self {
        self.remove_attribute(&format!("data-{key}"))
    }

    pub fn set_aria_attribute(&mut self, key: &str, value: &str) -> &mut Self {
        self.set_attribute(&format!("aria-{key}"), value)
    }

    pub fn get_aria_attribute(&self, key: &str) -> Option<&str> {
        self.get_attribute(&format!("aria-{key}"))
    }

    pub fn remove_aria_attribute(&mut self, key: &str) -> &mut Self {
        self.remove_attribute(&format!("aria-{key}"))
    }

    // --- Classes ---

    pub fn class_list(&self) -> &ClassSet {
        &self.class
    }

    pub fn class_list_mut(&mut self) -> &mut ClassSet {
        &mut self.class
    }

    /// Replace every class. Each item may hold several whitespace-separated
    /// tokens.
    pub fn set_class<I, S>(&mut self, classes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.class = classes.into_iter().collect();
        self
    }

    /// Add whitespace-separated classes
    pub fn add_class(&mut self, classes: &str) -> &mut Self {
        self.class.merge([classes]);
        self
    }

    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        self.class.remove(class);
        self
    }

    pub fn remove_classes<I, S>(&mut self, classes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for class in classes {
            self.class.remove(class.as_ref());
        }
        self
    }

    pub fn toggle_class(&mut self, class: &str) -> &mut Self {
        self.class.toggle(class);
        self
    }

    pub fn toggle_classes<I, S>(&mut self, classes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for class in classes {
            self.class.toggle(class.as_ref());
        }
        self
    }
}

impl Node for Element {
    fn to_dom_node(&self, doc: Option<&mut Document>) -> DomResult<NativeNode> {
        build_native(doc, |doc| {
            materialize_element(doc, &self.tag, self.iter_attributes(), &self.class, &self.children)
        })
    }
}
