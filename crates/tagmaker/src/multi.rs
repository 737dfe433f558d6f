//! MultiWrap - nest content inside a chain of tags
//!
//! `["div", "p", "strong"]` around `"Deep Text"` renders as
//! `<div><p><strong>Deep Text</strong></p></div>`.

use tagmaker_dom::{Document, DomResult};

use crate::class_set::ClassSet;
use crate::node::{Child, NativeNode, Node, build_native};
use crate::renderer::{append_native, materialize_element};
use crate::{TagError, is_void_element};

/// Content wrapped in nested tags, outermost first
#[derive(Debug)]
pub struct MultiWrap {
    tags: Vec<String>,
    content: Vec<Child>,
}

impl MultiWrap {
    /// Only the innermost tag may be void, and then only without content.
    pub fn new<T, S, I, C>(tags: T, content: I) -> Result<Self, TagError>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        let content: Vec<Child> = content.into_iter().map(Into::into).collect();

        if let Some((innermost, outer)) = tags.split_last() {
            if let Some(tag) = outer.iter().find(|tag| is_void_element(tag)) {
                return Err(TagError::VoidElementChildren { tag: tag.clone() });
            }
            if is_void_element(innermost) && !content.is_empty() {
                return Err(TagError::VoidElementChildren {
                    tag: innermost.clone(),
                });
            }
        }

        Ok(Self { tags, content })
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn content(&self) -> &[Child] {
        &self.content
    }
}

impl Node for MultiWrap {
    fn to_dom_node(&self, doc: Option<&mut Document>) -> DomResult<NativeNode> {
        build_native(doc, |doc| {
            let Some((innermost, outer)) = self.tags.split_last() else {
                let fragment = doc.create_document_fragment()?;
                for child in &self.content {
                    let native = child.to_dom_node(Some(doc))?;
                    append_native(doc, fragment, native)?;
                }
                return Ok(fragment);
            };

            let mut current =
                materialize_element(doc, innermost, std::iter::empty(), &ClassSet::new(), &self.content)?;
            for tag in outer.iter().rev() {
                let wrapper = doc.create_element(tag)?;
                doc.append_child(wrapper, current)?;
                current = wrapper;
            }
            Ok(current)
        })
    }
}
