//! tagmaker - fluent HTML tag trees
//!
//! Compose [`Element`]s, text and wrappers, then render them through the
//! `tagmaker-dom` engine into an escaped HTML string.
//!
//! ```
//! use tagmaker::{Renderer, TagError, html};
//!
//! # fn main() -> Result<(), TagError> {
//! let mut list = html::ul([html::li(["Second"])]);
//! list.prepend_child(html::li(["First"]))?;
//! list.add_class("menu");
//!
//! assert_eq!(
//!     Renderer::build(&list, false),
//!     "<ul class=\"menu\"><li>First</li><li>Second</li></ul>"
//! );
//! # Ok(())
//! # }
//! ```

mod attributes;
mod class_set;
mod element;
mod error;
mod multi;
mod node;
mod renderer;

pub mod html;

pub use attributes::{AttributeMap, Attributes};
pub use class_set::{ClassSet, ClassSource};
pub use element::Element;
pub use error::TagError;
pub use multi::MultiWrap;
pub use node::{Child, NativeNode, Node, RawTextNode, TextNode};
pub use renderer::{RenderOptions, Renderer};

/// Native document engine
pub use tagmaker_dom as dom;
pub use tagmaker_dom::VOID_ELEMENTS;

/// Whether `tag` names a void element, ignoring ASCII case
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_detection() {
        assert!(is_void_element("br"));
        assert!(is_void_element("IMG"));
        assert!(is_void_element("Param"));
        assert!(!is_void_element("div"));
        assert!(!is_void_element("brr"));
        assert!(!is_void_element(""));
    }
}
