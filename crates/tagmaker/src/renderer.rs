//! Renderer - node tree to HTML string
//!
//! Materializes a node tree inside one native document, importing subtrees
//! that were built standalone, then hands the result to the serializer.

use serde::{Deserialize, Serialize};
use tagmaker_dom::{Document, DomResult, HtmlSerializer, NodeId};

use crate::class_set::ClassSet;
use crate::is_void_element;
use crate::node::{Child, NativeNode, Node};

/// Render configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Indent nested block elements, one per line
    pub format_output: bool,
    /// Indentation unit used when formatting
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format_output: false,
            indent: "  ".to_string(),
        }
    }
}

/// Builds and renders the final HTML string from a node tree
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Enable or disable indentation of the output
    pub fn format_output(&mut self, enabled: bool) -> &mut Self {
        self.options.format_output = enabled;
        self
    }

    pub fn indent(&mut self, indent: impl Into<String>) -> &mut Self {
        self.options.indent = indent.into();
        self
    }

    /// Render `node`, returning an empty string when the tree cannot be
    /// serialized.
    pub fn run<N: Node + ?Sized>(&self, node: &N) -> String {
        match self.try_run(node) {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(%err, "render failed, returning empty output");
                String::new()
            }
        }
    }

    /// Render `node`, surfacing engine errors
    pub fn try_run<N: Node + ?Sized>(&self, node: &N) -> DomResult<String> {
        tracing::debug!(format = self.options.format_output, "rendering node tree");

        let mut document = Document::new();
        let native = node.to_dom_node(Some(&mut document))?;
        let root = native.adopt(&mut document)?;

        let serializer = HtmlSerializer {
            pretty_print: self.options.format_output,
            indent: self.options.indent.clone(),
        };
        let html = serializer.serialize_outer(&document, root)?;

        tracing::debug!(nodes = document.len(), bytes = html.len(), "rendered");
        Ok(html)
    }

    /// One-call helper: render `node` with the given formatting flag
    pub fn build<N: Node + ?Sized>(node: &N, format: bool) -> String {
        Self::new().format_output(format).run(node)
    }
}

/// Create a native element for `tag` and fill it.
///
/// Stored attributes are applied in order, except `class`, which always comes
/// from `class`. Children of void tags are never materialized.
pub(crate) fn materialize_element<'a>(
    doc: &mut Document,
    tag: &str,
    attributes: impl Iterator<Item = (&'a str, &'a str)>,
    class: &ClassSet,
    children: &[Child],
) -> DomResult<NodeId> {
    let element = doc.create_element(tag)?;

    for (name, value) in attributes {
        if name != "class" {
            doc.set_attribute(element, name, value)?;
        }
    }
    if !class.is_empty() {
        doc.set_attribute(element, "class", &class.to_string())?;
    }

    if !is_void_element(tag) {
        for child in children {
            let native = child.to_dom_node(Some(doc))?;
            append_native(doc, element, native)?;
        }
    }
    Ok(element)
}

/// Attach a produced node under `parent`, importing it first when it is
/// owned by another document.
pub(crate) fn append_native(doc: &mut Document, parent: NodeId, native: NativeNode) -> DomResult<()> {
    if native.owner_document() != doc.id() {
        tracing::trace!(tag = doc.tag_name(parent), "importing standalone child");
    }
    let child = native.adopt(doc)?;
    doc.append_child(parent, child)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Element, TextNode};

    /// A node that ignores the supplied document and always builds its own.
    #[derive(Debug)]
    struct Detached(&'static str);

    impl Node for Detached {
        fn to_dom_node(&self, _doc: Option<&mut Document>) -> DomResult<NativeNode> {
            let mut document = Document::new();
            let em = document.create_element("em")?;
            let text = document.create_text(self.0)?;
            document.append_child(em, text)?;
            Ok(NativeNode::Standalone { document, node: em })
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl Node for Broken {
        fn to_dom_node(&self, _doc: Option<&mut Document>) -> DomResult<NativeNode> {
            let mut elsewhere = Document::new();
            Ok(NativeNode::InDocument(elsewhere.create_text("lost")?))
        }
    }

    #[test]
    fn test_foreign_children_imported() {
        let mut p = Element::new("p");
        p.append_child(Child::new(Detached("a & b"))).unwrap();
        p.append_child(" tail").unwrap();

        assert_eq!(Renderer::build(&p, false), "<p><em>a &amp; b</em> tail</p>");
    }

    #[test]
    fn test_foreign_root_imported() {
        assert_eq!(Renderer::new().run(&Detached("x")), "<em>x</em>");
    }

    #[test]
    fn test_failure_yields_empty_string() {
        let mut div = Element::new("div");
        div.append_child(Child::new(Broken)).unwrap();

        assert!(Renderer::new().try_run(&div).is_err());
        assert_eq!(Renderer::new().run(&div), "");
    }

    #[test]
    fn test_class_attribute_comes_from_class_set() {
        let mut div = Element::new("div");
        div.set_attribute("class", "ignored").set_attribute("id", "main");
        assert_eq!(Renderer::build(&div, false), "<div id=\"main\"></div>");

        div.add_class("live");
        assert_eq!(Renderer::build(&div, false), "<div id=\"main\" class=\"live\"></div>");
    }

    #[test]
    fn test_options() {
        let mut renderer = Renderer::new();
        renderer.format_output(true).indent("    ");
        assert!(renderer.options().format_output);
        assert_eq!(renderer.options().indent, "    ");

        let text = TextNode::new("plain");
        assert_eq!(renderer.run(&text), "plain");
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert!(!options.format_output);
        assert_eq!(Renderer::with_options(options.clone()).options(), &options);
    }
}
