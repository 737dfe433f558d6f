//! HTML Serialization (innerHTML/outerHTML)
//!
//! Walks a document subtree and drives html5ever's serializer, which owns
//! escaping, attribute quoting and void-element end tags.
//!
//! Key features:
//! - innerHTML/outerHTML serialization
//! - Optional indentation of block elements that never touches text or
//!   phrasing content
//! - CDATA sections written verbatim

use std::io::Write;

use html5ever::serialize::{
    HtmlSerializer as MarkupWriter, SerializeOpts, Serializer, TraversalScope,
};

use crate::node::{ElementData, Node, NodeData};
use crate::{Document, DomError, DomResult, NodeId};

/// Void elements (no end tag, children never written)
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Elements that pretty printing may put on a line of their own
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "base", "blockquote", "body", "caption",
    "col", "colgroup", "datalist", "dd", "details", "dialog", "div", "dl",
    "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2",
    "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html",
    "legend", "li", "link", "main", "menu", "meta", "nav", "noscript", "ol",
    "optgroup", "option", "p", "pre", "script", "section", "select", "style",
    "summary", "table", "tbody", "td", "template", "tfoot", "th", "thead",
    "title", "tr", "ul",
];

/// Elements whose whitespace is significant; their content is never reflowed
const PREFORMATTED: &[&str] = &["listing", "plaintext", "pre", "textarea"];

type Writer = MarkupWriter<Vec<u8>>;

/// Escape text everywhere except the raw text elements (`script`, `style`
/// and friends); `noscript` content is escaped too.
fn markup_opts(traversal_scope: TraversalScope) -> SerializeOpts {
    SerializeOpts {
        scripting_enabled: false,
        traversal_scope,
        ..SerializeOpts::default()
    }
}

/// HTML serializer
#[derive(Debug, Clone)]
pub struct HtmlSerializer {
    /// Whether to format output with indentation
    pub pretty_print: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self {
            pretty_print: true,
            ..Self::default()
        }
    }

    /// Replace the indentation unit used by pretty printing
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Serialize outerHTML of a node (including the node itself)
    pub fn serialize_outer(&self, doc: &Document, node: NodeId) -> DomResult<String> {
        let mut out = MarkupWriter::new(Vec::new(), markup_opts(TraversalScope::ChildrenOnly(None)));
        self.write_node(doc, node, &mut out, 0)?;
        finish(out)
    }

    /// Serialize innerHTML of a node (children only)
    pub fn serialize_inner(&self, doc: &Document, node: NodeId) -> DomResult<String> {
        let parent = doc.node(node)?;
        let element = parent.as_element();
        let scope = TraversalScope::ChildrenOnly(element.map(|e| e.name.clone()));
        let mut out = MarkupWriter::new(Vec::new(), markup_opts(scope));
        self.write_sequence(doc, element, parent.children(), &mut out, 0, false)?;
        finish(out)
    }

    /// Serialize a node and its descendants
    fn write_node(&self, doc: &Document, id: NodeId, out: &mut Writer, depth: usize) -> DomResult<()> {
        let node = doc.node(id)?;

        match &node.data {
            NodeData::Document | NodeData::Fragment => {
                self.write_sequence(doc, None, node.children(), out, depth, false)?;
            }
            NodeData::Element(elem) => {
                let attrs = elem.attrs.iter().map(|a| (&a.name, a.value.as_str()));
                out.start_elem(elem.name.clone(), attrs)?;
                if !VOID_ELEMENTS.contains(&elem.tag_name()) {
                    self.write_sequence(doc, Some(elem), node.children(), out, depth + 1, true)?;
                }
                out.end_elem(elem.name.clone())?;
            }
            NodeData::Text(text) => {
                out.write_text(text)?;
            }
            NodeData::CData(data) => {
                out.writer.write_all(b"<![CDATA[")?;
                out.writer.write_all(data.as_bytes())?;
                out.writer.write_all(b"]]>")?;
            }
        }
        Ok(())
    }

    /// Write sibling nodes. When pretty printing and every sibling is a
    /// block element, each one goes on its own indented line. Phrasing
    /// content and preformatted parents are written as-is.
    fn write_sequence(
        &self,
        doc: &Document,
        parent: Option<&ElementData>,
        children: &[NodeId],
        out: &mut Writer,
        depth: usize,
        nested: bool,
    ) -> DomResult<()> {
        let block = self.pretty_print
            && !children.is_empty()
            && !parent.is_some_and(|e| PREFORMATTED.contains(&e.tag_name()))
            && children.iter().all(|&c| {
                doc.get(c)
                    .and_then(Node::as_element)
                    .is_some_and(|e| BLOCK_ELEMENTS.contains(&e.tag_name()))
            });

        for (i, &child) in children.iter().enumerate() {
            if block && (nested || i > 0) {
                self.newline(out, depth)?;
            }
            self.write_node(doc, child, out, depth)?;
        }
        if block && nested {
            self.newline(out, depth.saturating_sub(1))?;
        }
        Ok(())
    }

    fn newline(&self, out: &mut Writer, depth: usize) -> DomResult<()> {
        out.writer.write_all(b"\n")?;
        for _ in 0..depth {
            out.writer.write_all(self.indent.as_bytes())?;
        }
        Ok(())
    }
}

fn finish(out: Writer) -> DomResult<String> {
    String::from_utf8(out.writer).map_err(|e| DomError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId) {
        let mut doc = Document::new();
        let ul = doc.create_element("ul").unwrap();
        for label in ["One", "Two"] {
            let li = doc.create_element("li").unwrap();
            let text = doc.create_text(label).unwrap();
            doc.append_child(li, text).unwrap();
            doc.append_child(ul, li).unwrap();
        }
        (doc, ul)
    }

    #[test]
    fn test_serialize_outer_compact() {
        let (doc, ul) = sample();
        let html = HtmlSerializer::new().serialize_outer(&doc, ul).unwrap();
        assert_eq!(html, "<ul><li>One</li><li>Two</li></ul>");
    }

    #[test]
    fn test_serialize_outer_pretty() {
        let (doc, ul) = sample();
        let html = HtmlSerializer::pretty().serialize_outer(&doc, ul).unwrap();
        assert_eq!(html, "<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>");
    }

    #[test]
    fn test_pretty_custom_indent() {
        let (doc, ul) = sample();
        let html = HtmlSerializer::pretty()
            .with_indent("\t")
            .serialize_outer(&doc, ul)
            .unwrap();
        assert_eq!(html, "<ul>\n\t<li>One</li>\n\t<li>Two</li>\n</ul>");
    }

    #[test]
    fn test_pretty_keeps_mixed_content_inline() {
        let mut doc = Document::new();
        let p = doc.create_element("p").unwrap();
        let text = doc.create_text("Hello ").unwrap();
        let b = doc.create_element("b").unwrap();
        let inner = doc.create_text("world").unwrap();
        doc.append_child(p, text).unwrap();
        doc.append_child(p, b).unwrap();
        doc.append_child(b, inner).unwrap();

        let html = HtmlSerializer::pretty().serialize_outer(&doc, p).unwrap();
        assert_eq!(html, "<p>Hello <b>world</b></p>");
    }

    fn element_with_text(doc: &mut Document, tag: &str, text: &str) -> NodeId {
        let element = doc.create_element(tag).unwrap();
        let text = doc.create_text(text).unwrap();
        doc.append_child(element, text).unwrap();
        element
    }

    #[test]
    fn test_pretty_keeps_phrasing_siblings_inline() {
        let mut doc = Document::new();
        let p = doc.create_element("p").unwrap();
        let b = element_with_text(&mut doc, "b", "Hello");
        let i = element_with_text(&mut doc, "i", "World");
        doc.append_child(p, b).unwrap();
        doc.append_child(p, i).unwrap();

        let html = HtmlSerializer::pretty().serialize_outer(&doc, p).unwrap();
        assert_eq!(html, "<p><b>Hello</b><i>World</i></p>");
    }

    #[test]
    fn test_pretty_leaves_preformatted_content_alone() {
        for tag in ["pre", "textarea", "listing"] {
            let mut doc = Document::new();
            let parent = doc.create_element(tag).unwrap();
            let first = element_with_text(&mut doc, "div", "a");
            let second = element_with_text(&mut doc, "div", "b");
            doc.append_child(parent, first).unwrap();
            doc.append_child(parent, second).unwrap();

            let html = HtmlSerializer::pretty().serialize_outer(&doc, parent).unwrap();
            assert_eq!(html, format!("<{tag}><div>a</div><div>b</div></{tag}>"));
        }
    }

    #[test]
    fn test_pretty_mixed_block_and_inline_stays_inline() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();
        let p = element_with_text(&mut doc, "p", "para");
        let span = element_with_text(&mut doc, "span", "tail");
        doc.append_child(div, p).unwrap();
        doc.append_child(div, span).unwrap();

        let html = HtmlSerializer::pretty().serialize_outer(&doc, div).unwrap();
        assert_eq!(html, "<div><p>para</p><span>tail</span></div>");
    }

    #[test]
    fn test_noscript_text_escaped() {
        let mut doc = Document::new();
        let noscript = element_with_text(&mut doc, "noscript", "a<b&c");
        let html = HtmlSerializer::new().serialize_outer(&doc, noscript).unwrap();
        assert_eq!(html, "<noscript>a&lt;b&amp;c</noscript>");
    }

    #[test]
    fn test_raw_text_elements_not_escaped() {
        let mut doc = Document::new();
        let script = element_with_text(&mut doc, "script", "if (a < b && c) {}");
        let style = element_with_text(&mut doc, "style", "a > b {}");

        let serializer = HtmlSerializer::new();
        assert_eq!(
            serializer.serialize_outer(&doc, script).unwrap(),
            "<script>if (a < b && c) {}</script>"
        );
        assert_eq!(serializer.serialize_outer(&doc, style).unwrap(), "<style>a > b {}</style>");
    }

    #[test]
    fn test_serialize_inner() {
        let (doc, ul) = sample();
        let html = HtmlSerializer::new().serialize_inner(&doc, ul).unwrap();
        assert_eq!(html, "<li>One</li><li>Two</li>");
    }

    #[test]
    fn test_text_escaped() {
        let mut doc = Document::new();
        let p = doc.create_element("p").unwrap();
        let text = doc.create_text("5 > 3 & 2 < 4").unwrap();
        doc.append_child(p, text).unwrap();

        let html = HtmlSerializer::new().serialize_outer(&doc, p).unwrap();
        assert_eq!(html, "<p>5 &gt; 3 &amp; 2 &lt; 4</p>");
    }

    #[test]
    fn test_attribute_escaped() {
        let mut doc = Document::new();
        let span = doc.create_element("span").unwrap();
        doc.set_attribute(span, "title", "say \"hi\" & bye").unwrap();

        let html = HtmlSerializer::new().serialize_outer(&doc, span).unwrap();
        assert_eq!(html, "<span title=\"say &quot;hi&quot; &amp; bye\"></span>");
    }

    #[test]
    fn test_cdata_verbatim() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();
        let raw = doc.create_cdata_section("if (a < b && b > c) {}").unwrap();
        doc.append_child(div, raw).unwrap();

        let html = HtmlSerializer::new().serialize_outer(&doc, div).unwrap();
        assert_eq!(html, "<div><![CDATA[if (a < b && b > c) {}]]></div>");
    }

    #[test]
    fn test_void_element() {
        let mut doc = Document::new();
        let br = doc.create_element("BR").unwrap();
        let html = HtmlSerializer::new().serialize_outer(&doc, br).unwrap();
        assert_eq!(html, "<br>");
    }

    #[test]
    fn test_wrong_document() {
        let (_, ul) = sample();
        let other = Document::new();
        assert_eq!(
            HtmlSerializer::new().serialize_outer(&other, ul),
            Err(DomError::WrongDocument)
        );
    }
}
