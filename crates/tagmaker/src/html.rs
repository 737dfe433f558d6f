//! Tag helpers
//!
//! One constructor per common HTML5 tag. Container helpers accept any
//! iterable of children and cannot fail; void helpers take the attributes
//! the tag is normally written with.
//!
//! ```
//! use tagmaker::{Renderer, html};
//!
//! let nav = html::nav([html::a("/", ["Home"]), html::a("/about", ["About"])]);
//! assert_eq!(
//!     Renderer::build(&nav, false),
//!     "<nav><a href=\"/\">Home</a><a href=\"/about\">About</a></nav>"
//! );
//! ```

use crate::node::Child;
use crate::{ClassSource, Element};

macro_rules! container_tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($name), ">` with the given children")]
            pub fn $name<I, C>(children: I) -> Element
            where
                I: IntoIterator<Item = C>,
                C: Into<Child>,
            {
                Element::container(stringify!($name), children)
            }
        )*
    };
}

macro_rules! void_tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Empty `<", stringify!($name), ">`")]
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )*
    };
}

// Document metadata and sectioning
container_tags!(head, title, style, body, address, article, aside, footer, header);
container_tags!(h1, h2, h3, h4, h5, h6, main, nav, section);

// Grouping
container_tags!(blockquote, dd, dl, dt, figcaption, figure, li, menu, ol, p, pre, ul);

// Inline text
container_tags!(abbr, b, bdi, bdo, cite, code, data, dfn, em, i, kbd, mark, q);
container_tags!(rp, rt, ruby, s, samp, small, span, strong, sub, sup, time, u, var);

// Media, embedded content and scripting
container_tags!(audio, map, video, iframe, object, picture, portal, noscript, script);

// Edits and tables
container_tags!(del, ins, caption, colgroup, table, tbody, td, tfoot, th, thead, tr);

// Forms, interactive elements and web components
container_tags!(button, datalist, fieldset, form, label, legend, meter, optgroup, option);
container_tags!(output, progress, select, textarea, details, dialog, summary, slot, template);

void_tags!(meta, br, hr, wbr, area, col, track);

/// `<div>` with an initial class list
pub fn div_with_class<'a, I, C>(classes: impl Into<ClassSource<'a>>, children: I) -> Element
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    let mut div = Element::container("div", children);
    div.class_list_mut().merge([classes.into()]);
    div
}

pub fn div<I, C>(children: I) -> Element
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    Element::container("div", children)
}

/// Anchor pointing at `href`
pub fn a<I, C>(href: &str, children: I) -> Element
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    let mut anchor = Element::container("a", children);
    anchor.set_attribute("href", href);
    anchor
}

pub fn base(href: &str, target: &str) -> Element {
    let mut base = Element::new("base");
    base.set_attribute("href", href).set_attribute("target", target);
    base
}

pub fn link(rel: &str, href: &str) -> Element {
    let mut link = Element::new("link");
    link.set_attribute("rel", rel).set_attribute("href", href);
    link
}

/// Image; optional attributes are only written when given
pub fn img(src: &str, alt: Option<&str>, width: Option<u32>, height: Option<u32>) -> Element {
    let mut img = Element::new("img");
    img.set_attribute("src", src);
    if let Some(alt) = alt {
        img.set_attribute("alt", alt);
    }
    set_dimensions(&mut img, width, height);
    img
}

pub fn embed(src: &str, mime: Option<&str>, width: Option<u32>, height: Option<u32>) -> Element {
    let mut embed = Element::new("embed");
    embed.set_attribute("src", src);
    if let Some(mime) = mime {
        embed.set_attribute("type", mime);
    }
    set_dimensions(&mut embed, width, height);
    embed
}

pub fn source(src: &str, mime: Option<&str>) -> Element {
    let mut source = Element::new("source");
    source.set_attribute("src", src);
    if let Some(mime) = mime {
        source.set_attribute("type", mime);
    }
    source
}

/// `<input type="...">`; pass `"text"` for a plain text field
pub fn input(kind: &str) -> Element {
    let mut input = Element::new("input");
    input.set_attribute("type", kind);
    input
}

fn set_dimensions(element: &mut Element, width: Option<u32>, height: Option<u32>) {
    if let Some(width) = width {
        element.set_attribute("width", &width.to_string());
    }
    if let Some(height) = height {
        element.set_attribute("height", &height.to_string());
    }
}
