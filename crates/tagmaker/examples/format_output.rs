//! Example: indented output and the different node kinds

use tagmaker::{MultiWrap, RawTextNode, Renderer, TextNode, children, html};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut renderer = Renderer::new();
    renderer.format_output(true);

    let mut special = html::li(["Third item"]);
    special.set_class(["special-item"]);

    let page = html::div_with_class(
        "wrapper",
        children![
            html::h1(["Demonstration of Node Types"]),
            html::a("https://example.org/tagmaker", ["Project page"]),
            html::ul(children![html::li(["First item"]), html::li(["Second item"]), special]),
            // Escaped on output
            html::p([TextNode::new("This text contains special characters like < and >.")]),
            // Written as a character data section, untouched
            html::script([RawTextNode::new(
                "if (x < 5 && y > 2) { console.log('CDATA works!'); }",
            )]),
            html::p(["A multi-tag structure:"]),
            MultiWrap::new(["div", "blockquote", "p", "strong"], ["This text is deeply nested."])?,
        ],
    );

    println!("{}", renderer.try_run(&page)?);
    Ok(())
}
