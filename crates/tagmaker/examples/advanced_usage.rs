//! Example: attributes, child management, renaming and class toggling

use tagmaker::{Renderer, html};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut renderer = Renderer::new();
    renderer.format_output(true);

    println!("1. Input with boolean, data and ARIA attributes:");
    let mut input = html::input("checkbox");
    input
        .set_id("subscribe-checkbox")
        .set_data_attribute("item-id", "A123")
        .set_aria_attribute("label", "Subscribe to newsletter")
        .checked(true)
        .disabled(true);
    println!("{}\n", renderer.run(&input));

    println!("2. List with appended and prepended children:");
    let mut list = html::ul(Vec::<tagmaker::Child>::new());
    list.add_class("task-list");
    list.append_child(html::li(["Second item, added via append_child"]))?
        .prepend_child(html::li(["First item, added via prepend_child"]))?
        .append_child(html::li(["Third item"]))?;
    println!("{}\n", renderer.run(&list));

    println!("3. Changing the tag name:");
    let mut block = html::div_with_class(
        "initial-class",
        [html::p(["This is a paragraph inside the original div."])],
    );
    block.set_id("content-block-1");
    println!("{}", renderer.run(&block));

    block.set_name("article")?.add_class("important-article");
    block.append_child(html::footer(["End of article."]))?;
    println!("{}\n", renderer.run(&block));

    println!("4. Toggling classes:");
    let mut panel = html::div_with_class("panel", Vec::<tagmaker::Child>::new());
    panel.set_id("info-panel");
    println!("initial: {}", renderer.run(&panel));

    panel.toggle_classes(["visible", "active"]);
    println!("after toggling visible and active: {}", renderer.run(&panel));

    panel.toggle_class("active");
    println!("after toggling active again: {}", renderer.run(&panel));

    if let Err(err) = html::br().append_child("nope") {
        println!("\n5. Void elements refuse children: {err}");
    }
    Ok(())
}
