//! Example: one-call rendering of a small tree

use tagmaker::{Renderer, children, html};

fn main() {
    tracing_subscriber::fmt::init();

    let page = html::div_with_class(
        "container main-content",
        children![
            html::h1(["Welcome to tagmaker!"]),
            html::p(["This is a simple paragraph created with the fluent API."]),
        ],
    );

    println!("{}", Renderer::build(&page, false));
}
