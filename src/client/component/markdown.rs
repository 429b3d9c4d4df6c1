use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Renders feedback text written in markdown.
#[component]
pub fn Markdown(content: String, class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or_default();

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(&content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    rsx! {
        div {
            class: "prose max-w-none {class}",
            dangerous_inner_html: "{html_output}"
        }
    }
}
