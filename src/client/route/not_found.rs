use dioxus::prelude::*;

use crate::client::{component::page::ErrorPage, constant::SITE_NAME};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not found | {SITE_NAME}" }
        ErrorPage { status: 404, message: format!("/{} does not exist", path) }
    }
}
