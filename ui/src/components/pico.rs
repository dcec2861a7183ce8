//! A small set of reusable, lifetime-free layout components in the Pico.css
//! style. The application stylesheet supplies the look.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element; `class` lets callers style
/// specific card kinds.
#[component]
pub fn Card(#[props(optional)] class: Option<String>, children: Element) -> Element {
    rsx! {
        article {
            class: class.as_deref().unwrap_or(""),
            {children}
        }
    }
}
