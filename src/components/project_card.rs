//! Project Card Component
//!
//! Authored card that opens the shared overlay on click or Enter/Space.

use dioxus::prelude::*;
use folio_core::{Card, KeyInput};

use crate::context::use_modal;

/// Card in the projects grid.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for card in site.cards {
///         ProjectCard { card }
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(card: Card) -> Element {
    let modal = use_modal();

    // Attributes are read once per render, not per event
    let attrs = card.attributes();
    let attrs_for_key = attrs.clone();
    let class = card.kind.class();
    let label = card.aria_label();

    rsx! {
        article {
            class: "{class}",
            tabindex: "0",
            role: "button",
            "aria-label": "{label}",
            "aria-haspopup": "dialog",
            onclick: move |_| modal.dispatch(|m| m.activate_card(&attrs)),
            onkeydown: move |e: KeyboardEvent| {
                let key = KeyInput::from_key_name(&e.key().to_string());
                if key.activates_card() {
                    e.prevent_default();
                    modal.dispatch(|m| m.activate_card(&attrs_for_key));
                }
            },

            h3 { class: "card-title", "{card.title}" }
            if !card.description.is_empty() {
                p { class: "card-desc", "{card.description}" }
            }
            if !card.tags.is_empty() {
                div { class: "card-tags",
                    for tag in card.tags.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}
