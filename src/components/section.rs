//! Page section wrapper: anchor registration and fade-in on scroll.

use dioxus::prelude::*;

use crate::context::{use_reveal, use_section_anchors};

/// A `<section>` that fades in once and can be reached by `#id` links.
#[component]
pub fn RevealSection(
    /// Section id, also the anchor target and reveal key
    id: String,
    children: Element,
) -> Element {
    let reveal = use_reveal();
    let mut anchors = use_section_anchors();

    let sections = reveal.sections.read();
    let revealed = if sections.is_revealed(&id) { "revealed" } else { "" };
    let duration = sections.settings().transition_style();
    let anchor_id = id.clone();

    rsx! {
        section {
            id: "{id}",
            class: "section {revealed}",
            style: "{duration}",
            "data-reveal-section": "{id}",
            onmounted: move |e: MountedEvent| {
                anchors.write().insert(anchor_id.clone(), e.data());
            },
            {children}
        }
    }
}
