//! Floating back-to-top button, shown once the page has scrolled past
//! the threshold.

use dioxus::prelude::*;
use folio_core::page::{back_to_top_visible, TOP_ANCHOR};
use folio_ui::{Button, ButtonVariant};

use crate::components::bridge::use_scroll_offset;
use crate::components::scroll_to_anchor;
use crate::context::use_section_anchors;

#[component]
pub fn BackToTop() -> Element {
    let offset = use_scroll_offset();
    let anchors = use_section_anchors();

    let display = if back_to_top_visible(offset()) {
        "display: block;"
    } else {
        "display: none;"
    };

    rsx! {
        Button {
            variant: ButtonVariant::Floating,
            class: "back-to-top".to_string(),
            aria_label: "Back to top".to_string(),
            style: display.to_string(),
            onclick: move |_| {
                scroll_to_anchor(anchors, TOP_ANCHOR);
            },
            "\u{2191}"
        }
    }
}
