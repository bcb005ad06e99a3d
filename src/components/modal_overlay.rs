//! Modal Overlay Component
//!
//! Renders the controller's scaffold. The component holds no state of its
//! own beyond a click-origin flag; everything visible comes from
//! [`ModalScaffold`](folio_core::ModalScaffold).

use dioxus::prelude::*;
use folio_core::modal::{ImagePlacement, ImageSlot};
use folio_core::ClickOrigin;
use folio_ui::CloseButton;

use crate::context::use_modal;

/// Shared overlay for projects and certificates.
///
/// Renders nothing when the host markup has no backdrop.
#[component]
pub fn ModalOverlay() -> Element {
    let modal = use_modal();
    let mut focus = modal.focus;

    // Set by the panel before the click bubbles to the backdrop
    let mut panel_hit = use_signal(|| false);

    let controller = modal.controller.read();
    let Some(scaffold) = controller.scaffold() else {
        return rsx! {};
    };

    let backdrop_class = scaffold.backdrop.class();
    let aria_hidden = scaffold.backdrop.aria_hidden();
    let image = scaffold.image().cloned();
    let image_before_live = image
        .as_ref()
        .filter(|i| i.placement == ImagePlacement::BeforeLiveLink)
        .cloned();
    let image_appended = image.filter(|i| i.placement == ImagePlacement::Appended);

    rsx! {
        div {
            id: "modalBackdrop",
            class: "{backdrop_class}",
            "aria-hidden": "{aria_hidden}",
            onclick: move |_| {
                let origin = if panel_hit() {
                    ClickOrigin::Panel
                } else {
                    ClickOrigin::Backdrop
                };
                panel_hit.set(false);
                modal.dispatch(|m| m.on_backdrop_click(origin));
            },
            ontransitionend: move |e: TransitionEvent| {
                modal.transition_ended(&e.data().property_name());
            },

            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "modalTitle",
                onclick: move |_| panel_hit.set(true),

                div { class: "modal-header",
                    if let Some(title) = &scaffold.title {
                        h3 { id: "modalTitle", class: "modal-title", "{title.text}" }
                    }
                    if scaffold.close_control {
                        CloseButton {
                            onclick: move |_| modal.dispatch(|m| m.on_close_control()),
                            onmounted: move |e: MountedEvent| {
                                focus.write().close_control = Some(e.data());
                            },
                        }
                    }
                }

                if let Some(desc) = &scaffold.description {
                    p { id: "modalDesc", class: "modal-desc", "{desc.text}" }
                }
                if let Some(tags) = &scaffold.tags {
                    p { id: "modalTags", class: "modal-tags", "{tags.text}" }
                }

                if let Some(image) = image_before_live {
                    ModalImage { image }
                }

                if let Some(live) = &scaffold.live {
                    a {
                        id: "modalLive",
                        class: "modal-live",
                        href: "{live.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: if live.visible { "display: inline-block;" } else { "display: none;" },
                        onmounted: move |e: MountedEvent| {
                            focus.write().live_link = Some(e.data());
                        },
                        "View live \u{2197}"
                    }
                }

                if let Some(image) = image_appended {
                    ModalImage { image }
                }
            }
        }
    }
}

#[component]
fn ModalImage(image: ImageSlot) -> Element {
    let display = if image.visible { "block" } else { "none" };
    let alt = if image.alt.is_empty() {
        "Preview"
    } else {
        image.alt.as_str()
    };

    rsx! {
        img {
            id: "modalImage",
            class: "modal-image",
            src: "{image.src}",
            alt: "{alt}",
            style: "display: {display};",
        }
    }
}
