//! UI components for the portfolio page.

mod back_to_top;
pub mod bridge;
mod certifications;
mod contact_form;
mod footer;
mod modal_overlay;
mod nav_header;
mod project_card;
mod section;
mod skills_section;
mod theme_toggle;

use dioxus::prelude::*;

pub use back_to_top::BackToTop;
pub use bridge::{use_document_keys, use_reveal_observer};
pub use certifications::CertificationsSection;
pub use contact_form::ContactSection;
pub use footer::Footer;
pub use modal_overlay::ModalOverlay;
pub use nav_header::{NavHeader, NavLink};
pub use project_card::ProjectCard;
pub use section::RevealSection;
pub use skills_section::SkillsSection;
pub use theme_toggle::ThemeToggle;

use folio_core::page::anchor_target;

use crate::context::SectionAnchors;

/// Smoothly scroll a registered section into view.
///
/// Returns false when no section is mounted under `id`.
pub fn scroll_to_anchor(anchors: SectionAnchors, id: &str) -> bool {
    let Some(element) = anchors.peek().get(id).cloned() else {
        tracing::debug!(id, "No mounted section for anchor");
        return false;
    };
    spawn(async move {
        if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
            tracing::debug!("Could not scroll to section: {:?}", e);
        }
    });
    true
}

/// Click handler body for `#fragment` links.
///
/// Default navigation is kept unless the target section exists.
pub fn follow_anchor(e: MouseEvent, anchors: SectionAnchors, href: &str) {
    if let Some(id) = anchor_target(href) {
        if scroll_to_anchor(anchors, id) {
            e.prevent_default();
        }
    }
}
