//! Home page - the whole portfolio on one scrolling page.
//!
//! Hero, about, projects, certifications, skills and contact sections,
//! with the shared overlay mounted once at the end.

use dioxus::prelude::*;
use folio_core::page::TOP_ANCHOR;

use crate::components::{
    BackToTop, CertificationsSection, ContactSection, Footer, ModalOverlay, NavHeader,
    ProjectCard, RevealSection, SkillsSection, follow_anchor,
};
use crate::context::{use_section_anchors, use_site};

#[component]
pub fn Home() -> Element {
    let site = use_site();
    let mut anchors = use_section_anchors();

    rsx! {
        div {
            id: TOP_ANCHOR,
            onmounted: move |e: MountedEvent| {
                anchors.write().insert(TOP_ANCHOR.to_string(), e.data());
            },
        }

        NavHeader {}

        main { class: "page",
            header { class: "hero",
                h1 { class: "hero-title", "{site.profile.name}" }
                if !site.profile.tagline.is_empty() {
                    p { class: "hero-tagline", "{site.profile.tagline}" }
                }
                div { class: "hero-actions",
                    a { class: "btn-primary", href: "#projects",
                        onclick: move |e: MouseEvent| follow_anchor(e, anchors, "#projects"),
                        "See my work"
                    }
                    a { class: "btn-ghost", href: "#contact",
                        onclick: move |e: MouseEvent| follow_anchor(e, anchors, "#contact"),
                        "Get in touch"
                    }
                }
            }

            RevealSection { id: "about".to_string(),
                h2 { class: "section-header", "About" }
                p { class: "body-text", "{site.profile.about}" }
            }

            RevealSection { id: "projects".to_string(),
                h2 { class: "section-header", "Projects" }
                div { class: "card-grid",
                    for (index, card) in site.cards.iter().enumerate() {
                        ProjectCard { key: "{index}", card: card.clone() }
                    }
                }
            }

            CertificationsSection {}
            SkillsSection {}
            ContactSection {}
        }

        Footer {}
        BackToTop {}
        ModalOverlay {}
    }
}
