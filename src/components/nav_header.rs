//! Navigation Header Component
//!
//! Brand, in-page section links and the theme toggle. Links scroll
//! smoothly to their section instead of jumping.

use dioxus::prelude::*;
use crate::components::{follow_anchor, ThemeToggle};
use crate::context::{use_section_anchors, use_site};

/// Sections reachable from the header.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLink {
    About,
    Projects,
    Certifications,
    Skills,
    Contact,
}

impl NavLink {
    pub const ALL: [NavLink; 5] = [
        NavLink::About,
        NavLink::Projects,
        NavLink::Certifications,
        NavLink::Skills,
        NavLink::Contact,
    ];

    /// Get the display name for this link
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLink::About => "About",
            NavLink::Projects => "Projects",
            NavLink::Certifications => "Certifications",
            NavLink::Skills => "Skills",
            NavLink::Contact => "Contact",
        }
    }

    /// Fragment href of the target section
    pub fn href(&self) -> &'static str {
        match self {
            NavLink::About => "#about",
            NavLink::Projects => "#projects",
            NavLink::Certifications => "#certifications",
            NavLink::Skills => "#skills",
            NavLink::Contact => "#contact",
        }
    }
}

/// Navigation Header component
#[component]
pub fn NavHeader() -> Element {
    let site = use_site();
    let anchors = use_section_anchors();

    rsx! {
        header { class: "nav-header",
            a {
                class: "nav-brand",
                href: "#top",
                onclick: move |e: MouseEvent| follow_anchor(e, anchors, "#top"),
                "{site.profile.name}"
            }

            nav { class: "nav-links",
                for link in NavLink::ALL {
                    a {
                        key: "{link.href()}",
                        class: "nav-link",
                        href: "{link.href()}",
                        onclick: move |e: MouseEvent| follow_anchor(e, anchors, link.href()),
                        "{link.display_name()}"
                    }
                }
            }

            ThemeToggle {}
        }
    }
}
