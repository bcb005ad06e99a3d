//! Certifications Section
//!
//! One generated button per entry of the compiled-in certification list.

use dioxus::prelude::*;
use folio_core::CERTIFICATIONS;
use folio_ui::{Button, ButtonVariant};

use crate::components::RevealSection;
use crate::context::use_modal;

#[component]
pub fn CertificationsSection() -> Element {
    let modal = use_modal();

    rsx! {
        RevealSection { id: "certifications".to_string(),
            h2 { class: "section-header", "Certifications" }
            div { class: "cert-buttons",
                for (index, cert) in CERTIFICATIONS.iter().enumerate() {
                    Button {
                        key: "{index}",
                        variant: ButtonVariant::Chip,
                        aria_label: cert.aria_label(),
                        onclick: move |_| modal.dispatch(|m| m.activate_certification(index)),
                        "{cert.title}"
                    }
                }
            }
        }
    }
}
