//! Contact Form Component
//!
//! Demo form: submission is acknowledged locally and the fields reset.

use dioxus::prelude::*;
use folio_core::{ContactDraft, FolioError};
use folio_ui::{Button, Input, TextArea};

use crate::components::RevealSection;
use crate::context::use_site;

/// Result of the last submission, shown under the form.
#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Sent(&'static str),
    Missing(&'static str),
}

#[component]
pub fn ContactSection() -> Element {
    let site = use_site();
    let mut draft = use_signal(ContactDraft::default);
    let mut status = use_signal(|| FormStatus::Idle);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let result = draft.write().submit();
        match result {
            Ok(ack) => status.set(FormStatus::Sent(ack)),
            Err(FolioError::MissingField(field)) => status.set(FormStatus::Missing(field)),
            Err(e) => tracing::warn!("Contact form rejected: {}", e),
        }
    };

    let current = draft.read().clone();

    rsx! {
        RevealSection { id: "contact".to_string(),
            h2 { class: "section-header", "Contact" }
            if !site.profile.email.is_empty() {
                p { class: "contact-email",
                    "Or email me at "
                    a { href: "mailto:{site.profile.email}", "{site.profile.email}" }
                }
            }
            form {
                id: "contactForm",
                class: "contact-form",
                onsubmit: on_submit,

                Input {
                    id: "contact-name".to_string(),
                    label: "Name".to_string(),
                    value: current.name,
                    oninput: move |s: String| draft.write().name = s,
                }
                Input {
                    id: "contact-email".to_string(),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    value: current.email,
                    oninput: move |s: String| draft.write().email = s,
                }
                TextArea {
                    id: "contact-message".to_string(),
                    label: "Message".to_string(),
                    value: current.message,
                    oninput: move |s: String| draft.write().message = s,
                }

                Button { button_type: "submit".to_string(), "Send message" }

                {
                    match status() {
                        FormStatus::Idle => rsx! {},
                        FormStatus::Sent(ack) => rsx! {
                            p { class: "form-status ok", role: "status", "{ack}" }
                        },
                        FormStatus::Missing(field) => rsx! {
                            p { class: "form-status missing", role: "alert", "Please fill in your {field}." }
                        },
                    }
                }
            }
        }
    }
}
