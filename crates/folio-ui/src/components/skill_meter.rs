//! Skill Meter Component
//!
//! A labelled progress bar. The fill width animates through a CSS
//! transition when `revealed` flips to true.

use dioxus::prelude::*;
use folio_core::SkillLevel;

/// Properties for the SkillMeter component
#[derive(Clone, PartialEq, Props)]
pub struct SkillMeterProps {
    /// Skill name
    pub name: String,
    /// Target level
    pub level: SkillLevel,
    /// Whether the bar has scrolled into view
    pub revealed: bool,
    /// Key the reveal observer reports this bar under
    pub reveal_key: String,
}

#[component]
pub fn SkillMeter(props: SkillMeterProps) -> Element {
    let width = props.level.width_style(props.revealed);
    let percent = props.level.percent();

    rsx! {
        div { class: "skill",
            div { class: "skill-label",
                span { class: "skill-name", "{props.name}" }
                span { class: "skill-value", "{props.level}" }
            }
            div {
                class: "bar",
                role: "progressbar",
                "aria-label": "{props.name}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{percent}",
                i {
                    "data-reveal-key": "{props.reveal_key}",
                    "data-value": "{percent}",
                    style: "{width}",
                }
            }
        }
    }
}
