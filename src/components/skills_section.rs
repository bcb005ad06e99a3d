//! Skills section: one animated bar per skill.

use dioxus::prelude::*;
use folio_ui::SkillMeter;

use crate::components::RevealSection;
use crate::context::{use_reveal, use_site};

#[component]
pub fn SkillsSection() -> Element {
    let site = use_site();
    let reveal = use_reveal();
    let bars = reveal.skill_bars.read();

    rsx! {
        RevealSection { id: "skills".to_string(),
            h2 { class: "section-header", "Skills" }
            div { class: "skills",
                for (index, skill) in site.skills.iter().enumerate() {
                    SkillMeter {
                        key: "{index}",
                        name: skill.name.clone(),
                        level: skill.level,
                        revealed: bars.is_revealed(&format!("skill-{index}")),
                        reveal_key: format!("skill-{index}"),
                    }
                }
            }
        }
    }
}
