//! Light/dark theme toggle.

use dioxus::prelude::*;
use folio_ui::IconButton;

use crate::context::use_theme;

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let current = theme();

    let icon = if current.is_dark() { "\u{2600}" } else { "\u{263E}" };

    rsx! {
        IconButton {
            class: "theme-toggle".to_string(),
            aria_label: current.toggle_label().to_string(),
            aria_pressed: current.aria_pressed().to_string(),
            onclick: move |_| {
                let next = theme.peek().toggled();
                tracing::info!(theme = %next, "Theme toggled");
                theme.set(next);
            },
            "{icon}"
        }
    }
}
