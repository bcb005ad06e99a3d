//! Document-level listeners bridged from the webview.
//!
//! Dioxus element handlers only see events on elements we render. The
//! Escape key has to work wherever focus is, and reveal-on-scroll needs an
//! IntersectionObserver, so both run as small scripts that stream events
//! back through `document::eval`.

use dioxus::prelude::*;
use folio_core::{KeyInput, RevealSettings};
use serde::Serialize;

use crate::context::{use_modal, use_reveal};

/// Attribute carrying a section's reveal key.
pub const SECTION_REVEAL_ATTR: &str = "data-reveal-section";
/// Attribute carrying a skill bar's reveal key.
pub const BAR_REVEAL_ATTR: &str = "data-reveal-key";

const SECTION_GROUP: &str = "sections";
const BAR_GROUP: &str = "skill-bars";

const KEY_BRIDGE: &str = r#"
document.addEventListener("keydown", (e) => {
  if (e.key === "Escape") {
    dioxus.send(e.key);
  }
});
await new Promise(() => {});
"#;

const REVEAL_BRIDGE: &str = r#"
const groups = await dioxus.recv();
await new Promise((resolve) => requestAnimationFrame(() => resolve()));

const observers = {};
for (const group of groups) {
  const observer = new IntersectionObserver((entries) => {
    for (const entry of entries) {
      const key = entry.target.getAttribute(group.attr);
      const ratio = entry.isIntersecting ? entry.intersectionRatio : 0;
      dioxus.send([group.name, key, ratio]);
    }
  }, { threshold: group.threshold, rootMargin: group.root_margin });
  document.querySelectorAll(`[${group.attr}]`).forEach((el) => observer.observe(el));
  observers[group.name] = { observer, attr: group.attr };
}

while (true) {
  const [name, key] = await dioxus.recv();
  const entry = observers[name];
  if (!entry) continue;
  document.querySelectorAll(`[${entry.attr}]`).forEach((el) => {
    if (el.getAttribute(entry.attr) === key) entry.observer.unobserve(el);
  });
}
"#;

/// Observer configuration sent to the reveal script.
#[derive(Debug, Serialize)]
struct ObserverGroup {
    name: &'static str,
    attr: &'static str,
    threshold: f64,
    root_margin: String,
}

impl ObserverGroup {
    fn new(name: &'static str, attr: &'static str, settings: &RevealSettings) -> Self {
        Self {
            name,
            attr,
            threshold: settings.threshold,
            root_margin: settings.root_margin(),
        }
    }
}

/// Close the overlay on Escape, document-wide.
pub fn use_document_keys() {
    let modal = use_modal();

    use_future(move || async move {
        let mut eval = document::eval(KEY_BRIDGE);
        loop {
            match eval.recv::<String>().await {
                Ok(key) => {
                    let key = KeyInput::from_key_name(&key);
                    modal.dispatch(|m| m.on_document_key(key));
                }
                Err(e) => {
                    tracing::debug!("Key bridge closed: {:?}", e);
                    break;
                }
            }
        }
    });
}

/// Feed intersection reports into the reveal trackers.
pub fn use_reveal_observer() {
    let reveal = use_reveal();

    use_future(move || async move {
        let mut sections = reveal.sections;
        let mut skill_bars = reveal.skill_bars;

        let groups = [
            ObserverGroup::new(SECTION_GROUP, SECTION_REVEAL_ATTR, &RevealSettings::SECTIONS),
            ObserverGroup::new(BAR_GROUP, BAR_REVEAL_ATTR, &RevealSettings::SKILL_BARS),
        ];

        let mut eval = document::eval(REVEAL_BRIDGE);
        if let Err(e) = eval.send(groups) {
            tracing::warn!("Could not start reveal observer: {:?}", e);
            return;
        }

        loop {
            let (group, key, ratio) = match eval.recv::<(String, String, f64)>().await {
                Ok(report) => report,
                Err(e) => {
                    tracing::debug!("Reveal bridge closed: {:?}", e);
                    break;
                }
            };

            let tracker = match group.as_str() {
                SECTION_GROUP => &mut sections,
                BAR_GROUP => &mut skill_bars,
                _ => continue,
            };

            let changed = tracker.write().observe(&key, ratio);
            if changed {
                tracing::debug!(
                    group = %group,
                    revealed = tracker.peek().revealed_count(),
                    "Reveal state changed"
                );
            }
            if changed && !tracker.peek().is_observed(&key) {
                if let Err(e) = eval.send((group, key)) {
                    tracing::debug!("Could not unobserve element: {:?}", e);
                }
            }
        }
    });
}

const SCROLL_BRIDGE: &str = r#"
let last = -1;
const report = () => {
  const y = window.scrollY;
  if (y !== last) {
    last = y;
    dioxus.send(y);
  }
};
window.addEventListener("scroll", report, { passive: true });
report();
await new Promise(() => {});
"#;

/// Current vertical scroll offset of the window, in pixels.
pub fn use_scroll_offset() -> Signal<f64> {
    let mut offset = use_signal(|| 0.0);

    use_future(move || async move {
        let mut eval = document::eval(SCROLL_BRIDGE);
        loop {
            match eval.recv::<f64>().await {
                Ok(y) => offset.set(y),
                Err(e) => {
                    tracing::debug!("Scroll bridge closed: {:?}", e);
                    break;
                }
            }
        }
    });

    offset
}
