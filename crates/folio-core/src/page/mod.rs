//! Page behaviours around the modal: theme, scrolling, reveal animations,
//! skill bars and the demo contact form.

pub mod contact;
pub mod reveal;
pub mod scroll;
pub mod skills;
pub mod theme;

use chrono::Datelike;

pub use contact::{ContactDraft, ACKNOWLEDGMENT};
pub use reveal::{RevealSettings, RevealTracker};
pub use scroll::{anchor_target, back_to_top_visible, BACK_TO_TOP_THRESHOLD_PX, TOP_ANCHOR};
pub use skills::SkillLevel;
pub use theme::Theme;

/// Year shown in the footer.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
