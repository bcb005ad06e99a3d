//! Folio Core Library
//!
//! Framework-free logic behind the portfolio page.
//!
//! ## Overview
//!
//! The centrepiece is [`ModalController`]: one shared overlay that shows a
//! project or certificate, opened from authored cards or from the generated
//! certification buttons. The controller owns the overlay's elements as
//! plain data; the UI renders them and forwards events back.
//!
//! The [`page`] module holds the smaller behaviours (theme toggle,
//! back-to-top, reveal-on-scroll, skill bars, demo contact form), and
//! [`site`] the content the page renders.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{CardAttributes, DeferredOutcome, HostMarkup, ModalController};
//!
//! let mut modal = ModalController::new(&HostMarkup::complete());
//! let card = CardAttributes::titled("Project Y").with_link("https://example.com");
//!
//! let focus = modal.activate_card(&card).expect("overlay available");
//! assert!(modal.is_open());
//!
//! // ~100ms later, the UI hands the task back
//! assert!(matches!(modal.run_deferred(focus), DeferredOutcome::Focus(_)));
//! ```

pub mod error;
pub mod logging;
pub mod modal;
pub mod page;
pub mod site;

// Re-exports
pub use error::{FolioError, FolioResult};
pub use modal::{
    resolve_trigger_source, CardAttributes, ClickOrigin, DeferredAction, DeferredOutcome,
    DeferredTask, FocusTarget, GeneratedEntry, HostMarkup, KeyInput, ModalBody, ModalContent,
    ModalController, ModalScaffold, ModalState, TriggerSource,
};
pub use page::{ContactDraft, RevealSettings, RevealTracker, SkillLevel, Theme};
pub use site::{Card, CardKind, Certification, Profile, Skill, SiteContent, CERTIFICATIONS};
