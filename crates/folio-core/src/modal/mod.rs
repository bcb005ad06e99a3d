//! Shared overlay for project and certification details.
//!
//! - [`content`]: trigger sources and how they resolve to [`ModalContent`]
//! - [`scaffold`]: the overlay elements and which of them the host provides
//! - [`deferred`]: generation-tagged one-shot tasks (focus, image release)
//! - [`controller`]: the state machine tying them together

pub mod content;
pub mod controller;
pub mod deferred;
pub mod scaffold;

pub use content::{
    resolve_trigger_source, CardAttributes, GeneratedEntry, ModalBody, ModalContent, TriggerSource,
};
pub use controller::{ClickOrigin, DeferredOutcome, KeyInput, ModalController, ModalState};
pub use deferred::{DeferredAction, DeferredTask, Generation, FOCUS_DELAY, IMAGE_RELEASE_FALLBACK};
pub use scaffold::{
    Backdrop, FocusTarget, HostMarkup, BACKDROP_CLASS, BACKDROP_FADE_PROPERTY, SHOW_CLASS, ImageOrigin, ImagePlacement, ImageSlot, LiveLink,
    ModalScaffold, TextSlot,
};
