//! The modal controller.
//!
//! Owns the overlay scaffold and the current [`ModalState`]. Every event the
//! page forwards (card activation, close control, backdrop click, document
//! key) ends in [`ModalController::open`] or [`ModalController::close`].
//! Both return the deferred task the caller must schedule; the task comes
//! back through [`ModalController::run_deferred`] once its delay elapses.

use super::content::{resolve_trigger_source, CardAttributes, ModalBody, ModalContent, TriggerSource};
use super::deferred::{DeferredAction, DeferredTask, Generation};
use super::scaffold::{FocusTarget, HostMarkup, ModalScaffold, BACKDROP_FADE_PROPERTY};
use crate::site::CERTIFICATIONS;

/// Visibility of the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalContent),
}

/// Keys the controller and cards react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    Enter,
    Space,
    Other,
}

impl KeyInput {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => KeyInput::Escape,
            "Enter" => KeyInput::Enter,
            " " | "Spacebar" => KeyInput::Space,
            _ => KeyInput::Other,
        }
    }

    /// Keys that activate a focused card, same as a click.
    pub fn activates_card(self) -> bool {
        matches!(self, KeyInput::Enter | KeyInput::Space)
    }
}

/// Where a click on the backdrop started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The backdrop element itself
    Backdrop,
    /// Something inside the panel; the click only bubbled to the backdrop
    Panel,
}

/// Result of running a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredOutcome {
    /// Focus should move to this element
    Focus(FocusTarget),
    /// The image source was cleared
    ImageReleased,
    /// The task belonged to an earlier open/close and was dropped
    Stale,
    /// Still current, but there was nothing to do
    Idle,
}

/// Controller for the single shared overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalController {
    scaffold: Option<ModalScaffold>,
    state: ModalState,
    generation: Generation,
    pending_release: Option<Generation>,
    focused: Option<FocusTarget>,
}

impl ModalController {
    /// Create a closed controller for the given host markup.
    pub fn new(markup: &HostMarkup) -> Self {
        let scaffold = ModalScaffold::from_markup(markup);
        if scaffold.is_none() {
            tracing::warn!("Modal backdrop missing from host markup; overlay disabled");
        }
        Self {
            scaffold,
            state: ModalState::Closed,
            generation: Generation::default(),
            pending_release: None,
            focused: None,
        }
    }

    /// Whether the host provided enough markup for the overlay to work.
    pub fn is_available(&self) -> bool {
        self.scaffold.is_some()
    }

    pub fn scaffold(&self) -> Option<&ModalScaffold> {
        self.scaffold.as_ref()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Content currently displayed, if open.
    pub fn content(&self) -> Option<&ModalContent> {
        match &self.state {
            ModalState::Open(content) => Some(content),
            ModalState::Closed => None,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Element that last received focus from a deferred focus task.
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focused
    }

    /// Show the overlay with `content`, overwriting every field.
    ///
    /// Returns the focus task to schedule, or `None` when the overlay is
    /// unavailable.
    pub fn open(&mut self, content: ModalContent) -> Option<DeferredTask> {
        let scaffold = self.scaffold.as_mut()?;

        if let Some(slot) = scaffold.title.as_mut() {
            slot.text.clone_from(&content.title);
        }
        if let Some(slot) = scaffold.description.as_mut() {
            slot.text.clone_from(&content.description);
        }
        if let Some(slot) = scaffold.tags.as_mut() {
            slot.text.clone_from(&content.tags);
        }

        match &content.body {
            ModalBody::Image(src) => {
                let image = scaffold.ensure_image();
                image.src.clone_from(src);
                image.visible = true;
                if let Some(live) = scaffold.live.as_mut() {
                    live.href.clear();
                    live.visible = false;
                }
            }
            ModalBody::Link(href) => {
                if let Some(image) = scaffold.image_mut() {
                    image.src.clear();
                    image.visible = false;
                }
                if let Some(live) = scaffold.live.as_mut() {
                    live.href.clone_from(href);
                    live.visible = true;
                }
            }
            ModalBody::Empty => {
                if let Some(image) = scaffold.image_mut() {
                    image.src.clear();
                    image.visible = false;
                }
                if let Some(live) = scaffold.live.as_mut() {
                    live.href.clear();
                    live.visible = false;
                }
            }
        }

        scaffold.backdrop.shown = true;
        self.generation = self.generation.next();
        self.pending_release = None;
        self.focused = None;

        tracing::info!(
            title = %content.title,
            generation = %self.generation,
            "Modal opened"
        );
        self.state = ModalState::Open(content);

        Some(DeferredTask::focus(self.generation))
    }

    /// Hide the overlay.
    ///
    /// Returns the image-release fallback task, or `None` when already
    /// closed or unavailable.
    pub fn close(&mut self) -> Option<DeferredTask> {
        if !self.is_open() {
            return None;
        }
        let scaffold = self.scaffold.as_mut()?;

        scaffold.backdrop.shown = false;
        self.generation = self.generation.next();
        self.pending_release = Some(self.generation);
        self.focused = None;
        self.state = ModalState::Closed;

        tracing::info!(generation = %self.generation, "Modal closed");
        Some(DeferredTask::release_image(self.generation))
    }

    /// Resolve a trigger source and open with the result.
    pub fn activate(&mut self, source: &TriggerSource) -> Option<DeferredTask> {
        self.open(resolve_trigger_source(source))
    }

    /// Click (or Enter/Space) on a project or certification card.
    pub fn activate_card(&mut self, attrs: &CardAttributes) -> Option<DeferredTask> {
        self.activate(&TriggerSource::Card(attrs.clone()))
    }

    /// Click on a generated certification button.
    pub fn activate_certification(&mut self, index: usize) -> Option<DeferredTask> {
        let Some(cert) = CERTIFICATIONS.get(index) else {
            tracing::warn!(index, "No certification at index");
            return None;
        };
        self.activate(&TriggerSource::Generated(cert.entry()))
    }

    /// Click on the explicit close control.
    pub fn on_close_control(&mut self) -> Option<DeferredTask> {
        self.close()
    }

    /// Click that reached the backdrop.
    pub fn on_backdrop_click(&mut self, origin: ClickOrigin) -> Option<DeferredTask> {
        match origin {
            ClickOrigin::Backdrop => self.close(),
            ClickOrigin::Panel => None,
        }
    }

    /// Key pressed anywhere in the document.
    pub fn on_document_key(&mut self, key: KeyInput) -> Option<DeferredTask> {
        match key {
            KeyInput::Escape => self.close(),
            _ => None,
        }
    }

    /// A `transitionend` reached the backdrop.
    ///
    /// Panel descendants bubble their own transitions up to the backdrop;
    /// only the backdrop fades [`BACKDROP_FADE_PROPERTY`], so any other
    /// property is ignored. Returns `true` if the image source was released.
    pub fn on_transition_end(&mut self, property: &str) -> bool {
        if property != BACKDROP_FADE_PROPERTY {
            tracing::trace!(property, "Ignoring nested transition");
            return false;
        }
        if self.is_open() || self.pending_release != Some(self.generation) {
            return false;
        }
        self.release_image();
        true
    }

    /// Run a task returned by [`open`](Self::open) or [`close`](Self::close)
    /// after its delay.
    pub fn run_deferred(&mut self, task: DeferredTask) -> DeferredOutcome {
        if task.generation != self.generation {
            tracing::debug!(
                task = %task.generation,
                current = %self.generation,
                action = ?task.action,
                "Dropping stale deferred task"
            );
            return DeferredOutcome::Stale;
        }

        match task.action {
            DeferredAction::FocusFirst => {
                if !self.is_open() {
                    return DeferredOutcome::Idle;
                }
                match self.scaffold.as_ref().and_then(ModalScaffold::first_focusable) {
                    Some(target) => {
                        self.focused = Some(target);
                        DeferredOutcome::Focus(target)
                    }
                    None => DeferredOutcome::Idle,
                }
            }
            DeferredAction::ReleaseImage => {
                if self.pending_release == Some(task.generation) {
                    self.release_image();
                    DeferredOutcome::ImageReleased
                } else {
                    DeferredOutcome::Idle
                }
            }
        }
    }

    fn release_image(&mut self) {
        self.pending_release = None;
        if let Some(image) = self.scaffold.as_mut().and_then(ModalScaffold::image_mut) {
            image.src.clear();
            image.visible = false;
            tracing::debug!("Released modal image source");
        }
    }
}
