//! Shared page state provided to all components.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! provide_page_context();
//!
//! // In child components
//! let modal = use_modal();
//! modal.dispatch(|m| m.activate_card(&attrs));
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{
    DeferredOutcome, DeferredTask, FocusTarget, ModalController, RevealSettings, RevealTracker,
    SiteContent, Theme,
};

use crate::launch_options;

/// Mounted elements inside the overlay that can receive focus.
#[derive(Clone, Default)]
pub struct ModalFocus {
    pub close_control: Option<Rc<MountedData>>,
    pub live_link: Option<Rc<MountedData>>,
}

impl ModalFocus {
    fn element(&self, target: FocusTarget) -> Option<Rc<MountedData>> {
        match target {
            FocusTarget::CloseControl => self.close_control.clone(),
            FocusTarget::LiveLink => self.live_link.clone(),
        }
    }
}

/// Handle to the single modal controller.
///
/// Every mutation goes through [`ModalHandle::dispatch`] so the deferred
/// task it returns is always scheduled.
#[derive(Clone, Copy, PartialEq)]
pub struct ModalHandle {
    pub controller: Signal<ModalController>,
    pub focus: Signal<ModalFocus>,
}

impl ModalHandle {
    /// Apply an operation and schedule the task it returns.
    pub fn dispatch(self, op: impl FnOnce(&mut ModalController) -> Option<DeferredTask>) {
        let mut controller = self.controller;
        let task = {
            let mut guard = controller.write();
            op(&mut *guard)
        };
        if let Some(task) = task {
            self.schedule(task);
        }
    }

    /// Forward a `transitionend` that reached the backdrop.
    ///
    /// Transitions of panel descendants bubble here too; the controller
    /// only releases the image when `property` is the backdrop's own fade.
    pub fn transition_ended(self, property: &str) {
        let mut controller = self.controller;
        controller.write().on_transition_end(property);
    }

    fn schedule(self, task: DeferredTask) {
        let mut controller = self.controller;
        let focus = self.focus;
        spawn(async move {
            let task = task.elapsed().await;
            let outcome = controller.write().run_deferred(task);
            if let DeferredOutcome::Focus(target) = outcome {
                let element = focus.peek().element(target);
                if let Some(element) = element {
                    if let Err(e) = element.set_focus(true).await {
                        tracing::debug!("Could not focus {:?}: {:?}", target, e);
                    }
                }
            }
        });
    }
}

/// Reveal trackers for sections and skill bars.
#[derive(Clone, Copy, PartialEq)]
pub struct RevealState {
    pub sections: Signal<RevealTracker>,
    pub skill_bars: Signal<RevealTracker>,
}

/// Mounted section elements by id, for smooth anchor scrolling.
pub type SectionAnchors = Signal<HashMap<String, Rc<MountedData>>>;

/// Provide every page-level context. Call once from the root component.
pub fn provide_page_context() {
    let options = launch_options();
    let site = options.content.clone();
    let initial_theme = options.theme;

    let controller = use_signal(|| ModalController::new(&site.markup));
    let focus = use_signal(ModalFocus::default);
    let theme = use_signal(|| initial_theme);
    let sections = use_signal(|| RevealTracker::new(RevealSettings::SECTIONS));
    let skill_bars = use_signal(|| RevealTracker::new(RevealSettings::SKILL_BARS));
    let anchors: SectionAnchors = use_signal(HashMap::new);

    use_context_provider(|| site);
    use_context_provider(|| ModalHandle { controller, focus });
    use_context_provider(|| theme);
    use_context_provider(|| RevealState {
        sections,
        skill_bars,
    });
    use_context_provider(|| anchors);
}

/// Hook to access the site content.
pub fn use_site() -> SiteContent {
    use_context::<SiteContent>()
}

/// Hook to access the modal controller.
pub fn use_modal() -> ModalHandle {
    use_context::<ModalHandle>()
}

/// Hook to access the current theme.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Hook to access the reveal trackers.
pub fn use_reveal() -> RevealState {
    use_context::<RevealState>()
}

/// Hook to access mounted section anchors.
pub fn use_section_anchors() -> SectionAnchors {
    use_context::<SectionAnchors>()
}
