//! Edge case and boundary condition tests
//!
//! Missing overlay parts, empty content and repeated dismissals.

use folio_core::modal::BACKDROP_FADE_PROPERTY;
use folio_core::{
    CardAttributes, ClickOrigin, DeferredOutcome, FocusTarget, HostMarkup, KeyInput, ModalBody,
    ModalContent, ModalController, ModalState,
};

// ============================================================================
// Missing scaffold
// ============================================================================

/// Without a backdrop every operation is a no-op
#[test]
fn test_absent_overlay_ignores_everything() {
    let mut modal = ModalController::new(&HostMarkup::absent());
    assert!(!modal.is_available());

    assert!(modal.open(ModalContent::titled("Ignored")).is_none());
    assert!(modal.activate_card(&CardAttributes::titled("Ignored")).is_none());
    assert!(modal.activate_certification(0).is_none());
    assert!(modal.on_close_control().is_none());
    assert!(modal.on_backdrop_click(ClickOrigin::Backdrop).is_none());
    assert!(modal.on_document_key(KeyInput::Escape).is_none());
    assert!(!modal.on_transition_end(BACKDROP_FADE_PROPERTY));

    assert_eq!(modal.state(), &ModalState::Closed);
    assert!(modal.scaffold().is_none());
}

/// Text slots the host left out are skipped; the rest still update
#[test]
fn test_partial_scaffold() {
    let markup = HostMarkup {
        description: false,
        tags: false,
        ..HostMarkup::complete()
    };
    let mut modal = ModalController::new(&markup);
    modal.open(
        ModalContent::titled("Partial")
            .with_description("not shown")
            .with_tags("not shown"),
    );

    let scaffold = modal.scaffold().unwrap();
    assert_eq!(scaffold.title.as_ref().unwrap().text, "Partial");
    assert!(scaffold.description.is_none());
    assert!(scaffold.tags.is_none());
    assert_eq!(modal.content().unwrap().description, "not shown");
}

/// Link content without a live anchor shows neither affordance
#[test]
fn test_link_without_live_anchor() {
    let mut modal = ModalController::new(&HostMarkup::complete().without_live_link());
    modal.open(ModalContent::titled("Link").with_body(ModalBody::Link("https://x".to_string())));

    let scaffold = modal.scaffold().unwrap();
    assert!(scaffold.live.is_none());
    assert!(!scaffold.image().unwrap().visible);
    assert!(modal.is_open());
}

/// No close control and no visible link: focus has nowhere to go
#[test]
fn test_focus_without_focusable() {
    let mut modal = ModalController::new(&HostMarkup::complete().without_close_control());
    let task = modal.open(ModalContent::titled("Nothing to focus")).unwrap();
    assert_eq!(modal.run_deferred(task), DeferredOutcome::Idle);
    assert_eq!(modal.focused(), None);
}

/// Without a close control the visible live link takes focus
#[test]
fn test_focus_falls_back_to_live_link() {
    let mut modal = ModalController::new(&HostMarkup::complete().without_close_control());
    let task = modal
        .activate_card(&CardAttributes::titled("Live").with_live("https://live.example"))
        .unwrap();
    assert_eq!(
        modal.run_deferred(task),
        DeferredOutcome::Focus(FocusTarget::LiveLink)
    );
}

// ============================================================================
// Empty content
// ============================================================================

/// Neither image nor link: both affordances hidden after open
#[test]
fn test_empty_body_hides_both() {
    let mut modal = ModalController::new(&HostMarkup::complete());
    modal.activate_card(&CardAttributes::titled("Image").with_image("/a.png"));
    modal.activate_card(&CardAttributes::titled("Plain"));

    let scaffold = modal.scaffold().unwrap();
    assert!(!scaffold.image().unwrap().visible);
    assert!(scaffold.image().unwrap().src.is_empty());
    assert!(!scaffold.live.as_ref().unwrap().visible);
}

/// Empty-string attributes count as absent
#[test]
fn test_empty_string_attributes() {
    let mut modal = ModalController::new(&HostMarkup::complete());
    let card = CardAttributes::titled("")
        .with_image("")
        .with_link("")
        .with_live("");
    modal.activate_card(&card);

    assert_eq!(modal.content().unwrap().body, ModalBody::Empty);
    assert_eq!(modal.scaffold().unwrap().title.as_ref().unwrap().text, "");
}

// ============================================================================
// Repeated dismissal
// ============================================================================

/// Dismissing a closed overlay through any path changes nothing
#[test]
fn test_dismiss_closed_overlay() {
    let mut modal = ModalController::new(&HostMarkup::complete());
    let before = modal.clone();

    assert!(modal.close().is_none());
    assert!(modal.on_close_control().is_none());
    assert!(modal.on_backdrop_click(ClickOrigin::Backdrop).is_none());
    assert!(modal.on_document_key(KeyInput::Escape).is_none());
    assert!(!modal.on_transition_end(BACKDROP_FADE_PROPERTY));

    assert_eq!(modal, before);
    assert_eq!(modal.scaffold().unwrap().backdrop.aria_hidden(), "true");
}

/// Reopening while open replaces the content and restarts the generation
#[test]
fn test_reopen_while_open() {
    let mut modal = ModalController::new(&HostMarkup::complete());
    let first = modal.open(ModalContent::titled("First")).unwrap();
    let second = modal.open(ModalContent::titled("Second")).unwrap();

    assert!(second.generation > first.generation);
    assert_eq!(modal.run_deferred(first), DeferredOutcome::Stale);
    assert_eq!(modal.content().unwrap().title, "Second");
}
