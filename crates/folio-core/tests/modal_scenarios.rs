//! End-to-end modal scenarios
//!
//! Each test drives the controller the way the page does: a trigger opens
//! it, a dismissal closes it, and deferred tasks are handed back after
//! their delay.

use folio_core::modal::{ImageOrigin, ImagePlacement, FOCUS_DELAY, IMAGE_RELEASE_FALLBACK};
use folio_core::{
    CardAttributes, ClickOrigin, DeferredOutcome, FocusTarget, HostMarkup, KeyInput, ModalBody,
    ModalController, ModalState, CERTIFICATIONS,
};

fn open_cert_x(modal: &mut ModalController) {
    let card = CardAttributes::titled("Cert X").with_image("/cert1.jpg");
    modal.activate_card(&card).expect("overlay available");
}

// ============================================================================
// Scenario A: image content
// ============================================================================

#[test]
fn test_scenario_a_image_card() {
    let mut modal = ModalController::new(&HostMarkup::complete());
    open_cert_x(&mut modal);

    let scaffold = modal.scaffold().unwrap();
    assert_eq!(scaffold.title.as_ref().unwrap().text, "Cert X");

    let image = scaffold.image().unwrap();
    assert!(image.visible);
    assert_eq!(image.src, "/cert1.jpg");
    assert!(!scaffold.live.as_ref().unwrap().visible);
}

// ============================================================================
// Scenario B: link content
// ============================================================================

#[test]
fn test_scenario_b_link_card() {
    let mut modal = ModalController::new(&HostMarkup::complete());
    let card = CardAttributes::titled("Project Y").with_link("https://example.com");
    modal.activate_card(&card);

    let scaffold = modal.scaffold().unwrap();
    let live = scaffold.live.as_ref().unwrap();
    assert!(live.visible);
    assert_eq!(live.href, "https://example.com");
    assert!(!scaffold.image().unwrap().visible);
}

// ============================================================================
// Scenario C: Escape closes
// ============================================================================

#[test]
fn test_scenario_c_escape() {
    let mut modal = ModalController::new(&HostMarkup::complete());
    open_cert_x(&mut modal);

    let task = modal.on_document_key(KeyInput::Escape);
    assert!(task.is_some());
    assert_eq!(modal.state(), &ModalState::Closed);
    assert_eq!(modal.scaffold().unwrap().backdrop.aria_hidden(), "true");
}

// ============================================================================
// Scenario D: backdrop vs panel clicks
// ============================================================================

#[test]
fn test_scenario_d_backdrop_click() {
    let mut modal = ModalController::new(&HostMarkup::complete());
    open_cert_x(&mut modal);

    assert!(modal.on_backdrop_click(ClickOrigin::Panel).is_none());
    assert!(modal.is_open());

    assert!(modal.on_backdrop_click(ClickOrigin::Backdrop).is_some());
    assert!(!modal.is_open());
}

// ============================================================================
// Scenario E: image element synthesized
// ============================================================================

#[test]
fn test_scenario_e_missing_image_element() {
    let mut modal = ModalController::new(&HostMarkup::complete().without_image());
    assert!(modal.scaffold().unwrap().image().is_none());

    open_cert_x(&mut modal);
    let image = modal.scaffold().unwrap().image().unwrap().clone();
    assert_eq!(image.origin, ImageOrigin::Synthesized);
    assert_eq!(image.placement, ImagePlacement::BeforeLiveLink);
    assert_eq!(image.src, "/cert1.jpg");

    modal.close();
    let card = CardAttributes::titled("Cert Z").with_image("/cert3.jpg");
    modal.activate_card(&card);
    let image = modal.scaffold().unwrap().image().unwrap();
    assert_eq!(image.src, "/cert3.jpg");
    assert!(image.visible);
}

// ============================================================================
// Full lifecycle with timers
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_open_focus_close_release_cycle() {
    let mut modal = ModalController::new(&HostMarkup::complete());

    let start = tokio::time::Instant::now();
    let focus = modal.activate_certification(0).unwrap().elapsed().await;
    assert!(start.elapsed() >= FOCUS_DELAY);
    assert_eq!(
        modal.run_deferred(focus),
        DeferredOutcome::Focus(FocusTarget::CloseControl)
    );
    assert_eq!(
        modal.content().unwrap().body,
        ModalBody::Image(CERTIFICATIONS[0].image.to_string())
    );

    let release = modal.on_close_control().unwrap();
    assert_eq!(release.delay, IMAGE_RELEASE_FALLBACK);
    let release = release.elapsed().await;
    assert_eq!(modal.run_deferred(release), DeferredOutcome::ImageReleased);
    assert!(modal.scaffold().unwrap().image().unwrap().src.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_reopen_drops_stale_tasks() {
    let mut modal = ModalController::new(&HostMarkup::complete());

    let first_focus = modal.activate_certification(0).unwrap();
    let release = modal.close().unwrap();
    let second_focus = modal.activate_certification(1).unwrap();

    let (first_focus, release, second_focus) = (
        first_focus.elapsed().await,
        release.elapsed().await,
        second_focus.elapsed().await,
    );

    assert_eq!(modal.run_deferred(first_focus), DeferredOutcome::Stale);
    assert_eq!(modal.run_deferred(release), DeferredOutcome::Stale);
    assert_eq!(
        modal.run_deferred(second_focus),
        DeferredOutcome::Focus(FocusTarget::CloseControl)
    );
    assert_eq!(
        modal.scaffold().unwrap().image().unwrap().src,
        CERTIFICATIONS[1].image
    );
}
