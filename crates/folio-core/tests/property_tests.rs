//! Property-based tests for trigger resolution and the modal controller
//!
//! Uses proptest to verify the body-precedence rules and that any sequence
//! of events leaves the overlay in a consistent state.

use proptest::prelude::*;
use folio_core::modal::BACKDROP_FADE_PROPERTY;
use folio_core::{
    resolve_trigger_source, CardAttributes, ClickOrigin, HostMarkup, KeyInput, ModalBody,
    ModalController, TriggerSource,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Optional attribute value, sometimes empty
fn attr_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(String::new())),
        3 => prop::string::string_regex("[a-zA-Z0-9/:._-]{1,40}")
            .expect("valid regex")
            .prop_map(Some),
    ]
}

fn card_strategy() -> impl Strategy<Value = CardAttributes> {
    (
        attr_strategy(),
        attr_strategy(),
        attr_strategy(),
        attr_strategy(),
        attr_strategy(),
        attr_strategy(),
    )
        .prop_map(|(title, description, tags, image, link, live)| CardAttributes {
            title,
            description,
            tags,
            image,
            link,
            live,
        })
}

/// Events the page can forward to the controller
#[derive(Debug, Clone)]
enum PageEvent {
    ActivateCard(CardAttributes),
    ActivateCertification(usize),
    CloseControl,
    Backdrop(bool),
    Key(KeyInput),
    TransitionEnd,
}

fn event_strategy() -> impl Strategy<Value = PageEvent> {
    prop_oneof![
        3 => card_strategy().prop_map(PageEvent::ActivateCard),
        2 => (0..6usize).prop_map(PageEvent::ActivateCertification),
        1 => Just(PageEvent::CloseControl),
        1 => any::<bool>().prop_map(PageEvent::Backdrop),
        1 => prop_oneof![
            Just(KeyInput::Escape),
            Just(KeyInput::Enter),
            Just(KeyInput::Space),
            Just(KeyInput::Other),
        ]
        .prop_map(PageEvent::Key),
        1 => Just(PageEvent::TransitionEnd),
    ]
}

fn markup_strategy() -> impl Strategy<Value = HostMarkup> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(image, live_link, close_control, description)| HostMarkup {
            image,
            live_link,
            close_control,
            description,
            ..HostMarkup::complete()
        },
    )
}

fn apply(modal: &mut ModalController, event: PageEvent) {
    match event {
        PageEvent::ActivateCard(card) => {
            modal.activate_card(&card);
        }
        PageEvent::ActivateCertification(index) => {
            modal.activate_certification(index);
        }
        PageEvent::CloseControl => {
            modal.on_close_control();
        }
        PageEvent::Backdrop(on_backdrop) => {
            let origin = if on_backdrop {
                ClickOrigin::Backdrop
            } else {
                ClickOrigin::Panel
            };
            modal.on_backdrop_click(origin);
        }
        PageEvent::Key(key) => {
            modal.on_document_key(key);
        }
        PageEvent::TransitionEnd => {
            modal.on_transition_end(BACKDROP_FADE_PROPERTY);
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A non-empty image always wins, whatever the link attributes say
    #[test]
    fn image_takes_precedence(card in card_strategy()) {
        let content = resolve_trigger_source(&TriggerSource::Card(card.clone()));
        match card.image.as_deref().filter(|s| !s.is_empty()) {
            Some(src) => prop_assert_eq!(content.body, ModalBody::Image(src.to_string())),
            None => prop_assert!(content.body.image().is_none()),
        }
    }

    /// Without an image, a non-empty link or live attribute yields a link body
    #[test]
    fn link_without_image(card in card_strategy()) {
        let card = CardAttributes { image: None, ..card };
        let content = resolve_trigger_source(&TriggerSource::Card(card.clone()));
        match card.link_href() {
            Some(href) => prop_assert_eq!(content.body, ModalBody::Link(href.to_string())),
            None => prop_assert_eq!(content.body, ModalBody::Empty),
        }
    }

    /// Text fields are copied verbatim, absent ones become empty
    #[test]
    fn text_fields_verbatim(card in card_strategy()) {
        let content = resolve_trigger_source(&TriggerSource::Card(card.clone()));
        prop_assert_eq!(content.title, card.title.unwrap_or_default());
        prop_assert_eq!(content.description, card.description.unwrap_or_default());
        prop_assert_eq!(content.tags, card.tags.unwrap_or_default());
    }

    /// Image and live link are never visible at the same time, and the
    /// backdrop always agrees with the state
    #[test]
    fn overlay_stays_consistent(
        markup in markup_strategy(),
        events in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let mut modal = ModalController::new(&markup);
        for event in events {
            apply(&mut modal, event);

            let scaffold = modal.scaffold().unwrap();
            let image_visible = scaffold.image().map(|i| i.visible).unwrap_or(false);
            let live_visible = scaffold.live.as_ref().map(|l| l.visible).unwrap_or(false);
            prop_assert!(!(image_visible && live_visible));
            prop_assert_eq!(scaffold.backdrop.shown, modal.is_open());
            prop_assert_eq!(
                scaffold.backdrop.aria_hidden(),
                if modal.is_open() { "false" } else { "true" }
            );

            if let Some(content) = modal.content() {
                if let Some(title) = scaffold.title.as_ref() {
                    prop_assert_eq!(&title.text, &content.title);
                }
                match &content.body {
                    ModalBody::Image(src) => {
                        prop_assert!(image_visible);
                        prop_assert_eq!(&scaffold.image().unwrap().src, src);
                    }
                    ModalBody::Link(_) => prop_assert!(!image_visible),
                    ModalBody::Empty => prop_assert!(!image_visible && !live_visible),
                }
            }
        }
    }

    /// Closing twice never changes anything the second time
    #[test]
    fn close_is_idempotent(events in prop::collection::vec(event_strategy(), 0..20)) {
        let mut modal = ModalController::new(&HostMarkup::complete());
        for event in events {
            apply(&mut modal, event);
        }
        modal.close();
        let before = modal.clone();
        prop_assert!(modal.close().is_none());
        prop_assert_eq!(modal, before);
    }
}
