//! Overlay scaffold: the elements the modal writes into.
//!
//! The host page decides which parts exist ([`HostMarkup`]). The controller
//! builds a [`ModalScaffold`] from it once, and the view layer renders the
//! scaffold as-is. Every optional part is an `Option`, so a missing part is
//! skipped rather than treated as an error.

use serde::{Deserialize, Serialize};

/// Which overlay parts the host page provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostMarkup {
    pub backdrop: bool,
    pub title: bool,
    pub description: bool,
    pub tags: bool,
    pub live_link: bool,
    pub close_control: bool,
    pub image: bool,
}

impl Default for HostMarkup {
    fn default() -> Self {
        Self::complete()
    }
}

impl HostMarkup {
    /// Every part present.
    pub const fn complete() -> Self {
        Self {
            backdrop: true,
            title: true,
            description: true,
            tags: true,
            live_link: true,
            close_control: true,
            image: true,
        }
    }

    /// No overlay on the page at all.
    pub const fn absent() -> Self {
        Self {
            backdrop: false,
            title: false,
            description: false,
            tags: false,
            live_link: false,
            close_control: false,
            image: false,
        }
    }

    pub const fn without_image(mut self) -> Self {
        self.image = false;
        self
    }

    pub const fn without_live_link(mut self) -> Self {
        self.live_link = false;
        self
    }

    pub const fn without_close_control(mut self) -> Self {
        self.close_control = false;
        self
    }
}

/// Class added to the backdrop while the overlay is shown.
pub const SHOW_CLASS: &str = "show";

/// Base class of the backdrop element.
pub const BACKDROP_CLASS: &str = "modal-backdrop";

/// CSS property of the backdrop's show/hide fade.
pub const BACKDROP_FADE_PROPERTY: &str = "opacity";

/// Alt text given to a synthesized preview image.
pub const SYNTHESIZED_ALT: &str = "Preview";

/// The full-viewport element behind the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backdrop {
    pub shown: bool,
}

impl Backdrop {
    fn hidden() -> Self {
        Self { shown: false }
    }

    /// Value of the `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        if self.shown {
            "false"
        } else {
            "true"
        }
    }

    /// CSS class list for the backdrop element.
    pub fn class(&self) -> String {
        if self.shown {
            format!("{BACKDROP_CLASS} {SHOW_CLASS}")
        } else {
            BACKDROP_CLASS.to_string()
        }
    }
}

/// A text node the overlay writes into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextSlot {
    pub text: String,
}

/// Where the image element came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    /// Provided by the host markup
    Authored,
    /// Created by the controller because the host omitted it
    Synthesized,
}

/// Position of the image inside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePlacement {
    /// Directly before the live link
    BeforeLiveLink,
    /// Last child of the panel
    Appended,
}

/// The preview image element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub src: String,
    pub visible: bool,
    pub alt: String,
    pub origin: ImageOrigin,
    pub placement: ImagePlacement,
}

/// The "live" anchor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LiveLink {
    pub href: String,
    pub visible: bool,
}

/// Something inside the overlay that can take focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    CloseControl,
    LiveLink,
}

/// Rendered state of every overlay part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalScaffold {
    pub backdrop: Backdrop,
    pub title: Option<TextSlot>,
    pub description: Option<TextSlot>,
    pub tags: Option<TextSlot>,
    pub live: Option<LiveLink>,
    pub close_control: bool,
    image: Option<ImageSlot>,
}

impl ModalScaffold {
    /// Build the scaffold for the given markup.
    ///
    /// Returns `None` without a backdrop: the overlay cannot exist without it.
    /// The image is left unset when the host omits it; it is synthesized on
    /// first use by [`ModalScaffold::ensure_image`].
    pub fn from_markup(markup: &HostMarkup) -> Option<Self> {
        if !markup.backdrop {
            return None;
        }
        let slot = |present: bool| present.then(TextSlot::default);

        let image = markup.image.then(|| ImageSlot {
            src: String::new(),
            visible: false,
            alt: String::new(),
            origin: ImageOrigin::Authored,
            placement: if markup.live_link {
                ImagePlacement::BeforeLiveLink
            } else {
                ImagePlacement::Appended
            },
        });

        Some(Self {
            backdrop: Backdrop::hidden(),
            title: slot(markup.title),
            description: slot(markup.description),
            tags: slot(markup.tags),
            live: markup.live_link.then(LiveLink::default),
            close_control: markup.close_control,
            image,
        })
    }

    /// The image element, if it exists yet.
    pub fn image(&self) -> Option<&ImageSlot> {
        self.image.as_ref()
    }

    /// Return the image element, creating it if the host did not provide one.
    pub fn ensure_image(&mut self) -> &mut ImageSlot {
        let placement = if self.live.is_some() {
            ImagePlacement::BeforeLiveLink
        } else {
            ImagePlacement::Appended
        };
        self.image.get_or_insert_with(|| {
            tracing::debug!(?placement, "Synthesizing modal image element");
            ImageSlot {
                src: String::new(),
                visible: false,
                alt: SYNTHESIZED_ALT.to_string(),
                origin: ImageOrigin::Synthesized,
                placement,
            }
        })
    }

    pub(crate) fn image_mut(&mut self) -> Option<&mut ImageSlot> {
        self.image.as_mut()
    }

    /// First focusable descendant in document order.
    ///
    /// The close control sits in the panel header; the live link only counts
    /// while it is displayed.
    pub fn first_focusable(&self) -> Option<FocusTarget> {
        if self.close_control {
            return Some(FocusTarget::CloseControl);
        }
        match &self.live {
            Some(live) if live.visible => Some(FocusTarget::LiveLink),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_backdrop_no_scaffold() {
        assert!(ModalScaffold::from_markup(&HostMarkup::absent()).is_none());
        let markup = HostMarkup {
            backdrop: false,
            ..HostMarkup::complete()
        };
        assert!(ModalScaffold::from_markup(&markup).is_none());
    }

    #[test]
    fn test_starts_hidden() {
        let scaffold = ModalScaffold::from_markup(&HostMarkup::complete()).unwrap();
        assert!(!scaffold.backdrop.shown);
        assert_eq!(scaffold.backdrop.aria_hidden(), "true");
        assert_eq!(scaffold.backdrop.class(), "modal-backdrop");
    }

    #[test]
    fn test_shown_backdrop_class() {
        let backdrop = Backdrop { shown: true };
        assert_eq!(backdrop.class(), "modal-backdrop show");
        assert_eq!(backdrop.aria_hidden(), "false");
    }

    #[test]
    fn test_synthesized_image_goes_before_live_link() {
        let mut scaffold =
            ModalScaffold::from_markup(&HostMarkup::complete().without_image()).unwrap();
        assert!(scaffold.image().is_none());

        let image = scaffold.ensure_image();
        assert_eq!(image.origin, ImageOrigin::Synthesized);
        assert_eq!(image.alt, SYNTHESIZED_ALT);
        assert_eq!(image.placement, ImagePlacement::BeforeLiveLink);
        assert!(!image.visible);
    }

    #[test]
    fn test_synthesized_image_appended_without_live_link() {
        let markup = HostMarkup::complete().without_image().without_live_link();
        let mut scaffold = ModalScaffold::from_markup(&markup).unwrap();
        assert_eq!(scaffold.ensure_image().placement, ImagePlacement::Appended);
    }

    #[test]
    fn test_ensure_image_keeps_authored_image() {
        let mut scaffold = ModalScaffold::from_markup(&HostMarkup::complete()).unwrap();
        assert_eq!(scaffold.ensure_image().origin, ImageOrigin::Authored);
    }

    #[test]
    fn test_first_focusable_prefers_close_control() {
        let mut scaffold = ModalScaffold::from_markup(&HostMarkup::complete()).unwrap();
        assert_eq!(scaffold.first_focusable(), Some(FocusTarget::CloseControl));

        scaffold.close_control = false;
        assert_eq!(scaffold.first_focusable(), None);

        if let Some(live) = scaffold.live.as_mut() {
            live.visible = true;
        }
        assert_eq!(scaffold.first_focusable(), Some(FocusTarget::LiveLink));
    }
}
