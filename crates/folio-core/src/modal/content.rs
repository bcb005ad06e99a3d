//! Modal content and the trigger sources it is resolved from.

use serde::{Deserialize, Serialize};

/// What the overlay body shows below the text fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalBody {
    /// Image preview (certificates, projects with a screenshot)
    Image(String),
    /// "Live" link to an external page
    Link(String),
    /// Text only
    #[default]
    Empty,
}

impl ModalBody {
    /// Image source if this body shows an image.
    pub fn image(&self) -> Option<&str> {
        match self {
            ModalBody::Image(src) => Some(src),
            _ => None,
        }
    }

    /// Link target if this body shows a live link.
    pub fn link(&self) -> Option<&str> {
        match self {
            ModalBody::Link(href) => Some(href),
            _ => None,
        }
    }
}

/// Fully resolved content for one opening of the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalContent {
    pub title: String,
    pub description: String,
    pub tags: String,
    pub body: ModalBody,
}

impl ModalContent {
    /// Content with only a title and an empty body.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_body(mut self, body: ModalBody) -> Self {
        self.body = body;
        self
    }
}

/// Attribute set carried by a project or certification card.
///
/// Field names follow the card attribute contract: `title`, `desc`, `tags`,
/// `image`, and `link` (with `live` accepted as an alias). An empty string
/// counts as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardAttributes {
    pub title: Option<String>,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    pub tags: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub live: Option<String>,
}

impl CardAttributes {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_live(mut self, live: impl Into<String>) -> Self {
        self.live = Some(live.into());
        self
    }

    /// Image source, if present and non-empty.
    pub fn image_src(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    /// Link target: `link` first, then `live`, skipping empty values.
    pub fn link_href(&self) -> Option<&str> {
        non_empty(&self.link).or_else(|| non_empty(&self.live))
    }
}

/// Entry generated from the compiled-in certification list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEntry {
    pub title: String,
    pub image: String,
}

/// Origin of a request to open the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerSource {
    Generated(GeneratedEntry),
    Card(CardAttributes),
}

impl From<CardAttributes> for TriggerSource {
    fn from(attrs: CardAttributes) -> Self {
        TriggerSource::Card(attrs)
    }
}

impl From<GeneratedEntry> for TriggerSource {
    fn from(entry: GeneratedEntry) -> Self {
        TriggerSource::Generated(entry)
    }
}

/// Map a trigger source to the content the overlay should show.
///
/// An image wins over a link; with neither the body is [`ModalBody::Empty`].
pub fn resolve_trigger_source(source: &TriggerSource) -> ModalContent {
    match source {
        TriggerSource::Generated(entry) => {
            let body = if entry.image.is_empty() {
                ModalBody::Empty
            } else {
                ModalBody::Image(entry.image.clone())
            };
            ModalContent::titled(entry.title.clone()).with_body(body)
        }
        TriggerSource::Card(attrs) => {
            let body = match (attrs.image_src(), attrs.link_href()) {
                (Some(src), _) => ModalBody::Image(src.to_string()),
                (None, Some(href)) => ModalBody::Link(href.to_string()),
                (None, None) => ModalBody::Empty,
            };
            ModalContent {
                title: attrs.title.clone().unwrap_or_default(),
                description: attrs.description.clone().unwrap_or_default(),
                tags: attrs.tags.clone().unwrap_or_default(),
                body,
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
