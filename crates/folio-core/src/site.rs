//! Site content: profile text, cards, skills and the certification feed.
//!
//! Everything except certifications can be overridden by a JSON content
//! file. Certifications are compiled in.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::modal::{CardAttributes, GeneratedEntry, HostMarkup};
use crate::page::skills::SkillLevel;

/// A certificate shown as a generated button in the certifications section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub image: &'static str,
}

impl Certification {
    pub fn entry(&self) -> GeneratedEntry {
        GeneratedEntry {
            title: self.title.to_string(),
            image: self.image.to_string(),
        }
    }

    pub fn aria_label(&self) -> String {
        format!("Open certificate {}", self.title)
    }
}

/// Certification feed, fixed at build time.
pub const CERTIFICATIONS: [Certification; 4] = [
    Certification {
        title: "Java Programming Course - Master the Fundamentals and Advanced Concepts",
        image: "/cert1.jpg",
    },
    Certification {
        title: "DBMS Course - Master the Fundamentals and Advanced Concepts",
        image: "/cert2.jpg",
    },
    Certification {
        title: "100 Days of Code: The Complete Python Programming Bootcamp",
        image: "/cert3.jpg",
    },
    Certification {
        title: "Certification Appreciation in SPARK 2.0, PROJECT EXPO, LIET",
        image: "/cert4.jpg",
    },
];

/// Which card style an authored card uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    #[default]
    Project,
    Certification,
}

impl CardKind {
    pub fn class(&self) -> &'static str {
        match self {
            CardKind::Project => "project-card",
            CardKind::Certification => "cert-card",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            CardKind::Project => "View project",
            CardKind::Certification => "View certificate",
        }
    }
}

/// An authored card in the projects grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub link: Option<String>,
}

impl Card {
    /// Tags as shown in the overlay.
    pub fn tags_line(&self) -> String {
        self.tags.join(" \u{00B7} ")
    }

    pub fn aria_label(&self) -> String {
        format!("{} {}", self.kind.verb(), self.title)
    }

    /// Attribute set read by the modal when the card is activated.
    pub fn attributes(&self) -> CardAttributes {
        CardAttributes {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            tags: Some(self.tags_line()),
            image: self.image.clone(),
            link: self.link.clone(),
            live: None,
        }
    }
}

/// A skill with its proficiency bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level: SkillLevel::new(level),
        }
    }
}

/// Header text for the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            tagline: "Software developer".to_string(),
            about: "I build reliable software and enjoy learning new tools along the way."
                .to_string(),
            email: "hello@example.com".to_string(),
        }
    }
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub profile: Profile,
    pub cards: Vec<Card>,
    pub skills: Vec<Skill>,
    /// Overlay parts the page provides
    pub markup: HostMarkup,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            cards: vec![
                Card {
                    kind: CardKind::Project,
                    title: "Library Management System".to_string(),
                    description: "Desktop application for issuing, returning and tracking books."
                        .to_string(),
                    tags: vec!["Java".to_string(), "MySQL".to_string()],
                    image: Some("/project-library.jpg".to_string()),
                    link: None,
                },
                Card {
                    kind: CardKind::Project,
                    title: "Weather Dashboard".to_string(),
                    description: "Forecasts and conditions for saved cities.".to_string(),
                    tags: vec!["JavaScript".to_string(), "REST".to_string()],
                    image: None,
                    link: Some("https://example.com/weather".to_string()),
                },
                Card {
                    kind: CardKind::Project,
                    title: "Expense Tracker".to_string(),
                    description: "Command-line budget tracker with monthly summaries.".to_string(),
                    tags: vec!["Python".to_string()],
                    image: None,
                    link: None,
                },
            ],
            skills: vec![
                Skill::new("Java", 85),
                Skill::new("Python", 80),
                Skill::new("SQL", 75),
                Skill::new("HTML & CSS", 90),
                Skill::new("JavaScript", 70),
            ],
            markup: HostMarkup::complete(),
        }
    }
}

impl SiteContent {
    /// Parse content from JSON and validate it.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Load content from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            cards = content.cards.len(),
            skills = content.skills.len(),
            "Loaded site content"
        );
        Ok(content)
    }

    /// Check rules serde cannot express.
    pub fn validate(&self) -> FolioResult<()> {
        if let Some(index) = self.cards.iter().position(|c| c.title.trim().is_empty()) {
            return Err(FolioError::InvalidContent(format!(
                "card {} has an empty title",
                index
            )));
        }
        if let Some(index) = self.skills.iter().position(|s| s.name.trim().is_empty()) {
            return Err(FolioError::InvalidContent(format!(
                "skill {} has an empty name",
                index
            )));
        }
        Ok(())
    }
}
