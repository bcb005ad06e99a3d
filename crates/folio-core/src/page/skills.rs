//! Skill levels and bar widths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Proficiency in percent, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "RawLevel", into = "u8")]
pub struct SkillLevel(u8);

/// Level as written in a content file: any JSON number, or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Number(f64),
    Text(String),
}

impl SkillLevel {
    pub const MAX: u8 = 100;

    pub fn new(percent: u8) -> Self {
        SkillLevel(percent.min(Self::MAX))
    }

    /// Parse a level the way a `data-value` attribute is read: anything
    /// unparsable counts as zero.
    pub fn parse_lossy(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .map(Self::from_number)
            .unwrap_or_default()
    }

    /// Clamp to 0..=100 and round; non-finite values count as zero.
    pub fn from_number(value: f64) -> Self {
        if !value.is_finite() {
            return SkillLevel::default();
        }
        SkillLevel(value.clamp(0.0, f64::from(Self::MAX)).round() as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Inline width for the bar fill; zero until revealed.
    pub fn width_style(self, revealed: bool) -> String {
        let width = if revealed { self.0 } else { 0 };
        format!("width: {}%;", width)
    }
}

impl From<RawLevel> for SkillLevel {
    fn from(raw: RawLevel) -> Self {
        match raw {
            RawLevel::Number(value) => Self::from_number(value),
            RawLevel::Text(text) => Self::parse_lossy(&text),
        }
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        assert_eq!(SkillLevel::new(150).percent(), 100);
        assert_eq!(SkillLevel::new(42).percent(), 42);
    }

    #[test]
    fn test_from_number_clamps_and_rounds() {
        assert_eq!(SkillLevel::from_number(-5.0).percent(), 0);
        assert_eq!(SkillLevel::from_number(101.0).percent(), 100);
        assert_eq!(SkillLevel::from_number(72.5).percent(), 73);
        assert_eq!(SkillLevel::from_number(f64::INFINITY).percent(), 0);
    }

    #[test]
    fn test_deserialize_any_number_or_string() {
        let levels: Vec<SkillLevel> =
            serde_json::from_str(r#"[85, 72.4, 1e3, -3, "60", "lots"]"#).unwrap();
        let percents: Vec<u8> = levels.into_iter().map(SkillLevel::percent).collect();
        assert_eq!(percents, vec![85, 72, 100, 0, 60, 0]);
    }

    #[test]
    fn test_parse_lossy() {
        assert_eq!(SkillLevel::parse_lossy("85").percent(), 85);
        assert_eq!(SkillLevel::parse_lossy(" 72.6 ").percent(), 73);
        assert_eq!(SkillLevel::parse_lossy("").percent(), 0);
        assert_eq!(SkillLevel::parse_lossy("lots").percent(), 0);
        assert_eq!(SkillLevel::parse_lossy("NaN").percent(), 0);
    }

    #[test]
    fn test_width_style() {
        let level = SkillLevel::new(80);
        assert_eq!(level.width_style(false), "width: 0%;");
        assert_eq!(level.width_style(true), "width: 80%;");
        assert_eq!(level.to_string(), "80%");
    }
}
