use ratatui::style::Color;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use crate::error::PatternError;
use crate::error::Result;

/// Name of the capture group whose contents become a chip's display text.
pub const VALUE_GROUP: &str = "value";

/// Color tag attached to the chips a pattern renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipColor {
    #[default]
    Gray,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl ChipColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
        }
    }

    pub fn to_color(self) -> Color {
        match self {
            Self::Gray => Color::Gray,
            Self::Red => Color::Red,
            Self::Green => Color::Green,
            Self::Blue => Color::Blue,
            Self::Yellow => Color::Yellow,
            Self::Magenta => Color::Magenta,
            Self::Cyan => Color::Cyan,
        }
    }
}

/// Serializable description of a token pattern, as written in a patterns file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub kind: String,
    pub regex: String,
    #[serde(default)]
    pub color: ChipColor,
}

impl PatternSpec {
    pub fn new(kind: impl Into<String>, regex: impl Into<String>, color: ChipColor) -> Self {
        Self {
            kind: kind.into(),
            regex: regex.into(),
            color,
        }
    }
}

/// A validated recognizer for one kind of inline token.
///
/// The full regex match is the token's raw value; the `value` capture group
/// is what the chip shows.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    kind: String,
    regex: Regex,
    color: ChipColor,
}

impl TokenPattern {
    pub fn new(kind: &str, regex: &str, color: ChipColor) -> Result<Self> {
        let kind = kind.trim();
        if kind.is_empty() {
            return Err(PatternError::EmptyKind);
        }

        let regex = Regex::new(regex).map_err(|source| PatternError::InvalidRegex {
            kind: kind.to_string(),
            source,
        })?;

        if !regex
            .capture_names()
            .flatten()
            .any(|name| name == VALUE_GROUP)
        {
            return Err(PatternError::MissingValueGroup {
                kind: kind.to_string(),
                group: VALUE_GROUP,
            });
        }

        if regex.is_match("") {
            return Err(PatternError::MatchesEmpty {
                kind: kind.to_string(),
            });
        }

        Ok(Self {
            kind: kind.to_string(),
            regex,
            color,
        })
    }

    pub fn from_spec(spec: &PatternSpec) -> Result<Self> {
        Self::new(&spec.kind, &spec.regex, spec.color)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn color(&self) -> ChipColor {
        self.color
    }

    pub fn to_spec(&self) -> PatternSpec {
        PatternSpec::new(self.kind.clone(), self.regex.as_str(), self.color)
    }
}
