use std::hash::Hash;
use std::hash::Hasher;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Span;
use tracing::error;

use crate::pattern::ChipColor;
use crate::registry::TokenRegistry;
use crate::scan::MatchResult;

/// Atomic, non-editable inline element standing in for a recognized token.
///
/// Two chips are the same chip when they share a kind and raw text; the
/// display text and color are presentation only.
#[derive(Debug, Clone)]
pub struct Chip {
    kind: String,
    raw: String,
    display: String,
    color: ChipColor,
}

impl Chip {
    pub fn new(
        kind: impl Into<String>,
        raw: impl Into<String>,
        display: impl Into<String>,
        color: ChipColor,
    ) -> Self {
        Self {
            kind: kind.into(),
            raw: raw.into(),
            display: display.into(),
            color,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The exact text the chip replaces; splicing this back yields the
    /// original buffer.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn color(&self) -> ChipColor {
        self.color
    }

    pub fn style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.color.to_color())
            .add_modifier(Modifier::BOLD)
    }

    pub fn to_span(&self) -> Span<'static> {
        Span::styled(self.display.clone(), self.style())
    }
}

impl PartialEq for Chip {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.raw == other.raw
    }
}

impl Eq for Chip {}

impl Hash for Chip {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.raw.hash(state);
    }
}

impl TokenRegistry {
    /// Renders a match produced by this registry into a chip.
    ///
    /// A kind with no registered pattern is a host-integration bug: it panics
    /// in debug builds and is logged and skipped otherwise.
    pub fn render(&self, token: &MatchResult<'_>) -> Option<Chip> {
        let Some(pattern) = self.get(token.kind) else {
            if cfg!(debug_assertions) {
                panic!("no token pattern registered for kind `{}`", token.kind);
            }
            error!(kind = token.kind, "no token pattern registered for kind");
            return None;
        };
        Some(Chip::new(
            pattern.kind(),
            token.raw,
            token.display,
            pattern.color(),
        ))
    }
}
