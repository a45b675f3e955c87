use ratatui::text::Line;
use ratatui::text::Span;

use crate::chip::Chip;
use crate::registry::TokenRegistry;
use crate::scan::MatchResult;
use crate::text_element::TextElement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Chip(Chip),
}

impl Segment {
    pub fn raw(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Chip(chip) => chip.raw(),
        }
    }

    pub fn display(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Chip(chip) => chip.display(),
        }
    }
}

/// Derived view of a text buffer: plain text interleaved with chips.
///
/// This is a display transform only. [`Composition::raw_text`] always
/// reproduces the buffer it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    segments: Vec<Segment>,
}

impl Composition {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn chips(&self) -> impl Iterator<Item = &Chip> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Chip(chip) => Some(chip),
            Segment::Text(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn raw_text(&self) -> String {
        self.segments.iter().map(Segment::raw).collect()
    }

    pub fn display_text(&self) -> String {
        self.segments.iter().map(Segment::display).collect()
    }

    /// One element per chip, with byte ranges into [`Composition::raw_text`].
    pub fn text_elements(&self) -> Vec<TextElement> {
        let mut elements = Vec::new();
        let mut offset = 0usize;
        for segment in &self.segments {
            let len = segment.raw().len();
            if let Segment::Chip(chip) = segment {
                elements.push(TextElement {
                    byte_range: (offset..offset + len).into(),
                    kind: chip.kind().to_string(),
                    placeholder: Some(chip.display().to_string()),
                });
            }
            offset += len;
        }
        elements
    }

    pub fn to_line(&self) -> Line<'static> {
        Line::from(
            self.segments
                .iter()
                .map(|segment| match segment {
                    Segment::Text(text) => Span::raw(text.clone()),
                    Segment::Chip(chip) => chip.to_span(),
                })
                .collect::<Vec<_>>(),
        )
    }
}

impl TokenRegistry {
    /// Splices rendered chips into `text` in place of the tokens they stand for.
    pub fn compose(&self, text: &str) -> Composition {
        self.splice(text, self.scan(text))
    }

    /// Splices chips for `tokens` into `text`.
    ///
    /// `tokens` must be sorted, non-overlapping and index into `text`, as
    /// returned by [`TokenRegistry::scan`]. Tokens that cannot be rendered
    /// stay in the output as plain text.
    pub fn splice<'a, I>(&self, text: &str, tokens: I) -> Composition
    where
        I: IntoIterator<Item = MatchResult<'a>>,
    {
        let mut segments = Vec::new();
        let mut cursor = 0usize;
        for token in tokens {
            let Some(chip) = self.render(&token) else {
                continue;
            };
            if token.start > cursor {
                segments.push(Segment::Text(text[cursor..token.start].to_string()));
            }
            segments.push(Segment::Chip(chip));
            cursor = token.end;
        }
        if cursor < text.len() {
            segments.push(Segment::Text(text[cursor..].to_string()));
        }
        Composition { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::ChipColor;
    use crate::text_element::ByteRange;
    use pretty_assertions::assert_eq;

    #[test]
    fn splices_chips_between_plain_text() {
        let registry = TokenRegistry::with_defaults();
        let composition = registry.compose("Look at @File:[main.ts] and @Code:[run()]");

        assert_eq!(
            composition.segments(),
            &[
                Segment::Text("Look at ".to_string()),
                Segment::Chip(Chip::new(
                    "file",
                    "@File:[main.ts]",
                    "main.ts",
                    ChipColor::Red
                )),
                Segment::Text(" and ".to_string()),
                Segment::Chip(Chip::new("code", "@Code:[run()]", "run()", ChipColor::Green)),
            ]
        );
        assert_eq!(composition.display_text(), "Look at main.ts and run()");
    }

    #[test]
    fn raw_text_round_trips() {
        let registry = TokenRegistry::with_defaults();
        for text in [
            "",
            "no tokens here",
            "@File:[a.rs]",
            "@File:[a.rs]@Code:[b()]",
            "  @Code:[x] trailing ",
            "naïve @File:[résumé.md] ✓",
            "@File:[unterminated",
        ] {
            assert_eq!(registry.compose(text).raw_text(), text);
        }
    }

    #[test]
    fn plain_text_composes_to_one_segment() {
        let registry = TokenRegistry::with_defaults();
        let composition = registry.compose("no tokens here");

        assert_eq!(
            composition.segments(),
            &[Segment::Text("no tokens here".to_string())]
        );
        assert_eq!(composition.chips().count(), 0);
        assert!(registry.compose("").is_empty());
    }

    #[test]
    fn text_elements_point_at_raw_tokens() {
        let registry = TokenRegistry::with_defaults();
        let text = "é @File:[a.rs] x @Code:[f()]";
        let composition = registry.compose(text);

        let elements = composition.text_elements();

        assert_eq!(
            elements,
            vec![
                TextElement {
                    byte_range: ByteRange { start: 3, end: 15 },
                    kind: "file".to_string(),
                    placeholder: Some("a.rs".to_string()),
                },
                TextElement {
                    byte_range: ByteRange { start: 18, end: 29 },
                    kind: "code".to_string(),
                    placeholder: Some("f()".to_string()),
                },
            ]
        );
        assert_eq!(elements[0].raw(text), Some("@File:[a.rs]"));
        assert_eq!(elements[1].raw(text), Some("@Code:[f()]"));
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn unknown_kind_stays_plain_text_in_release_builds() {
        let registry = TokenRegistry::with_defaults();
        let text = "say boo to @File:[a.rs]";
        let mut tokens: Vec<_> = registry.scan(text).collect();
        tokens.insert(
            0,
            MatchResult {
                kind: "ghost",
                start: 4,
                end: 7,
                raw: "boo",
                display: "boo",
            },
        );

        let composition = registry.splice(text, tokens);

        assert_eq!(composition.raw_text(), text);
        assert_eq!(
            composition.chips().map(Chip::kind).collect::<Vec<_>>(),
            vec!["file"]
        );
        assert_eq!(
            composition.segments().first(),
            Some(&Segment::Text("say boo to ".to_string()))
        );
    }

    #[test]
    fn line_styles_only_chip_spans() {
        let registry = TokenRegistry::with_defaults();
        let line = registry.compose("open @File:[lib.rs] now").to_line();

        assert_eq!(
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<Vec<_>>(),
            vec!["open ", "lib.rs", " now"]
        );
        assert_eq!(line.spans[0].style, ratatui::style::Style::default());
        assert_eq!(line.spans[1].style.bg, Some(ratatui::style::Color::Red));
    }
}
