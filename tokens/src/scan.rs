use std::iter::FusedIterator;
use std::ops::Range;

use serde::Serialize;
use tracing::trace;

use crate::pattern::VALUE_GROUP;
use crate::registry::TokenRegistry;

/// One recognized token within a scanned buffer.
///
/// `start..end` is a byte range into the scanned text and `raw` is exactly
/// that slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    pub kind: &'a str,
    pub start: usize,
    pub end: usize,
    pub raw: &'a str,
    pub display: &'a str,
}

impl MatchResult<'_> {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Non-overlapping matches of one scan, in text order.
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    inner: std::vec::IntoIter<MatchResult<'a>>,
}

impl<'a> Iterator for Spans<'a> {
    type Item = MatchResult<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Spans<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Spans<'_> {}

impl FusedIterator for Spans<'_> {}

impl TokenRegistry {
    /// Finds every token in `text`.
    ///
    /// Patterns are tried in registration order. Once a pattern claims a
    /// span, later patterns only search the unclaimed text around it, each
    /// gap on its own, the same way a chip splits the surrounding text in the
    /// editor. The earlier pattern therefore always wins a contested range
    /// without hiding tokens that sit next to it.
    pub fn scan<'a>(&'a self, text: &'a str) -> Spans<'a> {
        let mut claimed: Vec<MatchResult<'a>> = Vec::new();

        for pattern in self.patterns() {
            let mut found = Vec::new();
            for gap in unclaimed_gaps(&claimed, text.len()) {
                let offset = gap.start;
                for captures in pattern.regex().captures_iter(&text[gap]) {
                    let Some(whole) = captures.get(0) else {
                        continue;
                    };
                    if whole.is_empty() {
                        trace!(
                            kind = pattern.kind(),
                            at = offset + whole.start(),
                            "ignoring empty match"
                        );
                        continue;
                    }

                    let display = captures
                        .name(VALUE_GROUP)
                        .map_or("", |value| value.as_str());
                    found.push(MatchResult {
                        kind: pattern.kind(),
                        start: offset + whole.start(),
                        end: offset + whole.end(),
                        raw: whole.as_str(),
                        display,
                    });
                }
            }
            claimed.extend(found);
            claimed.sort_by_key(|span| span.start);
        }

        trace!(
            patterns = self.len(),
            spans = claimed.len(),
            "scanned text for inline tokens"
        );
        Spans {
            inner: claimed.into_iter(),
        }
    }
}

/// Byte ranges of `0..len` not covered by `claimed`, which must be sorted and
/// non-overlapping.
fn unclaimed_gaps(claimed: &[MatchResult<'_>], len: usize) -> Vec<Range<usize>> {
    let mut gaps = Vec::new();
    let mut cursor = 0usize;
    for span in claimed {
        if span.start > cursor {
            gaps.push(cursor..span.start);
        }
        cursor = span.end;
    }
    if cursor < len {
        gaps.push(cursor..len);
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::ChipColor;
    use crate::pattern::PatternSpec;
    use pretty_assertions::assert_eq;

    fn registry(specs: &[(&str, &str)]) -> TokenRegistry {
        let (registry, errors) = TokenRegistry::from_specs(
            specs
                .iter()
                .map(|(kind, regex)| PatternSpec::new(*kind, *regex, ChipColor::Gray)),
        );
        assert!(errors.is_empty(), "unexpected pattern errors: {errors:?}");
        registry
    }

    #[test]
    fn finds_file_and_code_tokens_in_order() {
        let registry = TokenRegistry::with_defaults();
        let spans: Vec<_> = registry
            .scan("Look at @File:[main.ts] and @Code:[run()]")
            .collect();

        assert_eq!(
            spans,
            vec![
                MatchResult {
                    kind: "file",
                    start: 8,
                    end: 23,
                    raw: "@File:[main.ts]",
                    display: "main.ts",
                },
                MatchResult {
                    kind: "code",
                    start: 28,
                    end: 41,
                    raw: "@Code:[run()]",
                    display: "run()",
                },
            ]
        );
    }

    #[test]
    fn text_without_tokens_yields_nothing() {
        let registry = TokenRegistry::with_defaults();
        assert_eq!(registry.scan("no tokens here").count(), 0);
        assert_eq!(registry.scan("").count(), 0);
    }

    #[test]
    fn empty_registry_yields_nothing() {
        let registry = TokenRegistry::new();
        assert_eq!(registry.scan("@File:[main.ts]").count(), 0);
    }

    #[test]
    fn earlier_pattern_wins_overlapping_range() {
        let registry = registry(&[
            ("path", r"@(?<value>[\w./]+)"),
            ("word", r"(?<value>\w+)\.rs"),
        ]);

        let spans: Vec<_> = registry.scan("see @src/lib.rs and main.rs").collect();

        assert_eq!(
            spans.iter().map(|span| (span.kind, span.raw)).collect::<Vec<_>>(),
            vec![("path", "@src/lib.rs"), ("word", "main.rs")]
        );
    }

    #[test]
    fn priority_follows_registration_not_position() {
        let registry = registry(&[
            ("inner", r"\[(?<value>[^\]]+)\]"),
            ("outer", r"@File:\[(?<value>[^\]]+)\]"),
        ]);

        let spans: Vec<_> = registry.scan("@File:[a.rs]").collect();

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, "inner");
        assert_eq!(spans[0].raw, "[a.rs]");
        assert_eq!(spans[0].range(), 6..12);
    }

    #[test]
    fn later_pattern_fills_gaps_between_claimed_spans() {
        let registry = registry(&[
            ("file", r"@File:\[(?<value>[^\]]+)\]"),
            ("mention", r"@(?<value>\w+)"),
        ]);

        let spans: Vec<_> = registry.scan("@alice @File:[x] @bob").collect();

        assert_eq!(
            spans.iter().map(|span| (span.kind, span.raw)).collect::<Vec<_>>(),
            vec![
                ("mention", "@alice"),
                ("file", "@File:[x]"),
                ("mention", "@bob"),
            ]
        );
    }

    #[test]
    fn claimed_span_does_not_hide_adjacent_tokens() {
        let registry = registry(&[
            ("file", r"@File:\[(?<value>[^\]]+)\]"),
            ("mention", r"@(?<value>\S+)"),
        ]);

        let spans: Vec<_> = registry.scan("@File:[a.rs]@bob and @carol").collect();

        assert_eq!(
            spans.iter().map(|span| (span.kind, span.raw)).collect::<Vec<_>>(),
            vec![
                ("file", "@File:[a.rs]"),
                ("mention", "@bob"),
                ("mention", "@carol"),
            ]
        );
        assert_eq!(spans[1].range(), 12..16);
    }

    #[test]
    fn later_candidate_running_into_claimed_span_is_cut_at_its_edge() {
        let registry = registry(&[
            ("file", r"@File:\[(?<value>[^\]]+)\]"),
            ("mention", r"@(?<value>\S+)"),
        ]);

        let spans: Vec<_> = registry.scan("@bob@File:[a.rs] done").collect();

        assert_eq!(
            spans.iter().map(|span| (span.kind, span.raw)).collect::<Vec<_>>(),
            vec![("mention", "@bob"), ("file", "@File:[a.rs]")]
        );
    }

    #[test]
    fn zero_width_matches_are_skipped() {
        let leading = registry(&[("word", r"\b(?<value>\w*)")]);

        let spans: Vec<_> = leading.scan("hi there").collect();

        assert!(spans.iter().all(|span| span.start < span.end));
        assert_eq!(
            spans.iter().map(|span| span.raw).collect::<Vec<_>>(),
            vec!["hi", "there"]
        );

        // Matches empty at 3 and 5, away from any previous match end.
        let trailing = registry(&[("word", r"(?<value>[a-z]*)\b")]);

        let spans: Vec<_> = trailing.scan("hi 42 there").collect();

        assert!(spans.iter().all(|span| span.start < span.end));
        assert_eq!(
            spans.iter().map(MatchResult::range).collect::<Vec<_>>(),
            vec![0..2, 6..11]
        );
    }

    #[test]
    fn optional_value_group_yields_empty_display() {
        let registry = registry(&[("tag", r"#(?<value>\d+)?!")]);

        let spans: Vec<_> = registry.scan("#! and #12!").collect();

        assert_eq!(
            spans.iter().map(|span| (span.raw, span.display)).collect::<Vec<_>>(),
            vec![("#!", ""), ("#12!", "12")]
        );
    }

    #[test]
    fn byte_ranges_respect_multibyte_text() {
        let registry = TokenRegistry::with_defaults();
        let text = "看看 @File:[文件.rs] 吧";

        let span = registry.scan(text).next().expect("one span");

        assert_eq!(&text[span.range()], "@File:[文件.rs]");
        assert_eq!(span.start, "看看 ".len());
        assert_eq!(span.display, "文件.rs");
    }

    #[test]
    fn scanning_is_repeatable() {
        let registry = TokenRegistry::with_defaults();
        let text = "@Code:[a] @File:[b] @Code:[c]";

        let first: Vec<_> = registry.scan(text).collect();
        let second: Vec<_> = registry.scan(text).collect();

        assert_eq!(first, second);
        assert_eq!(registry.scan(text).len(), 3);
    }

    #[test]
    fn unterminated_token_is_left_alone() {
        let registry = TokenRegistry::with_defaults();
        assert_eq!(registry.scan("@File:[main.ts").count(), 0);
        assert_eq!(registry.scan("@Code:[]").count(), 0);
    }
}
