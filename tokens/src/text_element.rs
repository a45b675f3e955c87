use serde::Deserialize;
use serde::Serialize;

/// A chip attached to submitted text, described by where it sits in that
/// text rather than by a separate copy of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextElement {
    /// Byte range in the parent `text` buffer that this element occupies.
    pub byte_range: ByteRange,
    /// Kind of the pattern that recognized the element.
    pub kind: String,
    /// Optional human-readable placeholder for the element, displayed in the UI.
    pub placeholder: Option<String>,
}

impl TextElement {
    /// Raw text the element covers in `text`, if the range is valid for it.
    pub fn raw<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.byte_range.start..self.byte_range.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteRange {
    /// Start byte offset (inclusive) within the UTF-8 text buffer.
    pub start: usize,
    /// End byte offset (exclusive) within the UTF-8 text buffer.
    pub end: usize,
}

impl From<std::ops::Range<usize>> for ByteRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Text submitted from the input surface. `text` is always the plain logical
/// value; chips only appear as `text_elements` over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedMessage {
    pub text: String,
    #[serde(default)]
    pub text_elements: Vec<TextElement>,
}
