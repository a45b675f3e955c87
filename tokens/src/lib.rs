//! Recognition of inline context tokens such as `@File:[main.ts]` in chat
//! input, and their rendering as atomic chips.
//!
//! [`TokenRegistry::scan`] finds tokens, [`TokenRegistry::render`] turns one
//! into a [`Chip`], and [`TokenRegistry::compose`] splices chips into the
//! surrounding text. [`TokenInput`] keeps an editable buffer whose chip view
//! follows every edit.

mod chip;
mod composition;
pub mod config;
pub mod defaults;
mod error;
mod input;
mod pattern;
mod registry;
mod scan;
mod text_element;

pub use chip::Chip;
pub use composition::Composition;
pub use composition::Segment;
pub use config::PatternsFile;
pub use config::load_registry;
pub use error::ConfigError;
pub use error::PatternError;
pub use error::Result;
pub use input::TokenInput;
pub use pattern::ChipColor;
pub use pattern::PatternSpec;
pub use pattern::TokenPattern;
pub use pattern::VALUE_GROUP;
pub use registry::SharedRegistry;
pub use registry::TokenRegistry;
pub use scan::MatchResult;
pub use scan::Spans;
pub use text_element::ByteRange;
pub use text_element::SubmittedMessage;
pub use text_element::TextElement;
