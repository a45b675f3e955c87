use crate::pattern::ChipColor;
use crate::pattern::PatternSpec;

pub const FILE_KIND: &str = "file";
pub const CODE_KIND: &str = "code";

/// `@File:[path]`, shown as a red chip.
pub const FILE_PATTERN: &str = r"@File:\[(?<value>[^\]]+)\]";
/// `@Code:[snippet]`, shown as a green chip.
pub const CODE_PATTERN: &str = r"@Code:\[(?<value>[^\]]+)\]";

pub fn default_pattern_specs() -> Vec<PatternSpec> {
    vec![
        PatternSpec::new(FILE_KIND, FILE_PATTERN, ChipColor::Red),
        PatternSpec::new(CODE_KIND, CODE_PATTERN, ChipColor::Green),
    ]
}
