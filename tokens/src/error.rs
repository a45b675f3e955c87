use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

/// Reasons a token pattern is rejected at registration time.
///
/// Each of these is fatal to the offending pattern only; the rest of the
/// registry is unaffected.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("token pattern kind cannot be empty")]
    EmptyKind,
    #[error("invalid regex for token pattern `{kind}`: {source}")]
    InvalidRegex {
        kind: String,
        #[source]
        source: regex::Error,
    },
    #[error("token pattern `{kind}` has no capture group named `{group}`")]
    MissingValueGroup { kind: String, group: &'static str },
    #[error("token pattern `{kind}` matches empty text")]
    MatchesEmpty { kind: String },
    #[error("token pattern `{kind}` is already registered")]
    DuplicateKind { kind: String },
}

impl PatternError {
    /// Kind label of the rejected pattern, if it had a usable one.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::EmptyKind => None,
            Self::InvalidRegex { kind, .. }
            | Self::MissingValueGroup { kind, .. }
            | Self::MatchesEmpty { kind }
            | Self::DuplicateKind { kind } => Some(kind),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read token patterns at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse token patterns: {0}")]
    Parse(#[from] toml::de::Error),
}
