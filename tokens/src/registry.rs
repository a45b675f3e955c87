use std::sync::Arc;
use std::sync::RwLock;

use tracing::warn;

use crate::defaults::default_pattern_specs;
use crate::error::PatternError;
use crate::error::Result;
use crate::pattern::PatternSpec;
use crate::pattern::TokenPattern;

/// Ordered set of token patterns. Earlier patterns win when candidate spans
/// overlap.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    patterns: Vec<TokenPattern>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in `file` and `code` patterns.
    pub fn with_defaults() -> Self {
        let (registry, errors) = Self::from_specs(default_pattern_specs());
        debug_assert!(errors.is_empty(), "built-in token patterns must be valid");
        registry
    }

    /// Builds a registry from specs in order, skipping any spec that fails
    /// validation. Rejected specs are logged and returned alongside the
    /// registry so callers can surface them.
    pub fn from_specs<I>(specs: I) -> (Self, Vec<PatternError>)
    where
        I: IntoIterator<Item = PatternSpec>,
    {
        let mut registry = Self::new();
        let mut errors = Vec::new();
        for spec in specs {
            if let Err(err) = registry.register_spec(&spec) {
                warn!("skipping token pattern: {err}");
                errors.push(err);
            }
        }
        (registry, errors)
    }

    /// Appends `pattern` at the lowest priority.
    pub fn register_pattern(&mut self, pattern: TokenPattern) -> Result<()> {
        if self.get(pattern.kind()).is_some() {
            return Err(PatternError::DuplicateKind {
                kind: pattern.kind().to_string(),
            });
        }
        self.patterns.push(pattern);
        Ok(())
    }

    pub fn register_spec(&mut self, spec: &PatternSpec) -> Result<()> {
        self.register_pattern(TokenPattern::from_spec(spec)?)
    }

    pub fn get(&self, kind: &str) -> Option<&TokenPattern> {
        self.patterns.iter().find(|pattern| pattern.kind() == kind)
    }

    pub fn patterns(&self) -> &[TokenPattern] {
        &self.patterns
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(TokenPattern::kind)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// A registry that can gain patterns at runtime while other threads scan.
///
/// Registration is copy-on-write: readers hold an `Arc` snapshot, so a scan
/// never sees a half-updated pattern list.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    current: RwLock<Arc<TokenRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: TokenRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    pub fn snapshot(&self) -> Arc<TokenRegistry> {
        match self.current.read() {
            Ok(current) => Arc::clone(&current),
            Err(err) => Arc::clone(&err.into_inner()),
        }
    }

    pub fn register_pattern(&self, pattern: TokenPattern) -> Result<()> {
        let mut current = match self.current.write() {
            Ok(current) => current,
            Err(err) => err.into_inner(),
        };
        let mut next = TokenRegistry::clone(&current);
        next.register_pattern(pattern)?;
        *current = Arc::new(next);
        Ok(())
    }
}

impl From<TokenRegistry> for SharedRegistry {
    fn from(registry: TokenRegistry) -> Self {
        Self::new(registry)
    }
}
