//! Minimal `${NAME}` interpolation for prompt templates.
//!
//! `$$` produces a literal `$`. A `$` not followed by `{` or `$` is kept as is.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unterminated placeholder starting at byte {offset}")]
    Unterminated { offset: usize },
    #[error("empty placeholder at byte {offset}")]
    EmptyName { offset: usize },
    #[error("no value provided for placeholder `{name}`")]
    MissingVariable { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Variable(String),
}

/// A parsed template, reusable across renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut rest = source;
        let mut offset = 0usize;

        while let Some(idx) = rest.find('$') {
            literal.push_str(&rest[..idx]);
            let after = &rest[idx + 1..];
            if let Some(tail) = after.strip_prefix('$') {
                literal.push('$');
                offset += idx + 2;
                rest = tail;
            } else if let Some(tail) = after.strip_prefix('{') {
                let start = offset + idx;
                let Some(close) = tail.find('}') else {
                    return Err(TemplateError::Unterminated { offset: start });
                };
                let name = tail[..close].trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyName { offset: start });
                }
                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(Piece::Variable(name.to_string()));
                offset += idx + 2 + close + 1;
                rest = &tail[close + 1..];
            } else {
                literal.push('$');
                offset += idx + 1;
                rest = after;
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self { pieces })
    }

    /// Names referenced by the template, in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for piece in &self.pieces {
            if let Piece::Variable(name) = piece
                && !names.contains(&name.as_str())
            {
                names.push(name);
            }
        }
        names
    }

    pub fn render(&self, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Variable(name) => {
                    let Some((_, value)) = vars.iter().find(|(key, _)| key == name) else {
                        return Err(TemplateError::MissingVariable { name: name.clone() });
                    };
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

/// Parses and renders `source` in one step.
pub fn render(source: &str, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
    Template::parse(source)?.render(vars)
}
