use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use sender_tokens::TextElement;
use sender_tokens::TokenRegistry;
use sender_tokens::load_registry;
use serde::Serialize;
use tracing::warn;

/// Arguments shared by the commands that recognize tokens in text.
#[derive(Debug, Parser, Clone)]
pub struct TextArgs {
    /// TOML file with additional token patterns.
    #[arg(short = 'p', long = "patterns", value_name = "PATH")]
    pub patterns: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Text to scan; multiple arguments are joined with spaces.
    #[arg(
        value_name = "TEXT",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub text: Vec<String>,
}

impl TextArgs {
    fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

/// Print the tokens found in the text as JSON spans.
#[derive(Debug, Parser, Clone)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: TextArgs,
}

impl ScanCommand {
    pub fn run(&self) -> Result<()> {
        let registry = registry_for(self.args.patterns.as_deref())?;
        println!("{}", scan_json(&registry, &self.args.joined_text(), self.args.pretty)?);
        Ok(())
    }
}

/// Print the text as it would be displayed, with the chips it contains.
#[derive(Debug, Parser, Clone)]
pub struct RenderCommand {
    #[command(flatten)]
    pub args: TextArgs,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let registry = registry_for(self.args.patterns.as_deref())?;
        println!(
            "{}",
            render_json(&registry, &self.args.joined_text(), self.args.pretty)?
        );
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct RenderedText {
    text: String,
    display_text: String,
    text_elements: Vec<TextElement>,
}

pub fn scan_json(registry: &TokenRegistry, text: &str, pretty: bool) -> Result<String> {
    let spans: Vec<_> = registry.scan(text).collect();
    to_json(&spans, pretty)
}

pub fn render_json(registry: &TokenRegistry, text: &str, pretty: bool) -> Result<String> {
    let composition = registry.compose(text);
    let rendered = RenderedText {
        text: composition.raw_text(),
        display_text: composition.display_text(),
        text_elements: composition.text_elements(),
    };
    to_json(&rendered, pretty)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).map_err(Into::into)
    } else {
        serde_json::to_string(value).map_err(Into::into)
    }
}

pub fn registry_for(patterns: Option<&Path>) -> Result<TokenRegistry> {
    let (registry, errors) = load_registry(patterns).with_context(|| match patterns {
        Some(path) => format!("failed to load token patterns from {}", path.display()),
        None => "failed to load built-in token patterns".to_string(),
    })?;
    for err in &errors {
        warn!("ignored token pattern: {err}");
    }
    Ok(registry)
}
