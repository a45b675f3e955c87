use anyhow::Result;
use clap::Parser;
use sender_cli::InitPromptCommand;
use sender_cli::RenderCommand;
use sender_cli::ScanCommand;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Recognize inline context tokens such as `@File:[main.ts]` in chat input.
#[derive(Parser)]
#[command(name = "sender-tokens")]
enum Cli {
    /// Print the tokens found in the text as JSON.
    Scan(ScanCommand),
    /// Print the displayed text and its chips as JSON.
    Render(RenderCommand),
    /// Print the prompt that seeds an agent-instructions file.
    InitPrompt(InitPromptCommand),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli {
        Cli::Scan(cmd) => cmd.run(),
        Cli::Render(cmd) => cmd.run(),
        Cli::InitPrompt(cmd) => cmd.run(),
    }
}

fn init_tracing() {
    // Users can control the log level with `RUST_LOG`.
    let default_level = "error";
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
