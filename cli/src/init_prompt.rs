use anyhow::Result;
use clap::Parser;
use sender_utils_template::TemplateError;
use sender_utils_template::render;

const INIT_PROMPT_TEMPLATE: &str = include_str!("../prompt_for_init_command.md");

pub const DEFAULT_PRODUCT_NAME: &str = "AGENTS";

/// Prompt asking an agent to write `<product_name>.md` instructions for the
/// current repository.
pub fn init_prompt(product_name: &str) -> Result<String, TemplateError> {
    render(INIT_PROMPT_TEMPLATE, &[("PRODUCT_NAME", product_name)])
}

/// Print the prompt that seeds an agent-instructions file.
#[derive(Debug, Parser, Clone)]
pub struct InitPromptCommand {
    /// Base name of the instructions file the agent should create.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PRODUCT_NAME)]
    pub product_name: String,
}

impl InitPromptCommand {
    pub fn run(&self) -> Result<()> {
        print!("{}", init_prompt(&self.product_name)?);
        Ok(())
    }
}
