pub mod init_prompt;
pub mod scan_command;

pub use init_prompt::InitPromptCommand;
pub use init_prompt::init_prompt;
pub use scan_command::RenderCommand;
pub use scan_command::ScanCommand;
