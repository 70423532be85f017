//! External tool invocation with merged output capture

pub mod command;
pub mod output;

pub use command::ToolCommand;
pub use output::ProcessOutput;
