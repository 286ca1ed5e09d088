// validators crate

mod commands;
mod scripts;

pub use commands::is_unix_command;
pub use scripts::validate_script_or_command;
