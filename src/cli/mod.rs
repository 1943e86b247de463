//! CLI command handlers
//!
//! This module bridges clap argument parsing with the crypto core. All
//! terminal I/O lives here; the core only sees bytes, strings and passwords.

pub mod file;
pub mod password;
pub mod text;

pub use file::{handle_file_command, FileCommands};
pub use password::PasswordArgs;
pub use text::{handle_text_command, TextCommands};
