//! Configuration module for passcrypt
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PasscryptPaths;
pub use settings::Settings;
