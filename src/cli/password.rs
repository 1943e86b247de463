//! Password input for CLI commands

use clap::Args;

use crate::crypto::SecureString;
use crate::error::{PasscryptError, PasscryptResult};

/// Environment variable holding the password for non-interactive use
pub const PASSWORD_ENV: &str = "PASSCRYPT_PASSWORD";

/// Password source shared by all crypt commands
#[derive(Args, Debug, Clone, Default)]
pub struct PasswordArgs {
    /// Password (prompted for when omitted)
    #[arg(short, long, env = "PASSCRYPT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl PasswordArgs {
    /// Resolve the password from the flag/env or a hidden prompt
    pub fn resolve(&self, trim: bool) -> PasscryptResult<SecureString> {
        let raw = match &self.password {
            Some(p) => SecureString::new(p.as_str()),
            None => prompt_password("Password: ")?,
        };
        accept_password(raw, trim)
    }
}

/// Apply trimming and reject an empty password
pub fn accept_password(raw: SecureString, trim: bool) -> PasscryptResult<SecureString> {
    let password = if trim { raw.trimmed() } else { raw };

    if password.is_empty() {
        return Err(PasscryptError::empty("Password"));
    }
    Ok(password)
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> PasscryptResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::from)
        .map_err(|e| PasscryptError::Io(format!("Failed to read password: {}", e)))
}
