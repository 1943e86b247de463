//! File encryption CLI commands
//!
//! Encrypting a file writes its Base64 envelope to `<name>_encode.txt`;
//! decrypting reads such a text file and writes the recovered bytes to
//! `<name>_decode.txt`.

use std::path::PathBuf;

use clap::Subcommand;

use super::password::PasswordArgs;
use crate::config::Settings;
use crate::error::PasscryptResult;
use crate::storage::{artifact_path, read_envelope, read_payload, write_atomic, Direction};

/// Longest decrypted text echoed to the terminal
const PREVIEW_LIMIT: usize = 4096;

/// File encryption commands
#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// Encrypt a file into a Base64 envelope file
    #[command(alias = "enc")]
    Encrypt {
        /// File to encrypt
        path: PathBuf,
        #[command(flatten)]
        password: PasswordArgs,
        /// Artifact path (default: <name>_encode.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Don't echo the envelope
        #[arg(short, long)]
        quiet: bool,
    },

    /// Decrypt an envelope file back into the original bytes
    #[command(alias = "dec")]
    Decrypt {
        /// Text file holding the envelope
        path: PathBuf,
        #[command(flatten)]
        password: PasswordArgs,
        /// Artifact path (default: <name>_decode.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Don't echo a text preview
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Handle file commands
pub fn handle_file_command(settings: &Settings, cmd: FileCommands) -> PasscryptResult<()> {
    let codec = settings.codec();

    match cmd {
        FileCommands::Encrypt {
            path,
            password,
            output,
            quiet,
        } => {
            let data = read_payload(&path)?;
            let password = password.resolve(settings.trim_input)?;

            let sealed = codec.encrypt_bytes(&data, &password)?;
            let target = output.unwrap_or_else(|| {
                artifact_path(&path, Direction::Encode, settings.output_dir.as_deref())
            });
            write_atomic(&target, sealed.as_bytes())?;

            if !quiet {
                println!("{}", sealed);
            }
            eprintln!("Saved: {}", target.display());
            tracing::info!(bytes = data.len(), path = %target.display(), "file encrypted");
        }
        FileCommands::Decrypt {
            path,
            password,
            output,
            quiet,
        } => {
            let envelope = read_envelope(&path)?;
            let password = password.resolve(settings.trim_input)?;

            let plain = codec.decrypt_bytes(envelope.trim(), &password)?;
            let target = output.unwrap_or_else(|| {
                artifact_path(&path, Direction::Decode, settings.output_dir.as_deref())
            });
            write_atomic(&target, &plain)?;

            if !quiet {
                if let Some(preview) = text_preview(&plain) {
                    println!("{}", preview);
                }
            }
            eprintln!("Saved: {}", target.display());
            tracing::info!(bytes = plain.len(), path = %target.display(), "file decrypted");
        }
    }

    Ok(())
}

/// Decrypted bytes as text, when they are UTF-8 and short enough to show
fn text_preview(bytes: &[u8]) -> Option<&str> {
    if bytes.len() > PREVIEW_LIMIT {
        return None;
    }
    std::str::from_utf8(bytes).ok()
}
