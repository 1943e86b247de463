//! Text encryption CLI commands
//!
//! Text comes from the argument or stdin; results go to stdout and,
//! with `--save`, to `text_encode.txt` / `text_decode.txt`.

use std::io::Read;
use std::path::PathBuf;

use clap::Subcommand;

use super::password::PasswordArgs;
use crate::config::Settings;
use crate::error::{PasscryptError, PasscryptResult};
use crate::storage::{text_artifact_path, write_atomic, Direction};

/// Text encryption commands
#[derive(Subcommand, Debug)]
pub enum TextCommands {
    /// Encrypt text into a Base64 envelope
    #[command(alias = "enc")]
    Encrypt {
        /// Text to encrypt (read from stdin when omitted)
        text: Option<String>,
        #[command(flatten)]
        password: PasswordArgs,
        /// Also write the result to text_encode.txt
        #[arg(short, long)]
        save: bool,
        /// Write the result to this path (implies --save)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decrypt a Base64 envelope back into text
    #[command(alias = "dec")]
    Decrypt {
        /// Envelope to decrypt (read from stdin when omitted)
        envelope: Option<String>,
        #[command(flatten)]
        password: PasswordArgs,
        /// Also write the result to text_decode.txt
        #[arg(short, long)]
        save: bool,
        /// Write the result to this path (implies --save)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle text commands
pub fn handle_text_command(settings: &Settings, cmd: TextCommands) -> PasscryptResult<()> {
    let codec = settings.codec();

    match cmd {
        TextCommands::Encrypt {
            text,
            password,
            save,
            output,
        } => {
            let text = read_text(text, settings.trim_input)?;
            let password = password.resolve(settings.trim_input)?;

            let sealed = codec.encrypt_text(&text, &password)?;
            println!("{}", sealed);

            if let Some(path) = save_target(save, output, Direction::Encode, settings) {
                write_atomic(&path, sealed.as_bytes())?;
                eprintln!("Saved: {}", path.display());
            }
            tracing::info!(chars = text.chars().count(), "text encrypted");
        }
        TextCommands::Decrypt {
            envelope,
            password,
            save,
            output,
        } => {
            let envelope = read_text(envelope, settings.trim_input)?;
            let password = password.resolve(settings.trim_input)?;

            let plain = codec.decrypt_text(&envelope, &password)?;
            println!("{}", plain);

            if let Some(path) = save_target(save, output, Direction::Decode, settings) {
                write_atomic(&path, plain.as_bytes())?;
                eprintln!("Saved: {}", path.display());
            }
            tracing::info!("text decrypted");
        }
    }

    Ok(())
}

/// Take the text argument or read all of stdin
fn read_text(arg: Option<String>, trim: bool) -> PasscryptResult<String> {
    let raw = match arg {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| PasscryptError::Io(format!("Failed to read stdin: {}", e)))?;
            buf
        }
    };
    normalize_text(raw, trim)
}

fn normalize_text(raw: String, trim: bool) -> PasscryptResult<String> {
    let text = if trim { raw.trim().to_string() } else { raw };

    if text.is_empty() {
        return Err(PasscryptError::empty("Text"));
    }
    Ok(text)
}

fn save_target(
    save: bool,
    output: Option<PathBuf>,
    direction: Direction,
    settings: &Settings,
) -> Option<PathBuf> {
    match output {
        Some(path) => Some(path),
        None if save => Some(text_artifact_path(direction, settings.output_dir.as_deref())),
        None => None,
    }
}
