use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use passcrypt::cli::{handle_file_command, handle_text_command, FileCommands, TextCommands};
use passcrypt::config::{PasscryptPaths, Settings};

#[derive(Parser)]
#[command(
    name = "passcrypt",
    version,
    about = "Password-based encryption of text and files",
    long_about = "passcrypt encrypts text and small files with AES-256-CBC under a \
                  PBKDF2-derived key and prints portable Base64 envelopes that can \
                  be pasted anywhere and decrypted with the same password."
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt text
    #[command(subcommand)]
    Text(TextCommands),

    /// Encrypt or decrypt files
    #[command(subcommand)]
    File(FileCommands),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Some(Commands::Text(cmd)) => handle_text_command(&crypt_settings()?, cmd)?,
        Some(Commands::File(cmd)) => handle_file_command(&crypt_settings()?, cmd)?,
        Some(Commands::Init) => {
            let paths = PasscryptPaths::new()?;
            // init rewrites the file, so an unreadable one is replaced
            let settings = Settings::load_or_create(&paths).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "replacing unreadable settings with defaults");
                Settings::default()
            });
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let paths = PasscryptPaths::new()?;
            let settings = Settings::load_or_create(&paths)?;
            println!("passcrypt Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  KDF iterations: {}", settings.kdf_iterations);
            println!("  Trim input:     {}", settings.trim_input);
            match &settings.output_dir {
                Some(dir) => println!("  Output dir:     {}", dir.display()),
                None => println!("  Output dir:     (next to input)"),
            }
        }
        None => {
            println!("passcrypt - password-based encryption of text and files");
            println!();
            println!("Run 'passcrypt --help' for usage information.");
        }
    }

    Ok(())
}

/// Settings for text/file commands
///
/// Without a resolvable base directory there is no settings file to read,
/// so the defaults apply.
fn crypt_settings() -> Result<Settings> {
    let settings = match PasscryptPaths::new() {
        Ok(paths) => Settings::load_or_create(&paths)?,
        Err(e) => {
            tracing::warn!(error = %e, "no settings directory, using defaults");
            Settings::default()
        }
    };

    if !settings.codec().params().is_default() {
        tracing::warn!(
            iterations = settings.kdf_iterations,
            "non-default kdf_iterations: envelopes are not interoperable"
        );
    }
    Ok(settings)
}
