//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};

use clap::{Parser, ValueEnum};
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, VitalSealError};

/// Environment variable checked first for the sealing password.
pub const PASSWORD_ENV: &str = "VITALSEAL_PASSWORD";

/// VitalSeal CLI: seal and validate sensitive health profile data.
#[derive(Parser)]
#[command(
    name = "vitalseal",
    about = "Seal sensitive text and validate health profile records",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing .vitalseal.toml (default: current directory)
    #[arg(long, global = true)]
    pub config_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt text into a base64 sealed message
    Encrypt {
        /// Text to seal (omit to read stdin or prompt)
        text: Option<String>,
        /// Ask for the password interactively
        #[arg(long)]
        prompt_password: bool,
    },

    /// Decrypt a base64 sealed message
    Decrypt {
        /// Sealed message (omit to read stdin or prompt)
        sealed: Option<String>,
        /// Ask for the password interactively
        #[arg(long)]
        prompt_password: bool,
    },

    /// Validate a health profile record (JSON)
    Validate {
        /// Path to the JSON record, or `-` for stdin
        file: String,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
        /// Strip injection tokens from free-text fields before validating
        #[arg(long)]
        sanitize: bool,
    },

    /// Neutralize HTML and SQL control characters in free text
    Sanitize {
        /// Text to sanitize (omit to read stdin)
        text: Option<String>,
        /// Which filter to apply
        #[arg(short, long, value_enum, default_value = "all")]
        mode: SanitizeMode,
    },

    /// Check that an email address is well-formed
    CheckEmail {
        /// Address to check
        email: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Filters offered by `vitalseal sanitize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SanitizeMode {
    /// Escape HTML special characters
    Html,
    /// Strip SQL control tokens
    Sql,
    /// Strip SQL tokens, then escape HTML
    All,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load `.vitalseal.toml` from `--config-dir` or the current directory.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let dir = match &cli.config_dir {
        Some(dir) => std::path::PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    Settings::load(&dir)
}

/// Get the sealing password, trying in order:
/// 1. `VITALSEAL_PASSWORD` env var (CI/CD)
/// 2. Interactive prompt, if `interactive` is set
/// 3. `None`, meaning "use the configured default password"
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn resolve_password(interactive: bool) -> Result<Option<Zeroizing<String>>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Some(Zeroizing::new(pw)));
        }
    }

    if interactive {
        let pw = dialoguer::Password::new()
            .with_prompt("Enter password")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| VitalSealError::CommandFailed(format!("password prompt: {e}")))?;
        return Ok(Some(Zeroizing::new(pw)));
    }

    output::warning(&format!(
        "No password given — using the configured default. Set {PASSWORD_ENV} or pass --prompt-password."
    ));
    Ok(None)
}

/// Read a command's text input from one of three sources:
/// the argument, piped stdin, or an interactive prompt.
///
/// Piped stdin is returned byte for byte, trailing newlines included;
/// callers that want them gone trim for themselves.
/// `hidden` masks the prompt input (for plaintext that is itself sensitive).
pub fn read_input(arg: Option<&str>, prompt: &str, hidden: bool) -> Result<Zeroizing<String>> {
    if let Some(v) = arg {
        return Ok(Zeroizing::new(v.to_string()));
    }

    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    let value = if hidden {
        dialoguer::Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
    } else {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
    }
    .map_err(|e| VitalSealError::CommandFailed(format!("input prompt: {e}")))?;

    Ok(Zeroizing::new(value))
}
