use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vitalseal::cli::{Cli, Commands};

/// Environment variable holding the tracing filter (e.g. `debug`).
const LOG_ENV: &str = "VITALSEAL_LOG";

fn main() {
    // Diagnostics go to stderr; stdout is reserved for command results.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt {
            ref text,
            prompt_password,
        } => vitalseal::cli::commands::encrypt::execute(&cli, text.as_deref(), prompt_password),
        Commands::Decrypt {
            ref sealed,
            prompt_password,
        } => vitalseal::cli::commands::decrypt::execute(&cli, sealed.as_deref(), prompt_password),
        Commands::Validate {
            ref file,
            json,
            sanitize,
        } => vitalseal::cli::commands::validate::execute(&cli, file, json, sanitize),
        Commands::Sanitize { ref text, mode } => {
            vitalseal::cli::commands::sanitize::execute(&cli, text.as_deref(), mode)
        }
        Commands::CheckEmail { ref email } => vitalseal::cli::commands::check_email::execute(email),
        Commands::Completions { shell } => vitalseal::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        vitalseal::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
