//! `vitalseal sanitize` — run free text through the sanitizers.

use crate::cli::{read_input, Cli, SanitizeMode};
use crate::errors::Result;
use crate::sanitize::{escape_html, strip_injection_tokens};

/// Execute the `sanitize` command.
pub fn execute(_cli: &Cli, text: Option<&str>, mode: SanitizeMode) -> Result<()> {
    let input = read_input(text, "Text to sanitize", false)?;
    println!("{}", apply(input.trim_end_matches(['\r', '\n']), mode));
    Ok(())
}

fn apply(text: &str, mode: SanitizeMode) -> String {
    match mode {
        SanitizeMode::Html => escape_html(text),
        SanitizeMode::Sql => strip_injection_tokens(text),
        // Strip first: escaping produces `;` inside every entity.
        SanitizeMode::All => escape_html(&strip_injection_tokens(text)),
    }
}
