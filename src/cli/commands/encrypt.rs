//! `vitalseal encrypt` — seal text into a base64 message.

use crate::cli::{load_settings, output, read_input, resolve_password, Cli};
use crate::errors::Result;

/// Execute the `encrypt` command.
pub fn execute(cli: &Cli, text: Option<&str>, prompt_password: bool) -> Result<()> {
    if text.is_some() {
        output::warning("Text provided on command line — it may appear in shell history.");
    }

    let plaintext = read_input(text, "Text to encrypt", true)?;
    let codec = load_settings(cli)?.build_codec()?;
    let password = resolve_password(prompt_password)?;

    let sealed = codec.encrypt(&plaintext, password.as_deref().map(String::as_str))?;
    println!("{sealed}");

    Ok(())
}
