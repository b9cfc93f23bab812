//! `vitalseal decrypt` — open a base64 sealed message.

use crate::cli::{load_settings, read_input, resolve_password, Cli};
use crate::errors::Result;

/// Execute the `decrypt` command.
pub fn execute(cli: &Cli, sealed: Option<&str>, prompt_password: bool) -> Result<()> {
    let sealed = read_input(sealed, "Sealed message", false)?;
    let codec = load_settings(cli)?.build_codec()?;
    let password = resolve_password(prompt_password)?;

    let plaintext = codec.decrypt(sealed.trim(), password.as_deref().map(String::as_str))?;
    println!("{plaintext}");

    Ok(())
}
