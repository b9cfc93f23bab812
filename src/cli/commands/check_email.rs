//! `vitalseal check-email` — syntactic email address check.

use crate::cli::output;
use crate::errors::{Result, VitalSealError};
use crate::validation::email_format;

/// Execute the `check-email` command.
pub fn execute(email: &str) -> Result<()> {
    if email_format(email) {
        output::success(&format!("'{email}' is a well-formed address"));
        Ok(())
    } else {
        Err(VitalSealError::CommandFailed(format!(
            "'{email}' is not a well-formed email address"
        )))
    }
}
