//! `vitalseal validate` — check a JSON health profile against the
//! configured bounds and report every failing field.

use std::io::{self, Read};

use crate::cli::{load_settings, output, Cli};
use crate::errors::{Result, VitalSealError};
use crate::validation::HealthProfile;

/// Execute the `validate` command.
pub fn execute(cli: &Cli, file: &str, json: bool, sanitize: bool) -> Result<()> {
    let record = read_record(file)?;
    let validator = load_settings(cli)?.record_validator();

    let outcome = if sanitize {
        let (cleaned, outcome) = validator.prepare(&record);
        if cleaned.name != record.name {
            output::info("Name was sanitized before validation.");
        }
        outcome
    } else {
        validator.validate(&record)
    };

    if json {
        let rendered = serde_json::to_string_pretty(&outcome)
            .map_err(|e| VitalSealError::SerializationError(format!("JSON encode: {e}")))?;
        println!("{rendered}");
    } else {
        output::print_validation_report(&outcome);
    }

    if outcome.valid {
        Ok(())
    } else {
        Err(VitalSealError::RecordRejected(outcome.errors.len()))
    }
}

/// Parse a `HealthProfile` from a file path, or stdin when `path` is `-`.
fn read_record(path: &str) -> Result<HealthProfile> {
    let contents = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            VitalSealError::CommandFailed(format!("cannot read record '{path}': {e}"))
        })?
    };

    parse_record(&contents)
}

fn parse_record(contents: &str) -> Result<HealthProfile> {
    serde_json::from_str(contents)
        .map_err(|e| VitalSealError::SerializationError(format!("invalid record JSON: {e}")))
}
