//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.  Status lines go to stderr
//! so that stdout carries only command results (sealed messages,
//! plaintext, sanitized text) and stays safe to pipe.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::validation::ValidationOutcome;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Render the failing fields of a validation outcome as a table.
pub fn validation_table(outcome: &ValidationOutcome) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Problem"]);

    for e in &outcome.errors {
        table.add_row(vec![e.field.key().to_string(), e.message.clone()]);
    }

    table
}

/// Print a validation report: a success line, or the table of problems.
pub fn print_validation_report(outcome: &ValidationOutcome) {
    if outcome.valid {
        success("Record is valid.");
        return;
    }

    println!("{}", validation_table(outcome));
    tip("Fix the fields above and run `vitalseal validate` again.");
}
