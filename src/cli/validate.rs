//! Handler for the `validate` command.

use crate::analysis;
use crate::cli::{output, ValidateArgs};
use crate::error::{DatasetError, Result};
use crate::export;

/// Execute the validate command. Exits nonzero when any invariant fails.
pub fn execute(args: &ValidateArgs) -> Result<()> {
    let rows = export::read_rows(&args.file)?;
    let violations = analysis::check_rows(&rows);

    if violations.is_empty() {
        output::ok(&format!("{} rows, all invariants hold", rows.len()));
        return Ok(());
    }

    for violation in &violations {
        let location = violation
            .row
            .map_or_else(|| violation.campaign_id.clone(), |row| format!("row {row}"));
        output::error(&format!(
            "{location}: {} ({})",
            violation.rule, violation.detail
        ));
    }

    Err(DatasetError::InvariantViolations {
        count: violations.len(),
    }
    .into())
}
