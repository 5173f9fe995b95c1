//! Implementation of `dialscope inspect`.
//!
//! Prints summary statistics for the bundled lookup tables: STD code counts
//! (total and per digit length), distinct circles, and operator band count.
//!
//! Exit codes:
//! - 0 = statistics printed
//! - 2 = bundled table data failed to load (data regression)
use dialscope_core::Tables;

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatMode, write_stats};

/// Runs the `inspect` command.
///
/// # Errors
///
/// - [`CliError::TableData`] — the bundled tables failed load validation.
pub fn run(format: &OutputFormat) -> Result<(), CliError> {
    let tables = Tables::bundled().map_err(|e| CliError::TableData {
        detail: e.to_string(),
    })?;

    let mode = match format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_stats(&mut out, &tables.stats(), mode).map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_human_mode_is_ok() {
        assert!(run(&OutputFormat::Human).is_ok());
    }

    #[test]
    fn run_json_mode_is_ok() {
        assert!(run(&OutputFormat::Json).is_ok());
    }
}
