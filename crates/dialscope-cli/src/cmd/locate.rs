//! Implementation of `dialscope locate <NUMBER>`.
//!
//! Normalizes, validates, and classifies a phone number against the bundled
//! tables, writing the report to stdout. Unknown locality/operator is a
//! successful outcome; only structural validation failures exit non-zero.
//!
//! Exit codes:
//! - 0 = classified (including unknown locality/operator)
//! - 1 = the number failed validation
//! - 2 = bundled table data failed to load (data regression)
use dialscope_core::{DialPlan, Tables, classify};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{
    FormatMode, FormatterConfig, write_note, write_phone_report, write_validation_failure,
};

/// Runs the `locate` command.
///
/// # Errors
///
/// - [`CliError::TableData`] — the bundled tables failed load validation.
/// - [`CliError::InvalidNumber`] — the number failed structural validation
///   (the failure detail is rendered to stderr before returning).
pub fn run(
    number: &str,
    format: &OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
) -> Result<(), CliError> {
    let tables = Tables::bundled().map_err(|e| CliError::TableData {
        detail: e.to_string(),
    })?;
    let plan = DialPlan::india();

    let mode = match format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let fmt_config = FormatterConfig::from_flags(no_color, quiet, verbose);

    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();

    let stats = tables.stats();
    write_note(
        &mut err_out,
        &format!(
            "tables: {} std codes, {} operator bands",
            stats.std_codes, stats.operator_prefixes
        ),
        &fmt_config,
    )
    .map_err(|e| stderr_io_error(&e))?;

    match classify(number, &tables, &plan) {
        Ok(result) => {
            if let Some(m) = &result.locality {
                write_note(
                    &mut err_out,
                    &format!("locality matched at {}-digit specificity", m.prefix_len()),
                    &fmt_config,
                )
                .map_err(|e| stderr_io_error(&e))?;
            }

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_phone_report(&mut out, &result, mode).map_err(|e| CliError::IoError {
                source: "stdout".to_owned(),
                detail: e.to_string(),
            })?;
            Ok(())
        }
        Err(failure) => {
            write_validation_failure(&mut err_out, &failure, mode, &fmt_config)
                .map_err(|e| stderr_io_error(&e))?;
            Err(CliError::InvalidNumber { failure })
        }
    }
}

fn stderr_io_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stderr".to_owned(),
        detail: e.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn run_valid_mobile_number_returns_ok() {
        let result = run("+91 98765 43210", &OutputFormat::Human, true, false, true);
        assert!(result.is_ok(), "expected Ok: {result:?}");
    }

    #[test]
    fn run_valid_landline_returns_ok() {
        let result = run("022-12345678", &OutputFormat::Json, true, false, true);
        assert!(result.is_ok(), "expected Ok: {result:?}");
    }

    #[test]
    fn run_unknown_prefixes_still_ok() {
        let result = run("5512345678", &OutputFormat::Human, true, false, true);
        assert!(result.is_ok(), "unknown locality is not a failure");
    }

    #[test]
    fn run_short_number_is_invalid_number_exit_1() {
        let err = run("12345", &OutputFormat::Human, true, false, true).expect_err("should fail");
        assert_eq!(err.exit_code(), 1);
        match err {
            CliError::InvalidNumber { .. } => {}
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn run_leading_zero_after_cc_strip_is_invalid() {
        let err =
            run("+910987654321", &OutputFormat::Human, true, false, true).expect_err("should fail");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn run_json_mode_invalid_number_still_exit_1() {
        let err = run("garbage", &OutputFormat::Json, true, false, true).expect_err("should fail");
        assert_eq!(err.exit_code(), 1);
    }
}
