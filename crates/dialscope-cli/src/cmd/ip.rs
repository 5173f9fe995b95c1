//! Implementation of `dialscope ip <ADDR> [--response FILE|-]`.
//!
//! The HTTP fetch against the geolocation provider is deliberately outside
//! this binary (the engine treats the provider response as an opaque input).
//! Without `--response` the command validates the address and prints the
//! request URL to issue. With `--response` it decodes a saved response body
//! and renders the geolocation report.
//!
//! Exit codes:
//! - 0 = address valid; report rendered (or URL printed)
//! - 1 = malformed address, or the provider reported a lookup failure
//! - 2 = the response body could not be read or decoded
use dialscope_core::{IpApiConfig, IpQuery, IpResponseError, parse_ip_report, request_url};

use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, write_ip_report, write_note, write_request_url};
use crate::io::read_input;
use crate::{OutputFormat, PathOrStdin};

/// Runs the `ip` command.
///
/// # Errors
///
/// - [`CliError::InvalidIpAddress`] — the address argument is malformed.
/// - [`CliError::ResponseDecode`] — `--response` body is not provider JSON.
/// - [`CliError::ProviderFailure`] — the provider answered `status: "fail"`.
/// - I/O variants from reading the `--response` source.
pub fn run(
    address: &str,
    response: Option<&PathOrStdin>,
    format: &OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
    max_file_size: u64,
) -> Result<(), CliError> {
    let query = IpQuery::parse(address).map_err(|e| CliError::InvalidIpAddress {
        detail: e.to_string(),
    })?;

    let mode = match format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let fmt_config = FormatterConfig::from_flags(no_color, quiet, verbose);
    let url = request_url(&query, &IpApiConfig::default());

    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let Some(source) = response else {
        // No response body to decode: the useful output is the URL itself.
        return write_request_url(&mut out, &url, mode).map_err(|e| CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        });
    };

    write_note(&mut err_out, &format!("request url: {url}"), &fmt_config).map_err(|e| {
        CliError::IoError {
            source: "stderr".to_owned(),
            detail: e.to_string(),
        }
    })?;

    let body = read_input(source, max_file_size)?;
    let report = parse_ip_report(&body).map_err(|e| match e {
        IpResponseError::Decode { detail } => CliError::ResponseDecode { detail },
        IpResponseError::Provider { message } => CliError::ProviderFailure { message },
    })?;

    write_ip_report(&mut out, &report, mode).map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
