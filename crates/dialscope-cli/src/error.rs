/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `dialscope` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2** — input failure: the tool could not read or decode its
///   input at all (missing file, oversized stream, undecodable response
///   body, corrupt bundled data). These terminate before any domain logic.
/// - Exit code **1** — logical failure: the tool ran to completion and the
///   result is a well-defined negative (malformed number, malformed address,
///   provider-reported lookup failure).
use std::fmt;
use std::path::PathBuf;

use dialscope_core::ValidationFailure;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `dialscope` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// A provider response body could not be decoded as provider JSON.
    ResponseDecode {
        /// The underlying decode error message.
        detail: String,
    },

    /// The bundled lookup tables failed load-time validation.
    ///
    /// Cannot happen with shipped data; exists so curated-data regressions
    /// fail loudly at startup instead of producing wrong answers.
    TableData {
        /// The underlying load error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The supplied phone number failed structural validation.
    ///
    /// The failure detail has already been rendered; this variant exists so
    /// `main` can exit(1) cleanly.
    InvalidNumber {
        /// The structured validation failure.
        failure: ValidationFailure,
    },

    /// The supplied IP address is neither a literal address nor `me`.
    InvalidIpAddress {
        /// Description of the rejected input.
        detail: String,
    },

    /// The geolocation provider answered `status: "fail"`.
    ProviderFailure {
        /// The provider's failure message.
        message: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2` — input failure (file not found, undecodable body, etc.).
    /// - `1` — logical failure (invalid number/address, provider failure).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ResponseDecode { .. }
            | Self::TableData { .. } => 2,

            Self::InvalidNumber { .. }
            | Self::InvalidIpAddress { .. }
            | Self::ProviderFailure { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ResponseDecode { detail } => {
                format!("error: undecodable provider response: {detail}")
            }
            Self::TableData { detail } => {
                format!("error: bundled table data is invalid: {detail}")
            }
            Self::InvalidNumber { failure } => {
                format!("error: invalid phone number: {failure}")
            }
            Self::InvalidIpAddress { detail } => {
                format!("error: {detail}")
            }
            Self::ProviderFailure { message } => {
                format!("error: IP lookup failed: {message}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
