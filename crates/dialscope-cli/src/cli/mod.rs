//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits labeled, optionally colored lines. `Json` emits a single
/// structured JSON object per command on stdout.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// All top-level subcommands exposed by the `dialscope` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a phone number against the bundled STD and operator tables.
    Locate {
        /// The number to classify, in any common spelling
        /// (+919876543210, 098765 43210, (022) 1234-5678, ...).
        #[arg(value_name = "NUMBER")]
        number: String,
    },

    /// Validate an IP address and build or decode a geolocation lookup.
    ///
    /// Without `--response` the command prints the provider request URL for
    /// the address. With `--response` it decodes a saved provider JSON body
    /// and renders the geolocation report — the HTTP fetch itself is the
    /// caller's business.
    Ip {
        /// IPv4 or IPv6 address, or `me` for a self-lookup.
        #[arg(value_name = "ADDR")]
        address: String,
        /// Path to a saved provider response body, or `-` for stdin.
        #[arg(long, value_name = "FILE")]
        response: Option<PathOrStdin>,
    },

    /// Print summary statistics for the bundled lookup tables.
    Inspect,
}

/// Root CLI struct for the `dialscope` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Debug, Parser)]
#[command(
    name = "dialscope",
    version,
    about = "Phone number and IP locator",
    long_about = "Classifies phone numbers against static STD-code and operator tables\n\
                  and decodes IP geolocation provider responses."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: table counts, matched prefix detail
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum `--response` input size in bytes.
    ///
    /// Can also be set via the `DIALSCOPE_MAX_FILE_SIZE` environment
    /// variable. The CLI flag takes precedence. Default: 1048576 (1 MB).
    #[arg(
        long,
        global = true,
        env = "DIALSCOPE_MAX_FILE_SIZE",
        default_value = "1048576"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
