/// Report formatting: human-readable and JSON modes.
///
/// This module implements the two output strategies for classification and
/// geolocation reports:
///
/// - **Human mode** (default): labeled `key: value` lines to stdout, one
///   field per line, `unknown`/`n/a` placeholders where a lookup had no
///   match. Failure lines go to stderr, colored red when color is enabled.
///   Colors are disabled when `--no-color` is set, the `NO_COLOR`
///   environment variable is present (per <https://no-color.org>), or the
///   stream is not a TTY.
/// - **JSON mode**: one structured JSON object per command on stdout;
///   failures are a single JSON object on stderr.
use std::io::{IsTerminal as _, Write};

use dialscope_core::{
    ClassificationResult, IpReport, MapsConfig, MarkerColor, TableStats, ValidationFailure,
    osm_url, static_map_url,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
///
/// Colors are disabled when any of the following conditions hold:
/// - `no_color_flag` is `true` (the `--no-color` CLI flag was passed).
/// - The `NO_COLOR` environment variable is present (any value).
/// - stderr is not a TTY (e.g. the output is piped to a file).
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatMode / FormatterConfig
// ---------------------------------------------------------------------------

/// Which output strategy is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Labeled human-readable lines.
    Human,
    /// Structured JSON objects.
    Json,
}

/// Configuration for the report formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress all non-error stderr output.
    pub quiet: bool,
    /// Emit table counts and match detail to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    ///
    /// `no_color_flag` is the `--no-color` boolean. Color detection also
    /// checks the `NO_COLOR` env var and the stderr TTY state.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// Phone reports
// ---------------------------------------------------------------------------

/// Writes a classification result in the requested mode.
///
/// Human mode prints one labeled line per field; lookups without a match
/// render as `unknown` (or `n/a` for the STD code, which has no value to
/// show). JSON mode emits the serialized result with the map URL attached
/// when coordinates are available.
pub fn write_phone_report(
    out: &mut dyn Write,
    result: &ClassificationResult,
    mode: FormatMode,
) -> std::io::Result<()> {
    let map_url = result.geo.map(osm_url);

    match mode {
        FormatMode::Human => {
            writeln!(out, "number:     {}", result.display.international)?;
            writeln!(out, "e164:       {}", result.display.e164)?;
            writeln!(out, "national:   {}", result.display.national)?;
            writeln!(out, "type:       {}", result.class.label())?;
            match &result.operator {
                Some(m) => writeln!(out, "operator:   {} (band {})", m.operator, m.prefix)?,
                None => writeln!(out, "operator:   unknown")?,
            }
            match &result.locality {
                Some(m) => {
                    writeln!(out, "city:       {}", m.locality.city)?;
                    writeln!(out, "state:      {}", m.locality.state)?;
                    writeln!(out, "circle:     {}", m.locality.circle)?;
                    writeln!(out, "std code:   {}", m.code)?;
                }
                None => {
                    writeln!(out, "city:       unknown")?;
                    writeln!(out, "state:      unknown")?;
                    writeln!(out, "circle:     unknown")?;
                    writeln!(out, "std code:   n/a")?;
                }
            }
            if let Some(geo) = result.geo {
                writeln!(out, "coords:     {}, {}", geo.lat, geo.lon)?;
            }
            if let Some(url) = map_url {
                writeln!(out, "map:        {url}")?;
            }
            Ok(())
        }
        FormatMode::Json => {
            let value = json!({
                "type": "phone",
                "result": result,
                "map_url": map_url,
            });
            writeln!(out, "{value}")
        }
    }
}

/// Writes a phone validation failure in the requested mode.
pub fn write_validation_failure(
    out: &mut dyn Write,
    failure: &ValidationFailure,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => {
            if config.colors {
                writeln!(out, "{ANSI_RED}invalid number:{ANSI_RESET} {failure}")
            } else {
                writeln!(out, "invalid number: {failure}")
            }
        }
        FormatMode::Json => {
            let value = json!({ "type": "phone", "error": failure });
            writeln!(out, "{value}")
        }
    }
}

// ---------------------------------------------------------------------------
// IP reports
// ---------------------------------------------------------------------------

/// Writes the provider request URL in the requested mode.
pub fn write_request_url(out: &mut dyn Write, url: &str, mode: FormatMode) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => writeln!(out, "request:    {url}"),
        FormatMode::Json => {
            let value = json!({ "type": "ip", "request_url": url });
            writeln!(out, "{value}")
        }
    }
}

/// Writes a decoded geolocation report in the requested mode.
pub fn write_ip_report(
    out: &mut dyn Write,
    report: &IpReport,
    mode: FormatMode,
) -> std::io::Result<()> {
    let map_url = report
        .geo
        .map(|geo| static_map_url(geo, MarkerColor::Blue, &MapsConfig::default()));

    match mode {
        FormatMode::Human => {
            let unknown = "unknown";
            writeln!(out, "ip:         {}", report.query)?;
            writeln!(
                out,
                "hostname:   {}",
                report.hostname.as_deref().unwrap_or("n/a")
            )?;
            writeln!(
                out,
                "location:   {}, {}, {}",
                report.city.as_deref().unwrap_or(unknown),
                report.region.as_deref().unwrap_or(unknown),
                report.country.as_deref().unwrap_or(unknown),
            )?;
            writeln!(
                out,
                "zip:        {}",
                report.zip.as_deref().unwrap_or("n/a")
            )?;
            if let Some(geo) = report.geo {
                writeln!(out, "coords:     {}, {}", geo.lat, geo.lon)?;
            }
            writeln!(
                out,
                "timezone:   {}",
                report.timezone.as_deref().unwrap_or(unknown)
            )?;
            writeln!(
                out,
                "isp:        {}",
                report.isp.as_deref().unwrap_or(unknown)
            )?;
            writeln!(
                out,
                "org:        {}",
                report.org.as_deref().unwrap_or(unknown)
            )?;
            writeln!(
                out,
                "asn:        {}",
                report.asn.as_deref().unwrap_or("n/a")
            )?;
            writeln!(out, "connection: {}", report.connection.label())?;
            writeln!(out, "proxy:      {}", if report.proxy { "yes" } else { "no" })?;
            if let Some(url) = map_url {
                writeln!(out, "map:        {url}")?;
            }
            Ok(())
        }
        FormatMode::Json => {
            let value = json!({
                "type": "ip",
                "result": report,
                "map_url": map_url,
            });
            writeln!(out, "{value}")
        }
    }
}

// ---------------------------------------------------------------------------
// Table statistics
// ---------------------------------------------------------------------------

/// Writes bundled-table statistics in the requested mode.
pub fn write_stats(
    out: &mut dyn Write,
    stats: &TableStats,
    mode: FormatMode,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => {
            writeln!(out, "std codes:        {}", stats.std_codes)?;
            for (len, count) in &stats.codes_by_length {
                writeln!(out, "  {len}-digit:        {count}")?;
            }
            writeln!(out, "circles:          {}", stats.circles)?;
            writeln!(out, "operator bands:   {}", stats.operator_prefixes)?;
            Ok(())
        }
        FormatMode::Json => {
            let value = json!({ "type": "tables", "stats": stats });
            writeln!(out, "{value}")
        }
    }
}

/// Writes a verbose note line to stderr-style output, honoring `--quiet`.
pub fn write_note(
    out: &mut dyn Write,
    note: &str,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet || !config.verbose {
        return Ok(());
    }
    writeln!(out, "note: {note}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use dialscope_core::{DialPlan, Tables, classify};

    use super::*;

    fn no_color_config() -> FormatterConfig {
        FormatterConfig {
            colors: false,
            quiet: false,
            verbose: false,
        }
    }

    fn classified(raw: &str) -> ClassificationResult {
        let tables = Tables::bundled().expect("tables");
        classify(raw, &tables, &DialPlan::india()).expect("valid number")
    }

    fn render_phone(raw: &str, mode: FormatMode) -> String {
        let mut buf = Vec::new();
        write_phone_report(&mut buf, &classified(raw), mode).expect("write");
        String::from_utf8(buf).expect("utf8 output")
    }

    // ── phone: human ─────────────────────────────────────────────────────────

    #[test]
    fn phone_human_report_known_locality() {
        let out = render_phone("022-12345678", FormatMode::Human);
        assert!(out.contains("city:       Mumbai"), "out: {out}");
        assert!(out.contains("std code:   22"), "out: {out}");
        assert!(out.contains("type:       landline"), "out: {out}");
        assert!(out.contains("map:        https://www.openstreetmap.org/"), "out: {out}");
    }

    #[test]
    fn phone_human_report_unknown_locality_placeholders() {
        let out = render_phone("9876543210", FormatMode::Human);
        assert!(out.contains("city:       unknown"), "out: {out}");
        assert!(out.contains("std code:   n/a"), "out: {out}");
        assert!(out.contains("operator:   Vodafone Idea (band 98)"), "out: {out}");
    }

    // ── phone: json ──────────────────────────────────────────────────────────

    #[test]
    fn phone_json_report_is_one_parseable_object() {
        let out = render_phone("022-12345678", FormatMode::Json);
        let value: serde_json::Value =
            serde_json::from_str(out.trim()).expect("parseable JSON");
        assert_eq!(value["type"], "phone");
        assert_eq!(value["result"]["locality"]["locality"]["city"], "Mumbai");
        assert!(value["map_url"].as_str().is_some());
    }

    #[test]
    fn phone_json_unknown_fields_absent() {
        let out = render_phone("5512345678", FormatMode::Json);
        let value: serde_json::Value =
            serde_json::from_str(out.trim()).expect("parseable JSON");
        assert!(value["result"].get("locality").is_none());
        assert!(value["map_url"].is_null());
    }

    // ── failures ─────────────────────────────────────────────────────────────

    #[test]
    fn failure_human_line_without_color() {
        let failure = ValidationFailure::InvalidLength {
            expected: 10,
            got: 5,
        };
        let mut buf = Vec::new();
        write_validation_failure(&mut buf, &failure, FormatMode::Human, &no_color_config())
            .expect("write");
        let out = String::from_utf8(buf).expect("utf8");
        assert!(out.starts_with("invalid number:"), "out: {out}");
        assert!(!out.contains('\x1b'), "no ANSI expected: {out:?}");
    }

    #[test]
    fn failure_human_line_with_color() {
        let failure = ValidationFailure::InvalidLength {
            expected: 10,
            got: 5,
        };
        let config = FormatterConfig {
            colors: true,
            quiet: false,
            verbose: false,
        };
        let mut buf = Vec::new();
        write_validation_failure(&mut buf, &failure, FormatMode::Human, &config).expect("write");
        let out = String::from_utf8(buf).expect("utf8");
        assert!(out.contains("\x1b[31m"), "out: {out:?}");
    }

    #[test]
    fn failure_json_carries_reason_tag() {
        let failure = ValidationFailure::InvalidLeadingDigit {
            got: '0',
            allowed: "1-5 (landline) or 6-9 (mobile)",
        };
        let mut buf = Vec::new();
        write_validation_failure(
            &mut buf,
            &failure,
            FormatMode::Json,
            &no_color_config(),
        )
        .expect("write");
        let value: serde_json::Value =
            serde_json::from_slice(&buf).expect("parseable JSON");
        assert_eq!(value["error"]["reason"], "invalid_leading_digit");
    }

    // ── ip ───────────────────────────────────────────────────────────────────

    const SUCCESS_BODY: &str = r#"{
        "status": "success", "query": "8.8.8.8", "reverse": "dns.google",
        "country": "United States", "countryCode": "US", "regionName": "Virginia",
        "city": "Ashburn", "zip": "20149", "lat": 39.03, "lon": -77.5,
        "timezone": "America/New_York", "isp": "Google LLC",
        "org": "Google Public DNS", "as": "AS15169 Google LLC",
        "mobile": false, "proxy": false
    }"#;

    #[test]
    fn ip_human_report_fields() {
        let report = dialscope_core::parse_ip_report(SUCCESS_BODY).expect("decode");
        let mut buf = Vec::new();
        write_ip_report(&mut buf, &report, FormatMode::Human).expect("write");
        let out = String::from_utf8(buf).expect("utf8");
        assert!(out.contains("ip:         8.8.8.8"), "out: {out}");
        assert!(out.contains("location:   Ashburn, Virginia, United States"), "out: {out}");
        assert!(out.contains("connection: broadband"), "out: {out}");
        assert!(out.contains("proxy:      no"), "out: {out}");
        assert!(out.contains(",blue"), "out: {out}");
    }

    #[test]
    fn ip_json_report_is_parseable() {
        let report = dialscope_core::parse_ip_report(SUCCESS_BODY).expect("decode");
        let mut buf = Vec::new();
        write_ip_report(&mut buf, &report, FormatMode::Json).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("parseable JSON");
        assert_eq!(value["result"]["asn"], "AS15169");
        assert_eq!(value["type"], "ip");
    }

    #[test]
    fn request_url_human_and_json() {
        let mut buf = Vec::new();
        write_request_url(&mut buf, "http://x/y", FormatMode::Human).expect("write");
        assert!(String::from_utf8(buf).expect("utf8").contains("http://x/y"));

        let mut buf = Vec::new();
        write_request_url(&mut buf, "http://x/y", FormatMode::Json).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(value["request_url"], "http://x/y");
    }

    // ── stats ────────────────────────────────────────────────────────────────

    #[test]
    fn stats_human_lists_lengths() {
        let tables = Tables::bundled().expect("tables");
        let mut buf = Vec::new();
        write_stats(&mut buf, &tables.stats(), FormatMode::Human).expect("write");
        let out = String::from_utf8(buf).expect("utf8");
        assert!(out.contains("std codes:"), "out: {out}");
        assert!(out.contains("2-digit:"), "out: {out}");
        assert!(out.contains("operator bands:"), "out: {out}");
    }

    #[test]
    fn stats_json_counts_match() {
        let tables = Tables::bundled().expect("tables");
        let stats = tables.stats();
        let mut buf = Vec::new();
        write_stats(&mut buf, &stats, FormatMode::Json).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(
            value["stats"]["std_codes"].as_u64(),
            Some(stats.std_codes as u64)
        );
    }

    // ── notes ────────────────────────────────────────────────────────────────

    #[test]
    fn note_suppressed_unless_verbose() {
        let mut buf = Vec::new();
        write_note(&mut buf, "hello", &no_color_config()).expect("write");
        assert!(buf.is_empty());
    }

    #[test]
    fn note_emitted_when_verbose() {
        let config = FormatterConfig {
            colors: false,
            quiet: false,
            verbose: true,
        };
        let mut buf = Vec::new();
        write_note(&mut buf, "hello", &config).expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "note: hello\n");
    }
}
