//! Command-line argument definition and processing.

use clap::Parser;

/// Pixsea - A fast, friendly terminal browser for paginated image search results
#[derive(Parser, Debug)]
#[command(name = "pixsea")]
#[command(version)]
#[command(about = "A fast, friendly terminal browser for paginated image search results", long_about = None)]
pub struct Args {
    /// Start with this search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Pixabay API key (overrides settings.conf and PIXSEA_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Results per page (1-200, overrides settings.conf)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=200))]
    pub per_page: Option<u32>,

    /// Print the results for --search and exit instead of reading commands
    #[arg(long, requires = "search")]
    pub once: bool,

    /// Print --once results as JSON
    #[arg(long, requires = "once")]
    pub json: bool,

    /// Number of pages to load with --once
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub pages: u32,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Merge command-line overrides into loaded settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings loaded from file and environment.
///
/// Details:
/// - `--api-key` wins over the file and `PIXSEA_API_KEY`.
/// - `--per-page` replaces the configured page size.
pub fn apply_overrides(args: &Args, settings: &mut pixsea::config::Settings) {
    settings.override_api_key(args.api_key.as_deref());
    if let Some(n) = args.per_page {
        settings.per_page = n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Verbose forces debug; otherwise `--log-level` is used.
    ///
    /// Inputs:
    /// - Args parsed with and without `-v`.
    ///
    /// Output:
    /// - `debug` with `-v`, the given level without.
    fn args_log_level() {
        let a = Args::parse_from(["pixsea", "--log-level", "warn"]);
        assert_eq!(determine_log_level(&a), "warn");
        let a = Args::parse_from(["pixsea", "-v", "--log-level", "warn"]);
        assert_eq!(determine_log_level(&a), "debug");
    }

    #[test]
    /// What: Overrides replace key and page size.
    ///
    /// Inputs:
    /// - `--api-key abc --per-page 30` over default settings.
    ///
    /// Output:
    /// - Settings carry the overridden values.
    fn args_overrides() {
        let a = Args::parse_from(["pixsea", "--api-key", "abc", "--per-page", "30"]);
        let mut s = pixsea::config::Settings::default();
        apply_overrides(&a, &mut s);
        assert_eq!(s.api_key, "abc");
        assert_eq!(s.per_page, 30);
    }

    #[test]
    /// What: Out-of-range values and `--once` without `--search` are rejected.
    ///
    /// Inputs:
    /// - `--per-page 0`, `--per-page 500`, bare `--once`, `--json` without `--once`.
    ///
    /// Output:
    /// - Parse errors.
    fn args_rejects_invalid() {
        assert!(Args::try_parse_from(["pixsea", "--per-page", "0"]).is_err());
        assert!(Args::try_parse_from(["pixsea", "--per-page", "500"]).is_err());
        assert!(Args::try_parse_from(["pixsea", "--once"]).is_err());
        assert!(Args::try_parse_from(["pixsea", "--once", "-s", "cats"]).is_ok());
        assert!(Args::try_parse_from(["pixsea", "--json", "-s", "cats"]).is_err());
        let a = Args::parse_from(["pixsea", "--once", "--json", "-s", "cats"]);
        assert!(a.json);
    }
}
