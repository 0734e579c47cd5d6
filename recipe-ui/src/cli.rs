//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use recipe_common::config::{ConfigOverrides, ENDPOINT_ENV};

/// Live recipe search over TheMealDB
#[derive(Debug, Parser)]
#[command(name = "recipe-ui", version, about)]
pub struct Args {
    /// Search endpoint base URL (overrides the config file)
    #[arg(long, env = ENDPOINT_ENV)]
    pub endpoint: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Path to a TOML config file
    #[arg(long, env = "RECIPE_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the recipes matching this query as HTML and exit
    #[arg(long)]
    pub query: Option<String>,

    /// Print the full recipe list as HTML and exit
    #[arg(long)]
    pub html: bool,
}

impl Args {
    /// Whether to skip the terminal UI
    pub fn is_one_shot(&self) -> bool {
        self.html || self.query.is_some()
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self
                .endpoint
                .clone()
                .filter(|v| !v.trim().is_empty()),
            timeout_secs: self.timeout_secs,
            config_path: self.config.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_defaults_to_interactive() {
        env::remove_var(ENDPOINT_ENV);
        let args = Args::try_parse_from(["recipe-ui"]).unwrap();

        assert!(!args.is_one_shot());
        assert!(args.overrides().endpoint.is_none());
    }

    #[test]
    fn test_query_selects_one_shot() {
        let args = Args::try_parse_from(["recipe-ui", "--query", "veg"]).unwrap();

        assert!(args.is_one_shot());
        assert_eq!(args.query.as_deref(), Some("veg"));
    }

    #[test]
    #[serial]
    fn test_overrides_carry_flags() {
        let args = Args::try_parse_from([
            "recipe-ui",
            "--endpoint",
            "http://localhost:9000/search.php",
            "--timeout-secs",
            "4",
            "--log-level",
            "debug",
            "--html",
        ])
        .unwrap();

        let overrides = args.overrides();
        assert!(args.is_one_shot());
        assert_eq!(
            overrides.endpoint.as_deref(),
            Some("http://localhost:9000/search.php")
        );
        assert_eq!(overrides.timeout_secs, Some(4));
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
    }

    #[test]
    #[serial]
    fn test_endpoint_from_environment() {
        env::set_var(ENDPOINT_ENV, "http://env.test/search.php");
        let args = Args::try_parse_from(["recipe-ui"]);
        env::remove_var(ENDPOINT_ENV);

        assert_eq!(
            args.unwrap().overrides().endpoint.as_deref(),
            Some("http://env.test/search.php")
        );
    }

    #[test]
    #[serial]
    fn test_endpoint_flag_beats_environment() {
        env::set_var(ENDPOINT_ENV, "http://env.test/search.php");
        let args = Args::try_parse_from(["recipe-ui", "--endpoint", "http://cli.test/search.php"]);
        env::remove_var(ENDPOINT_ENV);

        assert_eq!(
            args.unwrap().overrides().endpoint.as_deref(),
            Some("http://cli.test/search.php")
        );
    }

    #[test]
    #[serial]
    fn test_blank_endpoint_environment_is_ignored() {
        env::set_var(ENDPOINT_ENV, "   ");
        let args = Args::try_parse_from(["recipe-ui"]);
        env::remove_var(ENDPOINT_ENV);

        assert!(args.unwrap().overrides().endpoint.is_none());
    }
}
