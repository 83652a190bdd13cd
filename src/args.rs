// src/args.rs
use clap::Parser;
use regex::Regex;

use crate::errors::{LitmusError, Result};

const USAGE_EXAMPLE: &str = "Example: litmus-benchmark https://api.example.com 'My First Test Run' 'my-endpoint-1' 'aiguardian-baseline-tests' 5 your_api_key_here\n`check_interval` and `timeout` are optional, default values are 10 and 1800, unit is second.";

/// Command-line arguments for one benchmark run.
#[derive(Parser, Debug, Clone)]
#[command(name = "litmus-benchmark", about = "Trigger a remote Litmus test run and download its results")]
pub struct CliArgs {
    /// Base URL of the Litmus service, e.g. https://api.example.com
    pub base_url: String,

    /// Human-readable name for the run
    pub run_name: String,

    /// Endpoint identifier the test run targets
    pub endpoint: String,

    /// Test suite identifier to execute
    pub test_suite: String,

    /// Number of prompts to run
    pub num_of_prompts: String,

    /// API key sent as the X-API-Key header
    pub api_key: String,

    /// Seconds between status checks
    #[arg(default_value_t = 10)]
    pub check_interval: u64,

    /// Overall polling timeout in seconds
    #[arg(default_value_t = 1800)]
    pub timeout: u64,
}

impl CliArgs {
    /// Parses and validates arguments. Any clap failure (missing
    /// positionals, non-numeric interval/timeout) is folded into a single
    /// usage error so the process exits with code 1 rather than clap's 2.
    pub fn from_args<I, T>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let args = Self::try_parse_from(argv)
            .map_err(|e| LitmusError::Usage(format!("{e}\n{USAGE_EXAMPLE}")))?;

        if !is_valid_url(&args.base_url) {
            return Err(LitmusError::InvalidUrl(args.base_url));
        }

        Ok(args)
    }
}

/// Accepts http/https URLs with a domain-like, `localhost`, or dotted-quad
/// host, an optional port, and an optional path.
pub fn is_valid_url(url: &str) -> bool {
    let pattern = Regex::new(
        r"(?i)^https?://(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+[A-Z]{2,6}\.?|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)?$",
    )
    .unwrap();
    pattern.is_match(url)
}
