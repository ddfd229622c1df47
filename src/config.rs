use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

pub const DEFAULT_ENDPOINT: &str =
    "https://usdc.range.org/api/usdcTrail/transactions?txnType=MAINNET&showPending=false&txnHash=";
pub const DEFAULT_DATA_FILE: &str = "3-4-2024.csv";
pub const DEFAULT_NETWORK: &str = "noble";
pub const DEFAULT_PAGE_LIMIT: u64 = 1000;
pub const DEFAULT_PAGE_DELAY_MS: u64 = 1000;
pub const DEFAULT_SCALE: u64 = 1_000_000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings shared by the fetch and read phases.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Transactions endpoint including its fixed filter parameters. `offset` and `limit` are appended per page.
    #[arg(long, env = "NOBLE_FLOW_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// CSV file written by `fetch` and read by `read`
    #[arg(short, long, env = "NOBLE_FLOW_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Network whose inbound and outbound totals are reported
    #[arg(short, long, env = "NOBLE_FLOW_NETWORK", default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// Records requested per page
    #[arg(long, env = "NOBLE_FLOW_PAGE_LIMIT", default_value_t = DEFAULT_PAGE_LIMIT,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub page_limit: u64,

    /// Pause between successful page requests, in milliseconds
    #[arg(long, env = "NOBLE_FLOW_PAGE_DELAY_MS", default_value_t = DEFAULT_PAGE_DELAY_MS)]
    pub page_delay_ms: u64,

    /// Base units per display unit (1000000 for a 6-decimal asset)
    #[arg(long, env = "NOBLE_FLOW_SCALE", default_value_t = DEFAULT_SCALE,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub scale: u64,

    /// HTTP request timeout in seconds
    #[arg(long, env = "NOBLE_FLOW_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Config {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            network: DEFAULT_NETWORK.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            page_delay_ms: DEFAULT_PAGE_DELAY_MS,
            scale: DEFAULT_SCALE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
