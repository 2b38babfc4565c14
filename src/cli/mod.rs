use crate::map::consts::{DEFAULT_GIVEAWAY_LAT, DEFAULT_GIVEAWAY_LNG};
use crate::participants::consts::DEFAULT_LEADERBOARD_SIZE;
use crate::storage::consts::DEFAULT_SESSION_IDLE_SECS;
use clap::Parser;
use std::net::SocketAddr;
use url::Url;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    /// Ships request logs to this Quickwit instance when set.
    #[arg(long)]
    pub quickwit_url: Option<Url>,
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long, allow_negative_numbers = true)]
    #[arg(default_value_t = DEFAULT_GIVEAWAY_LAT)]
    pub giveaway_lat: f64,
    #[arg(long, allow_negative_numbers = true)]
    #[arg(default_value_t = DEFAULT_GIVEAWAY_LNG)]
    pub giveaway_lng: f64,
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_LEADERBOARD_SIZE)]
    pub leaderboard_size: usize,
    #[arg(long)]
    #[arg(default_value_t = 10_000_000)]
    pub max_upload_bytes: usize,
    #[arg(long, value_delimiter = ',')]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    /// Sessions untouched for this long are evicted.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_SESSION_IDLE_SECS)]
    pub session_idle_secs: u64,
}
