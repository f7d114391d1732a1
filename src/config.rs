use clap::Parser;
use std::time::Duration;

use crate::error::ConfigError;
use crate::rate_limit::RateLimitConfig;

// CLI argument structure; every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "festival-api")]
#[command(about = "Music festival management API")]
pub struct Args {
    // Address to bind
    #[arg(long, env = "FESTIVAL_HOST", default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, env = "FESTIVAL_PORT", default_value_t = 8000)]
    pub port: u16,

    // Shared secret expected in the X-API-Key header
    #[arg(long, env = "FESTIVAL_API_KEY", default_value = "festival_secure_key", hide_env_values = true)]
    pub api_key: String,

    // Rate limit max requests per window
    #[arg(long, env = "FESTIVAL_RATE_LIMIT", default_value_t = 5)]
    pub rate_limit: usize,

    // Rate limit window in seconds
    #[arg(long, env = "FESTIVAL_RATE_WINDOW", default_value_t = 60)]
    pub rate_window: u64,

    // Seconds an empty caller window is kept before eviction
    #[arg(long, env = "FESTIVAL_IDLE_GRACE", default_value_t = 60)]
    pub idle_grace: u64,

    // Seconds between eviction sweeps
    #[arg(long, env = "FESTIVAL_SWEEP_INTERVAL", default_value_t = 30,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub sweep_interval: u64,
}

impl Args {
    pub fn rate_limit_config(&self) -> Result<RateLimitConfig, ConfigError> {
        RateLimitConfig::new(
            self.rate_limit,
            Duration::from_secs(self.rate_window),
            Duration::from_secs(self.idle_grace),
        )
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
