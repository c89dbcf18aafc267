use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Redis connection URL. Drafts are cached in process memory when unset.
    #[serde(default)]
    pub redis_url: Option<String>,

    /// How long a generated recipe draft stays cached, in seconds
    #[serde(default = "default_recipe_cache_ttl_secs")]
    pub recipe_cache_ttl_secs: u64,

    /// Simulated latency of the recipe generator, in milliseconds
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,

    /// Whether to generate the starter feed at boot
    #[serde(default = "default_seed_initial_feed")]
    pub seed_initial_feed: bool,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_recipe_cache_ttl_secs() -> u64 {
    604800 // 1 week
}

fn default_generation_delay_ms() -> u64 {
    2500
}

fn default_seed_initial_feed() -> bool {
    true
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
