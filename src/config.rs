use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Static CSV asset fetched at startup and on reload
    #[serde(default)]
    pub dataset_url: Option<String>,

    /// Local CSV file, used when no URL is configured
    #[serde(default)]
    pub dataset_path: Option<String>,

    /// Prefix for generated mock invitation links
    #[serde(default = "default_invite_base_url")]
    pub invite_base_url: String,

    /// Tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_invite_base_url() -> String {
    "https://komunitas.example.com/invite/".to_string()
}

fn default_log_filter() -> String {
    "interest_match=info,tower_http=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dataset_url: None,
            dataset_path: None,
            invite_base_url: default_invite_base_url(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
