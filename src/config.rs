use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scraping: ScrapingConfig,
    pub discovery: DiscoveryConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapingConfig {
    pub probe_timeout_seconds: u64,
    pub fetch_timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    pub seed_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
    pub filename: String,
}

impl OutputConfig {
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.filename)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraping: ScrapingConfig {
                probe_timeout_seconds: 5,
                fetch_timeout_seconds: 10,
                user_agent: "Mozilla/5.0 (compatible; ProspectorBot/1.0)".to_string(),
            },
            discovery: DiscoveryConfig {
                seed_urls: vec![
                    "https://stripe.com".to_string(),
                    "https://www.cloudflare.com".to_string(),
                ],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            output: OutputConfig {
                directory: "out".to_string(),
                filename: "output.csv".to_string(),
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
