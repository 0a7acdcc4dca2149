use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait Probe: Send + Sync {
    async fn is_reachable(&self, url: &str) -> bool;
}

// Keeps the failure cause around for logging; callers only ever see a bool.
enum ProbeOutcome {
    Responded(StatusCode),
    Failed(reqwest::Error),
}

pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    async fn head(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send().await {
            Ok(response) => ProbeOutcome::Responded(response.status()),
            Err(e) => ProbeOutcome::Failed(e),
        }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn is_reachable(&self, url: &str) -> bool {
        match self.head(url).await {
            ProbeOutcome::Responded(status) => {
                debug!("HEAD {} -> {}", url, status);
                (200..400).contains(&status.as_u16())
            }
            ProbeOutcome::Failed(e) => {
                debug!("HEAD {} failed: {}", url, e);
                false
            }
        }
    }
}
