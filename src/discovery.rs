use async_trait::async_trait;
use tracing::info;

/// Turns a free-text query into candidate URLs. Swap in a real search
/// backend here without touching the pipeline.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn discover(&self, query: &str) -> Vec<String>;
}

/// Deterministic stand-in for a search integration: returns the seed
/// list from configuration. Candidates are not pre-validated.
pub struct SeedSearch {
    seeds: Vec<String>,
}

impl SeedSearch {
    pub fn new(seeds: Vec<String>) -> Self {
        Self { seeds }
    }
}

#[async_trait]
impl SearchProvider for SeedSearch {
    async fn discover(&self, query: &str) -> Vec<String> {
        info!("Simulating search for query: {}", query);
        self.seeds.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_seeds_in_order() {
        let search = SeedSearch::new(vec![
            "https://stripe.com".to_string(),
            "https://www.cloudflare.com".to_string(),
        ]);

        let candidates = search.discover("fintech startups in Berlin").await;
        assert_eq!(
            candidates,
            vec!["https://stripe.com", "https://www.cloudflare.com"]
        );
    }

    #[tokio::test]
    async fn empty_seed_list_is_a_valid_outcome() {
        let search = SeedSearch::new(Vec::new());
        assert!(search.discover("anything").await.is_empty());
    }
}
