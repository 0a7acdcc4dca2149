// src/pipeline.rs
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::discovery::{SearchProvider, SeedSearch};
use crate::export::ResultSink;
use crate::models::Result;
use crate::scrape::{is_valid_url, Extract, HttpProbe, PageExtractor, Probe};

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Saved { records: usize },
    NoCandidates,
}

/// Split the raw input on commas and keep the tokens that parse as URLs.
/// An empty result means the input is a search query, not a URL list.
pub fn classify_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| is_valid_url(token))
        .map(String::from)
        .collect()
}

pub struct Pipeline {
    search: Box<dyn SearchProvider>,
    probe: Box<dyn Probe>,
    extractor: Box<dyn Extract>,
}

impl Pipeline {
    pub fn new(
        search: Box<dyn SearchProvider>,
        probe: Box<dyn Probe>,
        extractor: Box<dyn Extract>,
    ) -> Self {
        Self {
            search,
            probe,
            extractor,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(SeedSearch::new(config.discovery.seed_urls.clone())),
            Box::new(HttpProbe::new(
                Duration::from_secs(config.scraping.probe_timeout_seconds),
                &config.scraping.user_agent,
            )),
            Box::new(PageExtractor::new(
                Duration::from_secs(config.scraping.fetch_timeout_seconds),
                &config.scraping.user_agent,
            )),
        )
    }

    pub async fn run(&self, raw_input: &str, sink: &dyn ResultSink) -> Result<RunOutcome> {
        let mut candidates = classify_input(raw_input);

        if candidates.is_empty() {
            info!("No URLs in input, treating it as a search query");
            candidates = self.search.discover(raw_input).await;
        }

        let reachable = self.filter_reachable(&candidates).await;

        if reachable.is_empty() {
            warn!("No valid and reachable URLs to process");
            return Ok(RunOutcome::NoCandidates);
        }

        let mut records = Vec::with_capacity(reachable.len());
        for url in &reachable {
            info!("Scraping: {}", url);
            records.push(self.extractor.extract(url).await);
        }

        sink.write(&records)?;

        Ok(RunOutcome::Saved {
            records: records.len(),
        })
    }

    // One candidate at a time; a failed check drops the candidate, never the run.
    async fn filter_reachable(&self, candidates: &[String]) -> Vec<String> {
        let mut reachable = Vec::new();

        for url in candidates {
            if !is_valid_url(url) {
                warn!("Invalid URL skipped: {}", url);
                continue;
            }

            if self.probe.is_reachable(url).await {
                reachable.push(url.clone());
            } else {
                warn!("Unreachable URL skipped: {}", url);
            }
        }

        reachable
    }
}
