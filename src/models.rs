use serde::{Deserialize, Serialize};

use crate::{config::Config, pipeline::Pipeline};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company_name: String,
    pub website: String,
    pub contact: String,
}

impl CompanyRecord {
    // Placeholder row for a candidate whose page could not be processed.
    pub fn unprocessed(url: &str) -> Self {
        Self {
            company_name: String::new(),
            website: url.to_string(),
            contact: "Not found".to_string(),
        }
    }
}

pub struct CliApp {
    pub config: Config,
    pub pipeline: Pipeline,
}
