mod run;

use crate::config::Config;
use crate::models::CliApp;
use crate::pipeline::Pipeline;

impl CliApp {
    pub fn new(config: Config) -> Self {
        let pipeline = Pipeline::from_config(&config);

        Self { config, pipeline }
    }
}
