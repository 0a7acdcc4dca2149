use dialoguer::{theme::ColorfulTheme, Input};

use crate::export::CsvSink;
use crate::models::{CliApp, Result};
use crate::pipeline::RunOutcome;

impl CliApp {
    pub async fn run(&self) -> Result<()> {
        println!("\n🔎 Organization Website Prospector");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let raw_input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter a search query or comma-separated seed URLs")
            .interact_text()?;

        let sink = CsvSink::new(self.config.output.path());

        match self.pipeline.run(&raw_input, &sink).await? {
            RunOutcome::Saved { records } => {
                println!(
                    "✅ Saved {} record(s) to {}",
                    records,
                    sink.path().display()
                );
            }
            RunOutcome::NoCandidates => {
                println!("❌ No valid and reachable URLs to process.");
            }
        }

        Ok(())
    }
}
