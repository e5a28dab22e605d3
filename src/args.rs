use clap::Parser;
use krs_finder::config::FinderConfig;
use krs_finder::error::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "krs-finder")]
#[command(about = "Finds Polish companies via web search and enriches them from the KRS registry")]
#[command(version)]
pub struct Args {
    /// JSON configuration file (every field optional)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the search query
    #[arg(short, long)]
    pub query: Option<String>,

    /// Override the CSV output path
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    /// Builds the run configuration: file (or defaults), then overrides
    pub fn into_config(self) -> Result<FinderConfig> {
        let mut config = match &self.config {
            Some(path) => FinderConfig::from_file(path)?,
            None => FinderConfig::default(),
        };

        if let Some(query) = self.query {
            config.query = query;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }

        Ok(config)
    }
}
