pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat, RawSubmission};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "team-rsvp")]
#[command(about = "Collect RSVPs for a team event and tally the answers")]
pub struct CliConfig {
    #[arg(long, default_value = "Team event")]
    pub event: String,

    /// RSVP in NAME=RESPONSE form (Yes, No or Maybe), repeatable
    #[arg(long = "rsvp", value_name = "NAME=RESPONSE")]
    pub rsvps: Vec<RawSubmission>,

    /// CSV files with a `name,response` header
    #[arg(long, value_delimiter = ',')]
    pub input: Vec<String>,

    /// Directory to write the report into; prints to stdout when omitted
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Abort on the first rejected submission
    #[arg(long)]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn event_name(&self) -> &str {
        &self.event
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn input_files(&self) -> &[String] {
        &self.input
    }

    fn inline_submissions(&self) -> Vec<RawSubmission> {
        self.rsvps.clone()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn strict(&self) -> bool {
        self.strict
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("event", &self.event)?;
        validation::validate_file_extensions("input", &self.input, &["csv"])?;
        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        Ok(())
    }
}
