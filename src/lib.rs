pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    intake::{IntakeReport, RsvpIntake},
    registry::RsvpRegistry,
};
pub use crate::domain::model::{
    OutputFormat, Participant, ResponseEntry, ResponseValue, RsvpSummary,
};
pub use crate::utils::error::{Result, RsvpError};
