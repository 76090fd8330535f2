pub mod intake;
pub mod registry;
pub mod report;

pub use crate::domain::model::{
    OutputFormat, Participant, RawSubmission, ResponseEntry, ResponseValue, RsvpSummary,
};
pub use crate::domain::ports::{ConfigProvider, Storage, SubmissionSource};
pub use crate::utils::error::Result;
