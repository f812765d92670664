pub mod error;
pub mod output;
pub mod types;

pub use error::SweepError;
pub use types::{FileResult, Occurrence, RunMode, RunSummary};
