pub mod config;
pub mod error;
pub mod types;

pub use config::ReportingConfig;
pub use error::{ReportingError, ReportingResult};
