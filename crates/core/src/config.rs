use chrono::FixedOffset;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ReportingError, ReportingResult};

/// Reporting configuration. Loaded from environment variables with the
/// prefix `VIEWBOARD__`.
///
/// Everything here is a default the host hands to the reporting layer once;
/// the aggregation functions themselves take these as explicit parameters
/// and never read ambient state.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Offset of the reference timezone from UTC, in minutes east.
    /// Calendar days and hours-of-day are derived in this timezone.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    /// Rows per table page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Entries in a top-N leaderboard.
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,
}

fn default_utc_offset_minutes() -> i32 {
    0
}

fn default_page_size() -> usize {
    10
}

fn default_leaderboard_size() -> usize {
    5
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset_minutes(),
            page_size: default_page_size(),
            leaderboard_size: default_leaderboard_size(),
        }
    }
}

impl ReportingConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("VIEWBOARD")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let loaded: Self = config.try_deserialize()?;
        debug!("Loaded reporting config: {:?}", loaded);
        Ok(loaded)
    }

    /// The configured reference timezone as a chrono offset.
    pub fn reference_timezone(&self) -> ReportingResult<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            ReportingError::Config(format!(
                "utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ReportingConfig::default();
        assert_eq!(cfg.utc_offset_minutes, 0);
        assert_eq!(cfg.page_size, 10);
        assert_eq!(cfg.leaderboard_size, 5);
        assert_eq!(cfg.reference_timezone().unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn test_offset_out_of_range() {
        let cfg = ReportingConfig {
            utc_offset_minutes: 24 * 60,
            ..Default::default()
        };
        assert!(cfg.reference_timezone().is_err());
    }
}
