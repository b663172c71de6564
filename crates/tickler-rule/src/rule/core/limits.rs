use tickler_core::config::EngineConfig;
use tickler_core::constants::DEFAULT_MAX_SEARCH_YEARS;

/// Bound on forward scans.
///
/// Monthly rules step month by month and can name days that never occur
/// (`m 30 2`). Once a scan covers `max_search_years` it fails with
/// `AdvanceError::SearchExhausted` instead of looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_search_years: u16,
}

impl SearchLimits {
    #[must_use]
    pub const fn new(max_search_years: u16) -> Self {
        Self { max_search_years }
    }

    /// Number of calendar months a monthly scan may visit.
    #[must_use]
    pub fn max_months(self) -> u32 {
        u32::from(self.max_search_years) * 12
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SEARCH_YEARS)
    }
}

impl From<&EngineConfig> for SearchLimits {
    fn from(config: &EngineConfig) -> Self {
        Self::new(config.max_search_years)
    }
}
