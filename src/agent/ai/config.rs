//! Search configuration
//!
//! A [`SearchConfig`] carries the knobs of one move-selection call. The
//! caller still supplies the time budget per call; the config decides how
//! much of it the search may actually spend and how often the clock is read.

use super::context::Duration;
use crate::error::{EngineError, EngineResult};

/// Share of the caller's budget the search may use. The rest is headroom
/// for assembling the result at the boundary.
pub const DEFAULT_SAFETY_FRACTION: f64 = 0.8;

/// Nodes visited between two clock reads
pub const DEFAULT_CHECK_INTERVAL: u64 = 1024;

/// Deepest iteration ever started. Time runs out long before this in
/// practice; it bounds recursion depth.
pub const DEFAULT_MAX_DEPTH: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Fraction of the time budget used for searching, in (0, 1]
    pub safety_fraction: f64,
    /// Poll the clock every `check_interval` nodes
    pub check_interval: u64,
    /// Iterative deepening stops after this depth
    pub max_depth: u8,
    /// Optional node budget, checked at every node
    pub max_nodes: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            safety_fraction: DEFAULT_SAFETY_FRACTION,
            check_interval: DEFAULT_CHECK_INTERVAL,
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: None,
        }
    }
}

impl SearchConfig {
    pub fn with_safety_fraction(mut self, safety_fraction: f64) -> Self {
        self.safety_fraction = safety_fraction;
        self
    }

    pub fn with_check_interval(mut self, check_interval: u64) -> Self {
        self.check_interval = check_interval;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: Option<u64>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Reject values the search cannot work with
    pub fn validate(&self) -> EngineResult<()> {
        if !self.safety_fraction.is_finite()
            || self.safety_fraction <= 0.0
            || self.safety_fraction > 1.0
        {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "safety_fraction must be in (0, 1], got {}",
                    self.safety_fraction
                ),
            });
        }
        if self.check_interval == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "check_interval must be at least 1".to_string(),
            });
        }
        if self.max_depth == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "max_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Search time for a caller budget of `time_budget_ms`
    ///
    /// A safety fraction outside (0, 1] falls back to
    /// [`DEFAULT_SAFETY_FRACTION`].
    pub fn search_time(&self, time_budget_ms: u64) -> Duration {
        let fraction = if self.safety_fraction > 0.0 && self.safety_fraction <= 1.0 {
            self.safety_fraction
        } else {
            DEFAULT_SAFETY_FRACTION
        };
        Duration::from_millis(time_budget_ms).mul_f64(fraction)
    }
}
