//! Reasoner configuration types.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for the proof search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonerConfig {
    /// Levels of rule application before a branch is cut off as
    /// not derivable
    pub max_depth: usize,
}

impl ReasonerConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 25;

    /// A configuration with the given depth bound, which must be positive
    pub fn new(max_depth: usize) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::InvalidDepth(max_depth));
        }
        Ok(ReasonerConfig { max_depth })
    }
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        ReasonerConfig {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
