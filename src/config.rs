//! Configuration types.

use serde::{Deserialize, Serialize};

/// User-configured pattern rules.
///
/// Both patterns are regular expressions matched against the name of the
/// folder a message arrived in. An empty pattern disables that rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Folder-name regex that allows remote content. Empty = disabled.
    #[serde(default)]
    pub allow_pattern: String,
    /// Folder-name regex that blocks remote content. Empty = disabled.
    #[serde(default)]
    pub block_pattern: String,
    /// Evaluate the block rule before the allow rule.
    #[serde(default)]
    pub block_first: bool,
}

impl PolicyConfig {
    /// Build config from environment variables.
    ///
    /// Unset variables fall back to the shipped defaults (both rules
    /// disabled, allow evaluated first).
    pub fn from_env() -> Self {
        let allow_pattern = std::env::var("RCF_ALLOW_REGEXP").unwrap_or_default();
        let block_pattern = std::env::var("RCF_BLOCK_REGEXP").unwrap_or_default();

        let block_first: bool = std::env::var("RCF_BLOCK_FIRST")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false);

        Self {
            allow_pattern,
            block_pattern,
            block_first,
        }
    }
}

/// Live view of the host's rule configuration.
///
/// The engine re-reads these values on every evaluation so preference
/// changes take effect for the next arriving message. Implementations
/// must not cache on the engine's behalf.
pub trait ConfigSource: Send + Sync {
    /// Folder-name regex that allows remote content. Empty = disabled.
    fn allow_pattern(&self) -> String;

    /// Folder-name regex that blocks remote content. Empty = disabled.
    fn block_pattern(&self) -> String;

    /// Whether the block rule is evaluated before the allow rule.
    fn block_first(&self) -> bool;
}

impl ConfigSource for PolicyConfig {
    fn allow_pattern(&self) -> String {
        self.allow_pattern.clone()
    }

    fn block_pattern(&self) -> String {
        self.block_pattern.clone()
    }

    fn block_first(&self) -> bool {
        self.block_first
    }
}
