//! Engine configuration and TOML persistence.
//!
//! [`CorrectorConfig`] carries the two tuning knobs of the engine.  The
//! defaults are the values the scoring tables were tuned against; serving
//! layers that persist settings can round-trip the struct through a TOML
//! file with [`CorrectorConfig::load_from`] / [`save_to`].
//!
//! [`save_to`]: CorrectorConfig::save_to

use anyhow::Result;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CorrectorConfig
// ---------------------------------------------------------------------------

/// Tuning parameters for [`ReferenceCorrector`](crate::engine::ReferenceCorrector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Coarse whole-string similarity the transcript must reach before
    /// structural alignment is trusted at all.  Below it the transcript
    /// passes through unchanged.
    pub gate_threshold: f32,
    /// Per-pair phonetic similarity a match must reach before a differing
    /// character is replaced with the reference wording.
    pub replace_threshold: f32,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            gate_threshold: 0.3,
            replace_threshold: 0.4,
        }
    }
}

impl CorrectorConfig {
    /// Load from a TOML file, returning defaults when the file is missing
    /// (first-run scenario) so callers never special-case absence.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save to a TOML file, creating parent directories as needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
