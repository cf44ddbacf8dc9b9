use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::split::SplitMethod;

/// Synthesis run settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Master seed; `None` draws one from OS entropy
    pub seed: Option<u64>,

    /// Remainder policy used by every split
    pub split_method: SplitMethod,

    /// Synthesize games on the rayon pool
    pub parallel: bool,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            seed: None,
            split_method: SplitMethod::default(),
            parallel: true,
        }
    }
}

impl SynthConfig {
    pub fn with_seed(seed: u64) -> Self {
        SynthConfig {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse a JSON config; absent fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
