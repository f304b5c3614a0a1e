//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_seed_sample_data() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Start the board with the four sample activities.
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.seed_sample_data);
    }
}
