use serde::{Deserialize, Serialize};

/// What `init` does to the ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// Write the fixed demo records.
    #[default]
    Fixtures,
    /// Acknowledge without writing anything.
    Skip,
}

/// Router settings. Missing fields fall back to their defaults when
/// loaded from JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub seed: SeedMode,
    /// Also accept the original operation names (`queryPig`, ...).
    pub legacy_names: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            seed: SeedMode::Fixtures,
            legacy_names: true,
        }
    }
}

impl RouterConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_seed(mut self, seed: SeedMode) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_legacy_names(mut self, legacy_names: bool) -> Self {
        self.legacy_names = legacy_names;
        self
    }
}
