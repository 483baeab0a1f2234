//! Reward parameter loading.
//!
//! Sources, lowest precedence first: a config file (TOML or JSON, picked by
//! extension), environment variables under a prefix (`DRAF_REWARD_POOL`,
//! ...), then explicit overrides from the command line.

use std::path::PathBuf;

use config::{Config, Environment, File};
use draf_core::constants::ENV_PREFIX;
use draf_core::error::DrafError;
use draf_core::types::RewardParams;
use draf_core::validation::validate_params;

/// Where to look for reward parameters.
#[derive(Debug, Clone)]
pub struct ParamSources {
    /// Optional config file.
    pub file: Option<PathBuf>,
    /// Environment variable prefix, without the trailing underscore.
    pub env_prefix: String,
    /// Field overrides, applied last.
    pub overrides: Vec<(&'static str, f64)>,
}

impl Default for ParamSources {
    fn default() -> Self {
        Self {
            file: None,
            env_prefix: ENV_PREFIX.to_string(),
            overrides: Vec::new(),
        }
    }
}

impl ParamSources {
    /// Merge every source and deserialize. Fails if any field is missing.
    pub fn load(&self) -> Result<RewardParams, DrafError> {
        let mut builder = Config::builder();

        if let Some(path) = &self.file {
            builder = builder.add_source(File::from(path.as_path()));
        }

        // Numeric strings parse to i64 or f64; both deserialize into f64 fields.
        let env = Environment::with_prefix(&self.env_prefix).try_parsing(true);
        builder = builder.add_source(env);

        for (key, value) in &self.overrides {
            builder = builder
                .set_override(*key, *value)
                .map_err(|e| DrafError::Config(e.to_string()))?;
        }

        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize::<RewardParams>())
            .map_err(|e| DrafError::Config(e.to_string()))
    }

    /// [`load`](Self::load), then reject parameters that fail validation.
    pub fn load_strict(&self) -> Result<RewardParams, DrafError> {
        let params = self.load()?;
        validate_params(&params)?;
        Ok(params)
    }
}
