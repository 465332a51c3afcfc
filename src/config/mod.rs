//! Service definition loading for sls-azure
//!
//! Loads a Serverless Framework service definition (`serverless.yml`) into
//! plain data records with environment variable overrides. The loaded config
//! is passed explicitly to the resolver and extractor functions; there is no
//! ambient global state.

mod types;

pub use types::*;

use std::path::Path;

use tracing::debug;

use crate::error::{AdapterError, Result};

/// Default service definition file name.
pub const SERVICE_FILE: &str = "serverless.yml";

impl ServiceConfig {
    /// Load a service definition from a specific path with environment overrides.
    ///
    /// Unlike an optional user config, a missing service file is an error:
    /// there is nothing meaningful to adapt without one.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AdapterError::Config(format!(
                "service file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: ServiceConfig = serde_yaml::from_str(&content)?;
        config.apply_env_overrides();

        debug!(
            service = %config.service,
            functions = config.functions.len(),
            "Loaded service definition"
        );
        Ok(config)
    }

    /// Load `serverless.yml` from the given service directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load_from_path(&dir.join(SERVICE_FILE))
    }

    /// Apply environment variable overrides to the provider block.
    ///
    /// Environment variables follow the pattern: SLS_AZURE_PROVIDER_KEY
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SLS_AZURE_PROVIDER_REGION") {
            self.provider.region = val;
        }
        if let Ok(val) = std::env::var("SLS_AZURE_PROVIDER_STAGE") {
            self.provider.stage = val;
        }
        if let Ok(val) = std::env::var("SLS_AZURE_PROVIDER_PREFIX") {
            self.provider.prefix = val;
        }
    }

    /// Look up a function definition by name.
    pub fn function(&self, name: &str) -> Result<&FunctionConfig> {
        self.functions
            .get(name)
            .ok_or_else(|| AdapterError::NotFound(format!("function '{name}'")))
    }
}
