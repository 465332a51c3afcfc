//! Service definition type definitions for sls-azure
//!
//! This module defines the serde model for a Serverless Framework service
//! definition (`serverless.yml`), reduced to the fields the adapter consumes.
//! Provider fields have sensible Azure defaults; binding entries stay
//! free-form because the event schema is open-ended.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A parsed `serverless.yml` service definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name, used as the default prefix for generated resource names.
    pub service: String,
    /// Cloud provider settings.
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Function definitions keyed by function name.
    #[serde(default)]
    pub functions: HashMap<String, FunctionConfig>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Provider block of the service definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider name; this adapter only targets `azure`.
    pub name: String,
    /// Worker runtime for the function app.
    pub runtime: String,
    /// Azure region the service deploys into.
    pub region: String,
    /// Deployment stage (dev, staging, prod, ...).
    pub stage: String,
    /// Short prefix prepended to generated resource names.
    pub prefix: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: "azure".to_string(),
            runtime: "nodejs18".to_string(),
            region: "westus".to_string(),
            stage: "dev".to_string(),
            prefix: "sls".to_string(),
        }
    }
}

// ============================================================================
// Function Configuration
// ============================================================================

/// A single function definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionConfig {
    /// Handler reference of the form `<relativePath>.<entryPoint>`.
    pub handler: String,
    /// Declared binding entries. Each is a mapping with a binding type key,
    /// an optional `direction`, and optional settings nested under
    /// `x-azure-settings`.
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults() {
        let provider = ProviderConfig::default();
        assert_eq!(provider.name, "azure");
        assert_eq!(provider.runtime, "nodejs18");
        assert_eq!(provider.region, "westus");
        assert_eq!(provider.stage, "dev");
        assert_eq!(provider.prefix, "sls");
    }

    #[test]
    fn test_service_from_yaml() {
        let yaml = r#"
service: greeter
provider:
  name: azure
  region: eastus2
functions:
  hello:
    handler: src/handlers/hello.greet
    events:
      - http: true
        x-azure-settings:
          authLevel: anonymous
"#;
        let config: ServiceConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.service, "greeter");
        assert_eq!(config.provider.region, "eastus2");
        // Defaults should apply to unspecified provider fields
        assert_eq!(config.provider.stage, "dev");

        let hello = config.functions.get("hello").unwrap();
        assert_eq!(hello.handler, "src/handlers/hello.greet");
        assert_eq!(hello.events.len(), 1);
        assert!(hello.events[0].get("http").is_some());
    }

    #[test]
    fn test_service_minimal_yaml() {
        let config: ServiceConfig = serde_yaml::from_str("service: tiny").unwrap();
        assert_eq!(config.service, "tiny");
        assert!(config.functions.is_empty());
        assert_eq!(config.provider.name, "azure");
    }

    #[test]
    fn test_function_events_default_empty() {
        let yaml = r#"
service: greeter
functions:
  hello:
    handler: hello.run
"#;
        let config: ServiceConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.functions["hello"].events.is_empty());
    }

    #[test]
    fn test_malformed_events_rejected() {
        // An events block that is not a list fails at parse time rather than
        // surfacing as a silent extraction miss later.
        let yaml = r#"
service: greeter
functions:
  hello:
    handler: hello.run
    events: 12
"#;
        assert!(serde_yaml::from_str::<ServiceConfig>(yaml).is_err());
    }

    #[test]
    fn test_service_roundtrip_json() {
        let yaml = r#"
service: greeter
functions:
  hello:
    handler: hello.run
"#;
        let config: ServiceConfig = serde_yaml::from_str(yaml).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("greeter"));
        assert!(json.contains("hello.run"));
    }
}
