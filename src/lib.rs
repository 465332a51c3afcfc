//! sls-azure - Adapts Serverless Framework service definitions into Azure
//! Functions deployment artifacts

pub mod artifacts;
pub mod bindings;
pub mod config;
pub mod error;
pub mod metadata;
pub mod retry;
pub mod utils;

pub use bindings::{
    binding_name, incoming_binding_config, outgoing_binding_config, Direction,
    BINDING_SETTINGS_KEY,
};
pub use config::{FunctionConfig, ProviderConfig, ServiceConfig};
pub use error::{AdapterError, Result};
pub use metadata::{function_metadata, FunctionMetadata};
pub use retry::{run_with_retry, wait, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};
