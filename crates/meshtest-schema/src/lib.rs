//! Suite settings and control-plane configuration for meshtest.
//!
//! This crate defines the schema layer: TOML suite settings (`Settings`) with
//! per-component overrides, the control-plane deployment `Config` with its
//! defaulting and validation rules, values-file flattening, and identifier
//! newtypes shared by the runtime and orchestration crates.

pub mod config;
pub mod settings;
pub mod types;

pub use config::{load_values_file, Config, ConfigError, DEFAULT_SYSTEM_NAMESPACE};
pub use settings::{ComponentSettings, KubeSettings, Settings};
pub use types::ResourceId;
