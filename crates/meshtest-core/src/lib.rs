//! Deployment lifecycle orchestration for the control plane under test.
//!
//! This crate ties the schema and runtime layers together: it decides per
//! environment whether to deploy at all, builds the default config and applies
//! the caller's override, runs the setup-hook chain, dispatches to the
//! environment's deployer, brackets the whole span with lifecycle markers, and
//! publishes the resulting `Instance` to the caller.

pub mod defaults;
pub mod deploy;
pub mod hooks;
pub mod lifecycle;
pub mod setup;

pub use defaults::default_config;
pub use deploy::deploy;
pub use hooks::{run_setup_hooks, SetupConfigFn, SetupContextFn};
pub use setup::{setup, setup_instance, InstanceSlot, SetupFn};

use meshtest_runtime::EnvironmentKind;
use thiserror::Error;

/// Name of the component this crate deploys, as it appears in lifecycle logs.
pub const COMPONENT: &str = "Istio";

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("config error: {0}")]
    Config(#[from] meshtest_schema::ConfigError),
    #[error("runtime error: {0}")]
    Runtime(#[from] meshtest_runtime::RuntimeError),
    #[error("unsupported environment: {0}")]
    UnsupportedEnvironment(EnvironmentKind),
    #[error("context setup failed: {0}")]
    Setup(String),
}
