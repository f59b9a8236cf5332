//! Test environments and deployment seams for meshtest.
//!
//! This crate implements the execution side: the `Environment` tagged union
//! (native or Kubernetes, each with its own typed handle), the `Context` trait
//! that setup routines receive, the `Instance` handle for a deployed control
//! plane, the pluggable `ComponentDeployer` trait, and an in-memory
//! `MockDeployer` for tests.

pub mod context;
pub mod deployer;
pub mod environment;
pub mod instance;
pub mod mock;

pub use context::{Context, TestContext};
pub use deployer::{select_deployer, ComponentDeployer};
pub use environment::{
    select_environment, Environment, EnvironmentKind, KubeEnvironment, NativeEnvironment,
};
pub use instance::Instance;
pub use mock::MockDeployer;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unknown environment '{0}'")]
    UnknownEnvironment(String),
    #[error("deployer '{0}' is not available")]
    DeployerUnavailable(String),
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] meshtest_schema::ConfigError),
    #[error("deployment failed: {0}")]
    DeployFailed(String),
}
