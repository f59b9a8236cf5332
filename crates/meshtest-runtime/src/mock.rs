use crate::context::Context;
use crate::deployer::ComponentDeployer;
use crate::environment::KubeEnvironment;
use crate::instance::Instance;
use crate::RuntimeError;
use meshtest_schema::{Config, ResourceId};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// In-memory deployer for tests: validates and records each config it is
/// given and hands back an instance with a deterministic id.
#[derive(Default)]
pub struct MockDeployer {
    deployments: Mutex<Vec<Config>>,
    failure: Option<String>,
}

impl MockDeployer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A deployer whose every `deploy` call fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            deployments: Mutex::new(Vec::new()),
            failure: Some(reason.to_owned()),
        }
    }

    /// Configs received so far, in call order. Failed calls are not recorded.
    pub fn deployments(&self) -> Vec<Config> {
        self.deployments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn deploy_count(&self) -> usize {
        self.deployments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl ComponentDeployer for MockDeployer {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn deploy(
        &self,
        ctx: &dyn Context,
        _env: &KubeEnvironment,
        cfg: Config,
    ) -> Result<Instance, RuntimeError> {
        cfg.validate()?;
        if let Some(reason) = &self.failure {
            return Err(RuntimeError::DeployFailed(reason.clone()));
        }

        // Mock identity: hash of suite id and canonical config, so the same
        // suite deploying the same config always yields the same id.
        let canonical = serde_json::to_string(&cfg)
            .map_err(|e| RuntimeError::DeployFailed(format!("config not serializable: {e}")))?;
        let seed = format!("mock-deploy:{}:{canonical}", ctx.settings().test_id);
        let id = ResourceId::from_content(seed.as_bytes());

        let attached = !cfg.deploy;
        debug!(
            "mock {} control plane in {} (id={})",
            if attached { "attached to" } else { "deployed" },
            cfg.system_namespace,
            id.short()
        );

        let mut deployments = self
            .deployments
            .lock()
            .map_err(|e| RuntimeError::DeployFailed(format!("mutex poisoned: {e}")))?;
        deployments.push(cfg.clone());

        Ok(Instance::new(id, cfg, attached))
    }
}
