use crate::context::Context;
use crate::environment::KubeEnvironment;
use crate::instance::Instance;
use crate::RuntimeError;
use meshtest_schema::Config;
use std::sync::Arc;

/// Provisions (or attaches to) the control plane inside a Kubernetes
/// environment.
///
/// Implementations own the cluster mechanics and their own timeouts. The
/// config arrives by value; the returned instance must carry that config.
pub trait ComponentDeployer: Send + Sync {
    fn name(&self) -> &str;

    fn deploy(
        &self,
        ctx: &dyn Context,
        env: &KubeEnvironment,
        cfg: Config,
    ) -> Result<Instance, RuntimeError>;
}

pub fn select_deployer(name: &str) -> Result<Arc<dyn ComponentDeployer>, RuntimeError> {
    match name {
        "mock" => Ok(Arc::new(crate::mock::MockDeployer::new())),
        other => Err(RuntimeError::DeployerUnavailable(other.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_mock_deployer() {
        let deployer = select_deployer("mock").unwrap();
        assert_eq!(deployer.name(), "mock");
    }

    #[test]
    fn select_unknown_deployer_fails() {
        assert!(matches!(
            select_deployer("helm"),
            Err(RuntimeError::DeployerUnavailable(name)) if name == "helm"
        ));
    }
}
