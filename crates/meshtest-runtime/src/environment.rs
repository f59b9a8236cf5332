use crate::deployer::{select_deployer, ComponentDeployer};
use crate::RuntimeError;
use meshtest_schema::Settings;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvironmentKind {
    /// Components run as local processes; nothing is deployed.
    Native,
    Kube,
}

impl EnvironmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EnvironmentKind::Native => "native",
            EnvironmentKind::Kube => "kube",
        }
    }
}

impl fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvironmentKind {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(EnvironmentKind::Native),
            "kube" => Ok(EnvironmentKind::Kube),
            other => Err(RuntimeError::UnknownEnvironment(other.to_owned())),
        }
    }
}

/// The active test environment. Each variant carries its own typed handle.
#[derive(Debug)]
pub enum Environment {
    Native(NativeEnvironment),
    Kube(KubeEnvironment),
}

impl Environment {
    pub fn kind(&self) -> EnvironmentKind {
        match self {
            Environment::Native(_) => EnvironmentKind::Native,
            Environment::Kube(_) => EnvironmentKind::Kube,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Native(_) => f.write_str("native"),
            Environment::Kube(env) => write!(f, "kube (deployer={})", env.deployer.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEnvironment;

pub struct KubeEnvironment {
    kube_config: Option<PathBuf>,
    deployer: Arc<dyn ComponentDeployer>,
}

impl KubeEnvironment {
    pub fn new(kube_config: Option<PathBuf>, deployer: Arc<dyn ComponentDeployer>) -> Self {
        Self {
            kube_config,
            deployer,
        }
    }

    pub fn kube_config(&self) -> Option<&Path> {
        self.kube_config.as_deref()
    }

    pub fn deployer(&self) -> &dyn ComponentDeployer {
        self.deployer.as_ref()
    }
}

impl fmt::Debug for KubeEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubeEnvironment")
            .field("kube_config", &self.kube_config)
            .field("deployer", &self.deployer.name())
            .finish()
    }
}

/// Build the environment named in the suite settings.
///
/// Unknown environment names are rejected here, so every constructed
/// `Environment` has a kind the orchestrator knows how to handle.
pub fn select_environment(settings: &Settings) -> Result<Environment, RuntimeError> {
    match settings.environment.parse::<EnvironmentKind>()? {
        EnvironmentKind::Native => Ok(Environment::Native(NativeEnvironment)),
        EnvironmentKind::Kube => {
            let deployer = select_deployer(&settings.kube.deployer)?;
            Ok(Environment::Kube(KubeEnvironment::new(
                settings.kube.config.clone(),
                deployer,
            )))
        }
    }
}
