use crate::settings::ComponentSettings;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SYSTEM_NAMESPACE: &str = "istio-system";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

const MTLS_VALUE_KEY: &str = "global.mtls.enabled";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("invalid values file '{path}': {reason}")]
    InvalidValuesFile { path: String, reason: String },
    #[error("{0} must not be empty")]
    EmptyNamespace(&'static str),
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Deployment parameters for the control plane under test.
///
/// Built once per orchestration call from the suite settings, optionally
/// mutated by a single override function, then handed to the deployer by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub system_namespace: String,
    pub telemetry_namespace: String,
    pub policy_namespace: String,
    pub ingress_namespace: String,
    pub egress_namespace: String,
    /// When false the deployer attaches to an already installed control plane.
    pub deploy: bool,
    pub deploy_timeout_secs: u64,
    pub undeploy_timeout_secs: u64,
    pub values_file: Option<PathBuf>,
    /// Flattened chart values, keyed by dotted path (`global.mtls.enabled`).
    pub values: BTreeMap<String, String>,
    /// Raw overlay passed through to the control-plane install untouched.
    pub control_plane_values: Option<String>,
    pub skip_wait_for_validation_webhook: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system_namespace: DEFAULT_SYSTEM_NAMESPACE.to_owned(),
            telemetry_namespace: DEFAULT_SYSTEM_NAMESPACE.to_owned(),
            policy_namespace: DEFAULT_SYSTEM_NAMESPACE.to_owned(),
            ingress_namespace: DEFAULT_SYSTEM_NAMESPACE.to_owned(),
            egress_namespace: DEFAULT_SYSTEM_NAMESPACE.to_owned(),
            deploy: true,
            deploy_timeout_secs: DEFAULT_TIMEOUT_SECS,
            undeploy_timeout_secs: DEFAULT_TIMEOUT_SECS,
            values_file: None,
            values: BTreeMap::new(),
            control_plane_values: None,
            skip_wait_for_validation_webhook: false,
        }
    }
}

impl Config {
    /// Derive a config from the component section of the suite settings.
    ///
    /// Namespaces that are not set explicitly follow `system_namespace`.
    /// Values from `values_file` are merged first; explicit `values` entries
    /// override them key by key.
    pub fn from_settings(settings: &ComponentSettings) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(ns) = &settings.system_namespace {
            cfg.system_namespace.clone_from(ns);
        }
        let system = cfg.system_namespace.clone();
        let follow =
            |explicit: Option<&String>| explicit.cloned().unwrap_or_else(|| system.clone());
        cfg.telemetry_namespace = follow(settings.telemetry_namespace.as_ref());
        cfg.policy_namespace = follow(settings.policy_namespace.as_ref());
        cfg.ingress_namespace = follow(settings.ingress_namespace.as_ref());
        cfg.egress_namespace = follow(settings.egress_namespace.as_ref());

        if let Some(deploy) = settings.deploy {
            cfg.deploy = deploy;
        }
        if let Some(secs) = settings.deploy_timeout_secs {
            cfg.deploy_timeout_secs = secs;
        }
        if let Some(secs) = settings.undeploy_timeout_secs {
            cfg.undeploy_timeout_secs = secs;
        }
        if let Some(skip) = settings.skip_wait_for_validation_webhook {
            cfg.skip_wait_for_validation_webhook = skip;
        }
        cfg.control_plane_values.clone_from(&settings.control_plane_values);

        if let Some(path) = &settings.values_file {
            cfg.values = load_values_file(path)?;
            cfg.values_file = Some(path.clone());
        }
        cfg.values.extend(settings.values.clone());

        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let namespaces = [
            ("system_namespace", &self.system_namespace),
            ("telemetry_namespace", &self.telemetry_namespace),
            ("policy_namespace", &self.policy_namespace),
            ("ingress_namespace", &self.ingress_namespace),
            ("egress_namespace", &self.egress_namespace),
        ];
        for (field, ns) in namespaces {
            if ns.trim().is_empty() {
                return Err(ConfigError::EmptyNamespace(field));
            }
        }
        if self.deploy_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("deploy_timeout_secs"));
        }
        if self.undeploy_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("undeploy_timeout_secs"));
        }
        Ok(())
    }

    pub fn is_mtls_enabled(&self) -> bool {
        self.values.get(MTLS_VALUE_KEY).map(String::as_str) == Some("true")
    }

    pub fn deploy_timeout(&self) -> Duration {
        Duration::from_secs(self.deploy_timeout_secs)
    }

    pub fn undeploy_timeout(&self) -> Duration {
        Duration::from_secs(self.undeploy_timeout_secs)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "system_namespace: {}", self.system_namespace)?;
        writeln!(f, "telemetry_namespace: {}", self.telemetry_namespace)?;
        writeln!(f, "policy_namespace: {}", self.policy_namespace)?;
        writeln!(f, "ingress_namespace: {}", self.ingress_namespace)?;
        writeln!(f, "egress_namespace: {}", self.egress_namespace)?;
        writeln!(f, "deploy: {}", self.deploy)?;
        writeln!(f, "deploy_timeout: {}s", self.deploy_timeout_secs)?;
        writeln!(f, "undeploy_timeout: {}s", self.undeploy_timeout_secs)?;
        if let Some(path) = &self.values_file {
            writeln!(f, "values_file: {}", path.display())?;
        }
        for (key, value) in &self.values {
            writeln!(f, "values.{key}: {value}")?;
        }
        write!(
            f,
            "skip_wait_for_validation_webhook: {}",
            self.skip_wait_for_validation_webhook
        )
    }
}

/// Read a TOML values file and flatten nested tables into dotted keys.
pub fn load_values_file(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValuesFile {
        path: path.display().to_string(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let table: toml::Table = toml::from_str(&content).map_err(|e| invalid(e.to_string()))?;

    let mut out = BTreeMap::new();
    flatten_values("", &table, &mut out);
    Ok(out)
}

fn flatten_values(prefix: &str, table: &toml::Table, out: &mut BTreeMap<String, String>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(nested) => flatten_values(&path, nested, out),
            toml::Value::String(s) => {
                out.insert(path, s.clone());
            }
            other => {
                out.insert(path, other.to_string());
            }
        }
    }
}
