use crate::config::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Suite-wide settings shared by every component of a test run.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Identifies the suite in lifecycle logs.
    #[serde(default = "default_test_id")]
    pub test_id: String,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub kube: KubeSettings,
    #[serde(default)]
    pub istio: ComponentSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            test_id: default_test_id(),
            environment: default_environment(),
            kube: KubeSettings::default(),
            istio: ComponentSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KubeSettings {
    #[serde(default)]
    pub config: Option<PathBuf>,
    #[serde(default = "default_deployer")]
    pub deployer: String,
}

impl Default for KubeSettings {
    fn default() -> Self {
        Self {
            config: None,
            deployer: default_deployer(),
        }
    }
}

/// Per-field overrides for the control-plane config. Unset fields keep
/// their defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ComponentSettings {
    #[serde(default)]
    pub deploy: Option<bool>,
    #[serde(default)]
    pub system_namespace: Option<String>,
    #[serde(default)]
    pub telemetry_namespace: Option<String>,
    #[serde(default)]
    pub policy_namespace: Option<String>,
    #[serde(default)]
    pub ingress_namespace: Option<String>,
    #[serde(default)]
    pub egress_namespace: Option<String>,
    #[serde(default)]
    pub deploy_timeout_secs: Option<u64>,
    #[serde(default)]
    pub undeploy_timeout_secs: Option<u64>,
    #[serde(default)]
    pub values_file: Option<PathBuf>,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    #[serde(default)]
    pub control_plane_values: Option<String>,
    #[serde(default)]
    pub skip_wait_for_validation_webhook: Option<bool>,
}

fn default_test_id() -> String {
    "meshtest".to_owned()
}

fn default_environment() -> String {
    "native".to_owned()
}

fn default_deployer() -> String {
    "mock".to_owned()
}

impl Settings {
    pub fn parse_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load settings from a TOML file. Relative paths inside the file are
    /// resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut settings = Self::parse_str(&content)?;

        let base = path.parent().unwrap_or(Path::new("."));
        if let Some(values_file) = &mut settings.istio.values_file {
            if values_file.is_relative() {
                *values_file = base.join(&*values_file);
            }
        }
        if let Some(kube_config) = &mut settings.kube.config {
            if kube_config.is_relative() {
                *kube_config = base.join(&*kube_config);
            }
        }
        Ok(settings)
    }
}
