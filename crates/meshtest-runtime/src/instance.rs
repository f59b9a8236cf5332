use meshtest_schema::{Config, ResourceId};

/// Handle to a deployed (or attached) control plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    id: ResourceId,
    settings: Config,
    attached: bool,
}

impl Instance {
    pub fn new(id: ResourceId, settings: Config, attached: bool) -> Self {
        Self {
            id,
            settings,
            attached,
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// The config the instance was deployed with.
    pub fn settings(&self) -> &Config {
        &self.settings
    }

    /// True when the deployer attached to an existing installation instead
    /// of installing one.
    pub fn attached(&self) -> bool {
        self.attached
    }
}
