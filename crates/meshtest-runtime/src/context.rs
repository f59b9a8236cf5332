use crate::environment::{select_environment, Environment};
use crate::RuntimeError;
use meshtest_schema::Settings;

/// What a setup routine can see of the running test suite.
pub trait Context {
    fn settings(&self) -> &Settings;

    fn environment(&self) -> &Environment;
}

#[derive(Debug)]
pub struct TestContext {
    settings: Settings,
    environment: Environment,
}

impl TestContext {
    pub fn new(settings: Settings, environment: Environment) -> Self {
        Self {
            settings,
            environment,
        }
    }

    /// Select the environment named by `settings.environment` and wrap both.
    pub fn from_settings(settings: Settings) -> Result<Self, RuntimeError> {
        let environment = select_environment(&settings)?;
        Ok(Self::new(settings, environment))
    }
}

impl Context for TestContext {
    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn environment(&self) -> &Environment {
        &self.environment
    }
}
