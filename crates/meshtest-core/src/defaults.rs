use crate::CoreError;
use meshtest_runtime::Context;
use meshtest_schema::Config;

/// Build the default control-plane config for the suite running in `ctx`.
pub fn default_config(ctx: &dyn Context) -> Result<Config, CoreError> {
    Ok(Config::from_settings(&ctx.settings().istio)?)
}
