use crate::defaults::default_config;
use crate::lifecycle::reported;
use crate::{CoreError, COMPONENT};
use meshtest_runtime::{Context, Environment, Instance};
use meshtest_schema::Config;
use tracing::debug;

/// Deploy (or attach to) the control plane and return its handle.
///
/// With `cfg` absent the default config for `ctx` is used. Only Kubernetes
/// environments have a deploy routine; any other kind fails with
/// [`CoreError::UnsupportedEnvironment`].
pub fn deploy(ctx: &dyn Context, cfg: Option<&Config>) -> Result<Instance, CoreError> {
    reported(&ctx.settings().test_id, || match cfg {
        Some(cfg) => dispatch(ctx, cfg),
        None => dispatch(ctx, &default_config(ctx)?),
    })
}

/// Hand `cfg` to the deployer of the active environment.
///
/// The deployer receives its own copy; the caller's config is never shared.
pub(crate) fn dispatch(ctx: &dyn Context, cfg: &Config) -> Result<Instance, CoreError> {
    match ctx.environment() {
        Environment::Kube(env) => {
            debug!(
                "dispatching {COMPONENT} to {} deployer (namespace={})",
                env.deployer().name(),
                cfg.system_namespace
            );
            Ok(env.deployer().deploy(ctx, env, cfg.clone())?)
        }
        Environment::Native(_) => Err(CoreError::UnsupportedEnvironment(
            ctx.environment().kind(),
        )),
    }
}
