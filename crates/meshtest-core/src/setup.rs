use crate::defaults::default_config;
use crate::deploy::dispatch;
use crate::hooks::{run_setup_hooks, SetupConfigFn, SetupContextFn};
use crate::lifecycle::reported;
use crate::{CoreError, COMPONENT};
use meshtest_runtime::{Context, Environment, Instance};
use meshtest_schema::Config;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Resource setup routine in the shape the suite runner expects.
pub type SetupFn = Box<dyn Fn(&dyn Context) -> Result<(), CoreError> + Send + Sync>;

/// Caller-owned destination for the instance produced by [`setup`].
///
/// Clones share the same slot. It is written only after a fully successful
/// deployment.
#[derive(Debug, Clone, Default)]
pub struct InstanceSlot(Arc<Mutex<Option<Instance>>>);

impl InstanceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Instance> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).is_none()
    }

    fn publish(&self, instance: Instance) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(instance);
    }
}

/// Build a setup routine that deploys the control plane on Kubernetes and
/// does nothing elsewhere.
///
/// On success the instance is written to `slot`, if one was given. On any
/// failure, or when nothing was deployed, the slot is left as it was.
pub fn setup(
    slot: Option<InstanceSlot>,
    config_fn: Option<SetupConfigFn>,
    hooks: Vec<Option<SetupContextFn>>,
) -> SetupFn {
    Box::new(move |ctx: &dyn Context| {
        let config_fn = config_fn
            .as_deref()
            .map(|f| f as &dyn Fn(&mut Config));
        let deployed = setup_instance(ctx, config_fn, &hooks)?;
        if let (Some(slot), Some(instance)) = (&slot, deployed) {
            slot.publish(instance);
        }
        Ok(())
    })
}

/// Run the full setup sequence and return the instance instead of publishing
/// it. Returns `Ok(None)` when the environment needs no deployment.
///
/// On Kubernetes: default config, then `config_fn`, then each present hook in
/// order, then deploy. The whole span is bracketed by one set of lifecycle
/// markers.
pub fn setup_instance(
    ctx: &dyn Context,
    config_fn: Option<&dyn Fn(&mut Config)>,
    hooks: &[Option<SetupContextFn>],
) -> Result<Option<Instance>, CoreError> {
    match ctx.environment() {
        Environment::Native(_) => {
            debug!("{COMPONENT} setup: skipping deployment on native");
            Ok(None)
        }
        Environment::Kube(_) => reported(&ctx.settings().test_id, || {
            let mut cfg = default_config(ctx)?;
            if let Some(config_fn) = config_fn {
                config_fn(&mut cfg);
            }
            run_setup_hooks(ctx, hooks)?;
            dispatch(ctx, &cfg).map(Some)
        }),
    }
}
