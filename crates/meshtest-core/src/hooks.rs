use crate::CoreError;
use meshtest_runtime::Context;
use meshtest_schema::Config;
use tracing::info;

/// Override applied to the default config before deployment.
pub type SetupConfigFn = Box<dyn Fn(&mut Config) + Send + Sync>;

/// Pre-deployment hook run against the test context.
pub type SetupContextFn = Box<dyn Fn(&dyn Context) -> Result<(), CoreError> + Send + Sync>;

/// Run `hooks` in order, skipping `None` entries.
///
/// Stops at the first failing hook and returns its error unchanged; later
/// hooks are not invoked.
pub fn run_setup_hooks(
    ctx: &dyn Context,
    hooks: &[Option<SetupContextFn>],
) -> Result<(), CoreError> {
    for hook in hooks.iter().flatten() {
        if let Err(e) = hook(ctx) {
            info!("=== FAILED: context setup function [err={e}] ===");
            return Err(e);
        }
        info!("=== SUCCESS: context setup function ===");
    }
    Ok(())
}
