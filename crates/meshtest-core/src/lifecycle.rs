use crate::{CoreError, COMPONENT};
use tracing::info;

/// Run `op` bracketed by deploy lifecycle markers for `suite`.
///
/// A BEGIN marker is logged before `op` runs. Whatever path `op` returns
/// through, exactly one SUCCEEDED or FAILED marker follows, chosen by the
/// outcome. The outcome is returned unchanged.
pub fn reported<T>(
    suite: &str,
    op: impl FnOnce() -> Result<T, CoreError>,
) -> Result<T, CoreError> {
    info!("=== BEGIN: Deploy {COMPONENT} [Suite={suite}] ===");
    let outcome = op();
    match &outcome {
        Ok(_) => info!("=== SUCCEEDED: Deploy {COMPONENT} [Suite={suite}] ==="),
        Err(_) => info!("=== FAILED: Deploy {COMPONENT} [Suite={suite}] ==="),
    }
    outcome
}
