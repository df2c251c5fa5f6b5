use std::sync::{LazyLock, PoisonError, RwLock};

use tracing::info;

use crate::options::options_model::CollectOptions;

/// Process-wide defaults, layered between the built-ins and per-call options.
///
/// Starts empty (so everything falls through to the built-ins) and only
/// changes through [`set_default_process_options`]. Each collection reads a
/// snapshot once, before touching any control.
static PROCESS_DEFAULTS: LazyLock<RwLock<CollectOptions>> =
    LazyLock::new(|| RwLock::new(CollectOptions::default()));

/// Merge `options` over the current process-wide defaults.
///
/// Affects every later collection that does not override the same keys.
pub fn set_default_process_options(options: CollectOptions) {
    let mut current = PROCESS_DEFAULTS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let previous = std::mem::take(&mut *current);
    *current = options.merge_over(previous);
    info!(options = ?*current, "process-wide collect options updated");
}

/// Snapshot of the current process-wide defaults.
pub fn default_process_options() -> CollectOptions {
    PROCESS_DEFAULTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Drop every process-wide override, back to the built-ins.
pub fn reset_default_process_options() {
    *PROCESS_DEFAULTS
        .write()
        .unwrap_or_else(PoisonError::into_inner) = CollectOptions::default();
    info!("process-wide collect options reset");
}
