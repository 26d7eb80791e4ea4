//! Process-wide holder for the configured payment client.

use std::sync::{Arc, OnceLock};

use helpcenter_types::RuntimeMode;

/// A single storage slot for a shared client instance.
///
/// Outside production the first constructed instance is stored and handed
/// back on every later access. In production the slot is never written and
/// each access constructs afresh; the server resolves its client once at
/// startup, so that path runs a single time per process.
///
/// First construction is guarded by `OnceLock`: concurrent cold accesses
/// never build two clients.
pub struct ClientSlot<C> {
    mode: RuntimeMode,
    cell: OnceLock<Arc<C>>,
}

impl<C> ClientSlot<C> {
    pub fn new(mode: RuntimeMode) -> Self {
        Self {
            mode,
            cell: OnceLock::new(),
        }
    }

    /// Returns the stored instance, constructing it with `init` if needed.
    pub fn get_or_init(&self, init: impl FnOnce() -> C) -> Arc<C> {
        if self.mode.is_production() {
            tracing::debug!("Constructing payment client (production, not cached)");
            return Arc::new(init());
        }

        self.cell
            .get_or_init(|| {
                tracing::debug!(mode = %self.mode, "Constructing cached payment client");
                Arc::new(init())
            })
            .clone()
    }

    /// Whether an instance has been stored.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
