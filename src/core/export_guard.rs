//! Single-flight gate around the attendance export.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "button disabled" flag. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct ExportGuard {
    busy: Arc<AtomicBool>,
}

/// Held while an export runs. Dropping it re-enables exports, also when
/// the export failed.
#[derive(Debug)]
pub struct ExportTicket {
    busy: Arc<AtomicBool>,
}

impl ExportGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while another export is pending.
    pub fn try_begin(&self) -> Option<ExportTicket> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ExportTicket {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for ExportTicket {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
