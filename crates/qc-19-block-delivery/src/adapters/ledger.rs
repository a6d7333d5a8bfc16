//! Ledger height tracked by the committer.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::domain::LedgerError;
use crate::ports::LedgerInfo;

/// Committed block count, advanced as blocks are committed.
#[derive(Debug, Default)]
pub struct LedgerHeightTracker {
    height: AtomicU64,
}

impl LedgerHeightTracker {
    /// Tracker starting at `height`.
    pub fn new(height: u64) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Current height.
    pub fn height(&self) -> u64 {
        self.height.load(Ordering::Acquire)
    }

    /// Record one committed block, returning the new height.
    pub fn commit_block(&self) -> u64 {
        self.height.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Overwrite the height, e.g. after a ledger rebuild.
    pub fn set_height(&self, height: u64) {
        self.height.store(height, Ordering::Release);
    }
}

#[async_trait]
impl LedgerInfo for LedgerHeightTracker {
    async fn ledger_height(&self) -> Result<u64, LedgerError> {
        Ok(self.height())
    }
}
