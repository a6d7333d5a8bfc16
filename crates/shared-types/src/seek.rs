//! # Seek Requests
//!
//! Describes which block range a deliver client wants streamed and whether
//! the service should wait for blocks that do not exist yet.

use serde::{Deserialize, Serialize};

/// Where a block range starts or stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeekPosition {
    /// First block of the channel (genesis).
    Oldest,
    /// Most recently committed block.
    Newest,
    /// Explicit block number.
    Specified(u64),
}

impl SeekPosition {
    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            SeekPosition::Oldest => "oldest",
            SeekPosition::Newest => "newest",
            SeekPosition::Specified(_) => "specified",
        }
    }
}

/// What the service does when the requested block is not yet available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeekBehavior {
    /// Hold the stream open until the block is committed.
    BlockUntilReady,
    /// Fail the request immediately.
    FailIfNotReady,
}

/// Block range request sent as `DELIVER_SEEK_INFO` payload data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekInfo {
    /// First block to deliver.
    pub start: SeekPosition,
    /// Last block to deliver (inclusive).
    pub stop: SeekPosition,
    /// Behavior for not-yet-committed blocks.
    pub behavior: SeekBehavior,
}

impl SeekInfo {
    /// Stream from `start` with no upper bound, waiting for new blocks.
    pub fn stream_from(start: SeekPosition) -> Self {
        Self {
            start,
            stop: SeekPosition::Specified(u64::MAX),
            behavior: SeekBehavior::BlockUntilReady,
        }
    }
}
