//! Seek request selection.

use shared_types::{SeekInfo, SeekPosition};

/// Seek request resuming a ledger of the given height.
///
/// A ledger of height `h` holds blocks `0..h`, so the next block needed is
/// `h`. An empty ledger starts from the oldest block. Either way the stream
/// is unbounded and waits for blocks not yet committed.
pub fn seek_info_for_height(height: u64) -> SeekInfo {
    if height > 0 {
        SeekInfo::stream_from(SeekPosition::Specified(height))
    } else {
        SeekInfo::stream_from(SeekPosition::Oldest)
    }
}
