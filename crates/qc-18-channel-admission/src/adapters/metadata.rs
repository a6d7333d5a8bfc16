//! Metadata validator for consensus types without consensus metadata.

use crate::domain::MetadataError;
use crate::ports::MetadataValidator;

/// Accepts every metadata transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAllMetadataValidator;

impl MetadataValidator for AcceptAllMetadataValidator {
    fn validate_consensus_metadata(
        &self,
        _old: &[u8],
        _new: &[u8],
        _is_new_channel: bool,
    ) -> Result<(), MetadataError> {
        Ok(())
    }
}
