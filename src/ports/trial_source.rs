//! Trial Source Port - where empirical trial records come from and go to.
//!
//! The payoff model consumes trial records without caring whether they were
//! read from a file or produced by the flood simulator on the spot.

use crate::domain::foundation::DomainError;
use crate::domain::payoff::TrialRecord;

/// Port for loading trial records.
///
/// # Contract
///
/// Implementations must:
/// - Return every record of the source, in source order
/// - Fail with `ErrorCode::InvalidTrialRecord` for malformed input
/// - Fail with `ErrorCode::IoError` when the source cannot be read
pub trait TrialSource {
    fn load_trials(&self) -> Result<Vec<TrialRecord>, DomainError>;
}

/// Port for persisting trial records so a later run can re-read them.
pub trait TrialSink {
    fn write_trials(&self, records: &[TrialRecord]) -> Result<(), DomainError>;
}
