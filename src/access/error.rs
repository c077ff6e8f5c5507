use thiserror::Error;
use tokio::task::JoinError;

use crate::store::StoreError;

/// Failure to reach a verdict about a student.
///
/// Bad credentials and missing payment data are ordinary outcomes
/// ([`super::Verification::Rejected`], [`super::PaymentStatus::NotFound`]),
/// never errors, so a caller can always tell "wrong" from "could not check".
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("student lookup failed")]
    LookupFailed(#[from] StoreError),
    /// The blocking password check panicked or was cancelled.
    #[error("password check did not complete")]
    CheckAborted(#[from] JoinError),
}
