//! Access-gating workflow: identity verification, then payment-based
//! unlocking of the classroom.
//!
//! Nothing here keeps state between calls. Each operation re-fetches the
//! student through the injected [`StudentStore`], so the workflow can be
//! re-entered at any step with the same identifier.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;

use crate::state::AppState;
use crate::store::{StoreError, StudentStore};
use crate::students::repo_types::StudentRecord;

mod error;
mod gate;
mod verifier;

pub use error::AccessError;
pub use gate::{is_classroom_unlocked, PaymentStatus};
pub use verifier::Verification;

/// Handle the workflow runs against: a store plus the lookup deadline.
#[derive(Clone)]
pub struct StudentDirectory {
    store: Arc<dyn StudentStore>,
    lookup_timeout: Duration,
}

impl StudentDirectory {
    pub fn new(store: Arc<dyn StudentStore>, lookup_timeout: Duration) -> Self {
        Self {
            store,
            lookup_timeout,
        }
    }

    /// Fetch a student, bounded by the lookup deadline.
    pub async fn find(&self, student_id: &str) -> Result<Option<StudentRecord>, AccessError> {
        let found = tokio::time::timeout(
            self.lookup_timeout,
            self.store.find_by_student_id(student_id),
        )
        .await
        .map_err(|_| StoreError::Timeout(self.lookup_timeout))??;
        Ok(found)
    }
}

impl FromRef<AppState> for StudentDirectory {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.store.clone(), state.config.lookup_timeout())
    }
}
