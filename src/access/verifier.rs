use tokio::task;
use tracing::{debug, error, instrument};

use super::{AccessError, StudentDirectory};
use crate::auth::password::{verify_against_dummy, verify_password};
use crate::students::repo_types::StudentRecord;

/// Outcome of matching a claimed identity against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Accepted(StudentRecord),
    Rejected,
}

impl Verification {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verification::Accepted(_))
    }
}

impl StudentDirectory {
    /// Identifier and password are compared exactly; an unknown identifier
    /// and a wrong password are indistinguishable to the caller.
    ///
    /// Argon2 runs on the blocking pool so concurrent logins do not stall
    /// the runtime's worker threads.
    #[instrument(skip(self, password))]
    pub async fn verify(
        &self,
        student_id: &str,
        password: &str,
    ) -> Result<Verification, AccessError> {
        let password = password.to_owned();
        let Some(record) = self.find(student_id).await? else {
            task::spawn_blocking(move || verify_against_dummy(&password)).await?;
            debug!("unknown student id");
            return Ok(Verification::Rejected);
        };

        let hash = record.password_hash.clone();
        let verdict = task::spawn_blocking(move || verify_password(&password, &hash)).await?;
        match verdict {
            Ok(true) => Ok(Verification::Accepted(record)),
            Ok(false) => {
                debug!("password mismatch");
                Ok(Verification::Rejected)
            }
            Err(e) => {
                error!(error = %e, "stored password hash is unreadable");
                Ok(Verification::Rejected)
            }
        }
    }
}
