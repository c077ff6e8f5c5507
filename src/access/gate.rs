use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::{AccessError, StudentDirectory};

/// Payment state of a student as last stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Known {
        amount_to_be_paid: Decimal,
        paid_amount: Decimal,
    },
    /// No such student, or the stored payment data is incomplete.
    NotFound,
}

impl StudentDirectory {
    #[instrument(skip(self))]
    pub async fn check_payment(&self, student_id: &str) -> Result<PaymentStatus, AccessError> {
        let status = match self.find(student_id).await?.and_then(|r| r.payment) {
            Some(p) => PaymentStatus::Known {
                amount_to_be_paid: p.amount_to_be_paid,
                paid_amount: p.paid_amount,
            },
            None => PaymentStatus::NotFound,
        };
        debug!(?status, "payment checked");
        Ok(status)
    }
}

/// Fully paid (equality included) unlocks the classroom. Amounts compare
/// exactly, with no rounding.
pub fn is_classroom_unlocked(status: &PaymentStatus) -> bool {
    match *status {
        PaymentStatus::Known {
            amount_to_be_paid,
            paid_amount,
        } => paid_amount >= amount_to_be_paid,
        PaymentStatus::NotFound => false,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::store::memory::{DownStudentStore, SlowStudentStore};
    use crate::store::StoreError;
    use crate::test_support::{seeded_directory, seeded_store};

    fn known(
        amount_to_be_paid: impl Into<Decimal>,
        paid_amount: impl Into<Decimal>,
    ) -> PaymentStatus {
        PaymentStatus::Known {
            amount_to_be_paid: amount_to_be_paid.into(),
            paid_amount: paid_amount.into(),
        }
    }

    #[tokio::test]
    async fn scenario_a_fully_paid_unlocks() {
        let dir = seeded_directory().await;
        let status = dir.check_payment("20000").await.unwrap();
        assert_eq!(status, known(5000, 5000));
        assert!(is_classroom_unlocked(&status));
    }

    #[tokio::test]
    async fn scenario_b_partial_payment_stays_locked() {
        let dir = seeded_directory().await;
        let status = dir.check_payment("20001").await.unwrap();
        assert_eq!(status, known(6000, 5500));
        assert!(!is_classroom_unlocked(&status));
    }

    #[tokio::test]
    async fn unknown_student_is_not_found() {
        let dir = seeded_directory().await;
        assert_eq!(
            dir.check_payment("99999").await.unwrap(),
            PaymentStatus::NotFound
        );
    }

    #[tokio::test]
    async fn incomplete_payment_is_not_found() {
        let dir = seeded_directory().await;
        let status = dir.check_payment("20003").await.unwrap();
        assert_eq!(status, PaymentStatus::NotFound);
        assert!(!is_classroom_unlocked(&status));
    }

    #[tokio::test]
    async fn overpayment_is_kept_and_unlocks() {
        let dir = seeded_directory().await;
        let status = dir.check_payment("20004").await.unwrap();
        assert_eq!(status, known(3000, 3500));
        assert!(is_classroom_unlocked(&status));
    }

    #[tokio::test]
    async fn half_unit_short_stays_locked() {
        let dir = seeded_directory().await;
        let status = dir.check_payment("20005").await.unwrap();
        assert_eq!(status, known(5000, Decimal::new(49995, 1)));
        assert!(!is_classroom_unlocked(&status));
    }

    #[tokio::test]
    async fn repeated_checks_agree() {
        let dir = seeded_directory().await;
        for id in ["20000", "20001", "20003", "99999"] {
            let first = dir.check_payment(id).await.unwrap();
            let second = dir.check_payment(id).await.unwrap();
            assert_eq!(first, second, "{id}");
        }
    }

    #[tokio::test]
    async fn store_failure_is_distinct_from_not_found() {
        let dir = StudentDirectory::new(Arc::new(DownStudentStore), Duration::from_secs(1));
        let err = dir.check_payment("20000").await.unwrap_err();
        assert!(matches!(err, AccessError::LookupFailed(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_store_times_out() {
        let slow = SlowStudentStore {
            inner: seeded_store().await,
            delay: Duration::from_secs(10),
        };
        let dir = StudentDirectory::new(Arc::new(slow), Duration::from_secs(1));
        let err = dir.check_payment("20000").await.unwrap_err();
        assert!(matches!(
            err,
            AccessError::LookupFailed(StoreError::Timeout(_))
        ));
    }

    #[test]
    fn equality_unlocks_and_one_short_does_not() {
        for owed in [0_i64, 1, 5000, 6000, i64::MAX] {
            assert!(is_classroom_unlocked(&known(owed, owed)));
            if owed > 0 {
                assert!(!is_classroom_unlocked(&known(owed, owed - 1)));
                assert!(!is_classroom_unlocked(&known(owed, 0)));
            }
        }
    }

    #[test]
    fn fractional_amounts_compare_without_rounding() {
        let owed = Decimal::new(50000, 1); // 5000.0
        assert!(!is_classroom_unlocked(&known(owed, Decimal::new(49995, 1))));
        assert!(!is_classroom_unlocked(&known(owed, Decimal::new(499999, 2))));
        assert!(is_classroom_unlocked(&known(owed, Decimal::new(50000, 1))));
        assert!(is_classroom_unlocked(&known(owed, Decimal::from(5000))));
        assert!(is_classroom_unlocked(&known(owed, Decimal::new(500001, 2))));
    }

    #[test]
    fn more_payment_never_relocks() {
        let step = Decimal::new(5, 1);
        for owed in [0_i64, 1, 999, 6000] {
            let mut was_unlocked = false;
            let mut paid = Decimal::ZERO;
            while paid <= Decimal::from(owed + 50) {
                let unlocked = is_classroom_unlocked(&known(owed, paid));
                assert!(!(was_unlocked && !unlocked), "owed={owed} paid={paid}");
                was_unlocked = unlocked;
                paid += step;
            }
        }
    }

    #[test]
    fn not_found_never_unlocks() {
        assert!(!is_classroom_unlocked(&PaymentStatus::NotFound));
    }
}
