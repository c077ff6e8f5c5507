use rust_decimal::Decimal;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Row of the `students` table as stored.
#[derive(Debug, Clone, FromRow)]
pub struct StudentRow {
    pub id: Uuid,
    pub student_id: String,
    pub name: String,
    pub password_hash: String,
    pub amount_to_be_paid: Option<Decimal>, // NULL only in malformed rows
    pub paid_amount: Option<Decimal>,
    pub created_at: OffsetDateTime,
}

/// Amounts owed and paid, compared exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    pub amount_to_be_paid: Decimal,
    pub paid_amount: Decimal,
}

/// A student as the access workflow sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub student_id: String,
    pub name: String,
    pub password_hash: String, // Argon2 PHC string
    /// `None` when the stored payment data is incomplete.
    pub payment: Option<Payment>,
}

impl From<StudentRow> for StudentRecord {
    fn from(r: StudentRow) -> Self {
        let payment = match (r.amount_to_be_paid, r.paid_amount) {
            (Some(amount_to_be_paid), Some(paid_amount)) => Some(Payment {
                amount_to_be_paid,
                paid_amount,
            }),
            _ => None,
        };
        Self {
            student_id: r.student_id,
            name: r.name,
            password_hash: r.password_hash,
            payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn row(amount_to_be_paid: Option<Decimal>, paid_amount: Option<Decimal>) -> StudentRow {
        StudentRow {
            id: Uuid::new_v4(),
            student_id: "20000".into(),
            name: "Kate".into(),
            password_hash: "$argon2id$stub".into(),
            amount_to_be_paid,
            paid_amount,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn complete_row_keeps_payment() {
        let record = StudentRecord::from(row(Some(dec(5000)), Some(Decimal::new(49995, 1))));
        assert_eq!(
            record.payment,
            Some(Payment {
                amount_to_be_paid: dec(5000),
                paid_amount: Decimal::new(49995, 1)
            })
        );
    }

    #[test]
    fn half_missing_payment_is_dropped() {
        assert_eq!(StudentRecord::from(row(Some(dec(5000)), None)).payment, None);
        assert_eq!(StudentRecord::from(row(None, Some(dec(5000)))).payment, None);
        assert_eq!(StudentRecord::from(row(None, None)).payment, None);
    }
}
