use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, instrument};

use crate::auth::password::hash_password;
use crate::store::{StoreError, StudentStore};
use crate::students::{
    dto::NewStudent,
    repo_types::{Payment, StudentRecord},
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("entry {index}: missing required field `{field}`")]
    Missing { index: usize, field: &'static str },
    #[error("entry {index}: student id {value:?} is not numeric")]
    InvalidStudentId { index: usize, value: String },
    #[error("entry {index}: `{field}` must not be negative")]
    NegativeAmount { index: usize, field: &'static str },
    #[error("entry {index}: could not hash password: {reason}")]
    Hash { index: usize, reason: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub(crate) fn is_valid_student_id(student_id: &str) -> bool {
    lazy_static! {
        static ref STUDENT_ID_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
    }
    STUDENT_ID_RE.is_match(student_id)
}

fn required(
    value: Option<String>,
    index: usize,
    field: &'static str,
) -> Result<String, SeedError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(SeedError::Missing { index, field })
}

fn amount(
    value: Option<Decimal>,
    index: usize,
    field: &'static str,
) -> Result<Decimal, SeedError> {
    match value {
        None => Err(SeedError::Missing { index, field }),
        Some(v) if v < Decimal::ZERO => Err(SeedError::NegativeAmount { index, field }),
        Some(v) => Ok(v),
    }
}

/// Validate one seed entry and hash its password.
///
/// Overpayment is accepted; only presence and sign are checked.
pub fn prepare_student(index: usize, seed: NewStudent) -> Result<StudentRecord, SeedError> {
    let student_id = required(seed.student_id, index, "studentId")?;
    if !is_valid_student_id(&student_id) {
        return Err(SeedError::InvalidStudentId {
            index,
            value: student_id,
        });
    }
    let name = required(seed.name, index, "name")?;
    let password = required(seed.password, index, "password")?;
    let payment = seed.payment.ok_or(SeedError::Missing {
        index,
        field: "payment",
    })?;
    let payment = Payment {
        amount_to_be_paid: amount(payment.amount_to_be_paid, index, "payment.amountToBePaid")?,
        paid_amount: amount(payment.paid_amount, index, "payment.paidAmount")?,
    };
    let password_hash =
        hash_password(&password).map_err(|e| SeedError::Hash {
            index,
            reason: e.to_string(),
        })?;

    Ok(StudentRecord {
        student_id,
        name,
        password_hash,
        payment: Some(payment),
    })
}

/// Validate the whole batch, then insert it in one call.
///
/// Nothing is written if any entry is invalid or any id is already taken.
#[instrument(skip(store, seeds), fields(count = seeds.len()))]
pub async fn register_students(
    store: &dyn StudentStore,
    seeds: Vec<NewStudent>,
) -> Result<usize, SeedError> {
    let records = seeds
        .into_iter()
        .enumerate()
        .map(|(i, s)| prepare_student(i, s))
        .collect::<Result<Vec<_>, _>>()?;
    store.insert(&records).await?;
    info!(inserted = records.len(), "students registered");
    Ok(records.len())
}
