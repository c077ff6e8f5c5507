use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::students::repo_types::StudentRecord;

/// One entry of a seed file, in the portal's historical camelCase shape.
///
/// Every field is optional here so that a missing one can be reported by
/// name instead of as a generic parse failure.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub student_id: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub payment: Option<NewPayment>,
}

/// Amounts may be written as JSON numbers (`4999.5`) or strings (`"4999.50"`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub amount_to_be_paid: Option<Decimal>,
    pub paid_amount: Option<Decimal>,
}

/// Public part of a student returned to the client.
#[derive(Debug, Serialize)]
pub struct StudentProfile {
    pub student_id: String,
    pub name: String,
}

impl From<&StudentRecord> for StudentProfile {
    fn from(r: &StudentRecord) -> Self {
        Self {
            student_id: r.student_id.clone(),
            name: r.name.clone(),
        }
    }
}
