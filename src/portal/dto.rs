use rust_decimal::Decimal;
use serde::Serialize;

/// Amounts serialize as decimal strings so no precision is lost.
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub amount_to_be_paid: Decimal,
    pub paid_amount: Decimal,
    pub classroom_unlocked: bool,
}

#[derive(Debug, Serialize)]
pub struct ClassroomResponse {
    pub message: String,
    pub meeting_url: Option<String>,
}
