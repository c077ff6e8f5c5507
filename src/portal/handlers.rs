use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use super::dto::{ClassroomResponse, PaymentResponse};
use crate::{
    access::{is_classroom_unlocked, PaymentStatus, StudentDirectory},
    auth::extractors::AuthStudent,
    error::ApiError,
    state::AppState,
};

pub fn portal_routes() -> Router<AppState> {
    Router::new()
        .route("/payment", get(get_payment))
        .route("/classroom", get(get_classroom))
}

#[instrument(skip(dir))]
pub async fn get_payment(
    State(dir): State<StudentDirectory>,
    AuthStudent(student_id): AuthStudent,
) -> Result<Json<PaymentResponse>, ApiError> {
    let status = dir.check_payment(&student_id).await?;
    let PaymentStatus::Known {
        amount_to_be_paid,
        paid_amount,
    } = status
    else {
        return Err(ApiError::NotFound);
    };

    Ok(Json(PaymentResponse {
        amount_to_be_paid,
        paid_amount,
        classroom_unlocked: is_classroom_unlocked(&status),
    }))
}

/// The classroom is re-gated on every request from freshly fetched data.
#[instrument(skip(state, dir))]
pub async fn get_classroom(
    State(state): State<AppState>,
    State(dir): State<StudentDirectory>,
    AuthStudent(student_id): AuthStudent,
) -> Result<Json<ClassroomResponse>, ApiError> {
    let status = dir.check_payment(&student_id).await?;
    if status == PaymentStatus::NotFound {
        return Err(ApiError::NotFound);
    }
    if !is_classroom_unlocked(&status) {
        info!("classroom locked");
        return Err(ApiError::ClassroomLocked);
    }

    info!("classroom unlocked");
    Ok(Json(ClassroomResponse {
        message: "Welcome to the Classroom!".into(),
        meeting_url: state.config.classroom_url.clone(),
    }))
}
