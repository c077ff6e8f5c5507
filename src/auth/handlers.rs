use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    access::{StudentDirectory, Verification},
    auth::{
        dto::{LoginRequest, LoginResponse},
        extractors::AuthStudent,
        jwt::JwtKeys,
    },
    error::ApiError,
    state::AppState,
    students::dto::StudentProfile,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(dir, keys, payload), fields(student_id = %payload.student_id))]
pub async fn login(
    State(dir): State<StudentDirectory>,
    State(keys): State<JwtKeys>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let record = match dir.verify(&payload.student_id, &payload.password).await? {
        Verification::Accepted(record) => record,
        Verification::Rejected => {
            warn!("login rejected");
            return Err(ApiError::Rejected);
        }
    };

    let access_token = keys.sign(&record.student_id).map_err(ApiError::Internal)?;

    info!("student logged in");
    Ok(Json(LoginResponse {
        access_token,
        student: StudentProfile::from(&record),
    }))
}

#[instrument(skip(dir))]
pub async fn get_me(
    State(dir): State<StudentDirectory>,
    AuthStudent(student_id): AuthStudent,
) -> Result<Json<StudentProfile>, ApiError> {
    match dir.find(&student_id).await? {
        Some(record) => Ok(Json(StudentProfile::from(&record))),
        None => {
            warn!("token names a student that no longer exists");
            Err(ApiError::Unauthorized(
                "Session is no longer valid, please log in again",
            ))
        }
    }
}
