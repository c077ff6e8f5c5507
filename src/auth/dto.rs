use serde::{Deserialize, Serialize};

use crate::students::dto::StudentProfile;

/// Request body for login. Absent fields count as empty, which never matches.
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub student: StudentProfile,
}
