//! Student portal: verifies a student's credentials, reports their payment
//! status, and unlocks the classroom only once fees are fully paid.

pub mod access;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod portal;
pub mod state;
pub mod store;
pub mod students;
pub mod telemetry;

#[cfg(test)]
mod test_support;
