//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for student authentication
//! (login, registration), parse request data, and interact with the
//! `auth::service` for core business logic.

use axum::extract::State;
use axum::Json;

use super::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::errors::ApiError;
use crate::AppState;

pub async fn register_student(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let student = state.auth.register(request).await?;
    tracing::info!(id = %student.id, username = %student.username, "student registered");
    Ok(Json(RegisterResponse {
        message: format!(
            "Registered successfully, can log in with username {}",
            student.username
        ),
    }))
}

pub async fn login_student(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (logged_student, token) = state.auth.login(&request).await?;
    tracing::info!(username = %logged_student.username, "student logged in");
    Ok(Json(LoginResponse {
        message: format!("Welcome {}", logged_student.username),
        logged_student,
        token,
    }))
}
