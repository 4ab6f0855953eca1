//! Handler functions for the student profile API.
//!
//! These functions process requests to edit or delete a student profile and
//! to assign courses, delegating to `services::student_manager` and shaping
//! the JSON responses. Responses expose a view of the record without the
//! stored password hash.

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::{Role, StudentRecord};
use crate::errors::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EditProfileRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignCourseRequest {
    pub course_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Client-facing view of a student record; the password hash stays internal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentView {
    pub uid: Uuid,
    pub username: String,
    pub role: Role,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub assigned_courses: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<StudentRecord> for StudentView {
    fn from(record: StudentRecord) -> Self {
        Self {
            uid: record.id,
            username: record.username,
            role: record.role,
            name: record.name,
            surname: record.surname,
            email: record.email,
            assigned_courses: record.assigned_courses,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EditProfileResponse {
    pub message: String,
    pub student: StudentView,
}

pub async fn edit_profile(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(request): Json<EditProfileRequest>,
) -> Result<Json<EditProfileResponse>, ApiError> {
    let student = state
        .students
        .edit_profile(student_id, request.username, request.password)
        .await?;
    Ok(Json(EditProfileResponse {
        message: "Student profile updated successfully".to_owned(),
        student: StudentView::from(student),
    }))
}

pub async fn delete_profile(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.students.delete_profile(student_id).await?;
    Ok(Json(MessageResponse {
        message: "Student profile deleted successfully".to_owned(),
    }))
}

pub async fn assign_course(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(request): Json<AssignCourseRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .students
        .assign_course(student_id, request.course_id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Course assigned to student successfully".to_owned(),
    }))
}
