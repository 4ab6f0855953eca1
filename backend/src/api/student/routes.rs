//! Defines the HTTP routes for student profile management.
//!
//! These routes map profile edit, profile delete, and course assignment paths
//! to their handler functions, keyed by the student id path parameter.

use axum::routing::{delete, put};
use axum::Router;

use super::handlers::{assign_course, delete_profile, edit_profile};
use crate::AppState;

pub fn student_router() -> Router<AppState> {
    Router::new()
        .route("/:student_id/edit", put(edit_profile))
        .route("/:student_id/delete", delete(delete_profile))
        .route("/:student_id/assigncourse", put(assign_course))
}
