//! Manages student profiles and course assignment.
//!
//! This service carries the profile workflow: editing and deleting accounts,
//! and enrolling a student in a course while the three-course cap and the
//! no-duplicate rule hold. Handlers stay thin; persistence and the atomic
//! commit of the two-sided enrollment live in `database::queries`.

use uuid::Uuid;

use crate::auth::service::AuthService;
use crate::database::models::{StudentRecord, StudentUpdate};
use crate::database::Database;
use crate::errors::ApiError;

#[derive(Clone)]
pub struct StudentManager {
    db: Database,
    auth: AuthService,
}

impl StudentManager {
    pub fn new(db: Database, auth: AuthService) -> Self {
        Self { db, auth }
    }

    /// Replaces the submitted profile fields in place and returns the updated
    /// record. A submitted password is hashed exactly like registration before
    /// it is stored, so the account keeps working through login.
    pub async fn edit_profile(
        &self,
        student_id: Uuid,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<StudentRecord, ApiError> {
        let password_hash = match password {
            Some(ref plain) => Some(self.auth.hash_password(plain)?),
            None => None,
        };
        let update = StudentUpdate {
            username,
            password_hash,
        };
        let student = self.db.update_student(student_id, update).await?;
        tracing::info!(id = %student.id, "student profile updated");
        Ok(student)
    }

    pub async fn delete_profile(&self, student_id: Uuid) -> Result<(), ApiError> {
        self.db.delete_student(student_id).await?;
        tracing::info!(id = %student_id, "student profile deleted");
        Ok(())
    }

    /// Enrolls the student in the course. Check order and failure classes
    /// follow the store operation: missing student, course cap, duplicate
    /// assignment, missing course.
    pub async fn assign_course(&self, student_id: Uuid, course_id: Uuid) -> Result<(), ApiError> {
        self.db.assign_course(student_id, course_id).await?;
        tracing::info!(student = %student_id, course = %course_id, "course assigned");
        Ok(())
    }
}
