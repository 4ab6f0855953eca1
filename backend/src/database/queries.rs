//! Store query functions (Data Access Objects).
//!
//! This module centralizes all direct store operations, providing reusable
//! functions for reading and mutating student and course records and
//! abstracting the access logic from higher-level services and API handlers.
//! Every mutation holds the write guard for its whole read-modify-write, so
//! checked invariants (unique usernames, the course cap) hold under
//! concurrent requests.

use uuid::Uuid;

use super::models::{CourseRecord, StudentRecord, StudentUpdate, MAX_ASSIGNED_COURSES};
use super::Database;

/// Errors produced by store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatabaseError {
    #[error("student not found")]
    StudentNotFound,

    #[error("course not found")]
    CourseNotFound,

    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),

    #[error("student already holds the maximum number of assigned courses")]
    CourseCapReached,

    #[error("course is already assigned to this student")]
    CourseAlreadyAssigned,
}

impl Database {
    /// Persists a new student. The username must not be in use by any other
    /// record.
    pub async fn insert_student(
        &self,
        student: StudentRecord,
    ) -> Result<StudentRecord, DatabaseError> {
        let mut guard = self.inner.write().await;
        if guard.students.values().any(|s| s.username == student.username) {
            return Err(DatabaseError::DuplicateUsername(student.username));
        }
        guard.students.insert(student.id, student.clone());
        Ok(student)
    }

    pub async fn find_student(&self, id: Uuid) -> Option<StudentRecord> {
        self.inner.read().await.students.get(&id).cloned()
    }

    pub async fn find_student_by_username(&self, username: &str) -> Option<StudentRecord> {
        self.inner
            .read()
            .await
            .students
            .values()
            .find(|s| s.username == username)
            .cloned()
    }

    /// Applies the submitted field changes to a stored student and returns the
    /// updated record. Fields left as `None` are untouched. A username change
    /// is rejected if another record already holds that name.
    pub async fn update_student(
        &self,
        id: Uuid,
        update: StudentUpdate,
    ) -> Result<StudentRecord, DatabaseError> {
        let mut guard = self.inner.write().await;
        if let Some(ref username) = update.username {
            if guard
                .students
                .values()
                .any(|s| s.id != id && s.username == *username)
            {
                return Err(DatabaseError::DuplicateUsername(username.clone()));
            }
        }
        let student = guard
            .students
            .get_mut(&id)
            .ok_or(DatabaseError::StudentNotFound)?;
        if let Some(username) = update.username {
            student.username = username;
        }
        if let Some(password_hash) = update.password_hash {
            student.password_hash = password_hash;
        }
        Ok(student.clone())
    }

    pub async fn delete_student(&self, id: Uuid) -> Result<(), DatabaseError> {
        let mut guard = self.inner.write().await;
        guard
            .students
            .remove(&id)
            .map(|_| ())
            .ok_or(DatabaseError::StudentNotFound)
    }

    /// Persists a new course. Course creation is not exposed over HTTP; this
    /// is used by startup seeding and tests.
    pub async fn insert_course(&self, name: &str) -> CourseRecord {
        let course = CourseRecord::new(name);
        let mut guard = self.inner.write().await;
        guard.courses.insert(course.id, course.clone());
        course
    }

    pub async fn find_course(&self, id: Uuid) -> Option<CourseRecord> {
        self.inner.read().await.courses.get(&id).cloned()
    }

    /// Assigns a course to a student, appending each aggregate's reference to
    /// the other. Checks run in order and the first failure wins: student
    /// exists, cap not reached, course not already assigned, course exists.
    /// The whole sequence executes under one write guard, so two concurrent
    /// assignments cannot both pass the cap check and the two reference lists
    /// cannot diverge.
    pub async fn assign_course(
        &self,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), DatabaseError> {
        let mut guard = self.inner.write().await;
        {
            let student = guard
                .students
                .get(&student_id)
                .ok_or(DatabaseError::StudentNotFound)?;
            if student.assigned_courses.len() >= MAX_ASSIGNED_COURSES {
                return Err(DatabaseError::CourseCapReached);
            }
            if student.assigned_courses.contains(&course_id) {
                return Err(DatabaseError::CourseAlreadyAssigned);
            }
        }
        if !guard.courses.contains_key(&course_id) {
            return Err(DatabaseError::CourseNotFound);
        }

        let student = guard
            .students
            .get_mut(&student_id)
            .ok_or(DatabaseError::StudentNotFound)?;
        student.assigned_courses.push(course_id);
        let course = guard
            .courses
            .get_mut(&course_id)
            .ok_or(DatabaseError::CourseNotFound)?;
        course.students.push(student_id);
        Ok(())
    }
}
