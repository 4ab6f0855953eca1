//! Rust structs that represent stored student and course records.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the document store. Note that these may differ from API-specific
//! models; responses never serialize a stored password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of courses a student may hold at once.
pub const MAX_ASSIGNED_COURSES: usize = 3;

/// Role attached to every account created through registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "STUDENT_ROLE")]
    Student,
}

/// A student account as persisted in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub assigned_courses: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl StudentRecord {
    /// Builds a fresh record with a generated id and the student role applied.
    /// The caller supplies an already-hashed password; plaintext never reaches
    /// the store.
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            role: Role::Student,
            name: None,
            surname: None,
            email: None,
            assigned_courses: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// A course as persisted in the store. Courses are created outside the HTTP
/// API; this backend only reads them and appends enrolled students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: Uuid,
    pub name: String,
    pub students: Vec<Uuid>,
}

impl CourseRecord {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            students: Vec::new(),
        }
    }
}

/// Field-level changes applied to a stored student. `None` leaves the
/// corresponding field untouched.
#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    pub username: Option<String>,
    pub password_hash: Option<String>,
}
