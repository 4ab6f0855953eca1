//! Data structures for authentication-related entities.
//!
//! This module defines models for registration and login payloads, JWT claims,
//! and the identity record returned to a logged-in student, used for data
//! transfer and internal representation within the authentication flow.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::{Role, StudentRecord};

/// Registration payload. There is intentionally no `role` field: whatever a
/// caller submits is dropped during deserialization and every account is
/// constructed with the student role.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub uid: Uuid,
    pub username: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Minimal identity record returned alongside a token at login.
#[derive(Debug, Clone, Serialize)]
pub struct LoggedStudent {
    pub uid: Uuid,
    pub username: String,
    pub role: Role,
}

impl From<&StudentRecord> for LoggedStudent {
    fn from(student: &StudentRecord) -> Self {
        Self {
            uid: student.id,
            username: student.username.clone(),
            role: student.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub logged_student: LoggedStudent,
    pub token: String,
}
