//! Core business logic for the authentication system.
//!
//! This service handles student creation, password hashing, token issuance,
//! and credential validation. It orchestrates interactions between handlers
//! and the store, and is the only place plaintext passwords are handled.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};

use super::errors::AuthError;
use super::models::{Claims, LoggedStudent, LoginRequest, RegisterRequest};
use crate::config::AuthConfig;
use crate::database::models::StudentRecord;
use crate::database::Database;

/// Credential and token service backing registration and login.
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    token_secret: String,
    token_ttl_secs: u64,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(db: Database, config: &AuthConfig) -> Self {
        Self {
            db,
            token_secret: config.token_secret.clone(),
            token_ttl_secs: config.token_ttl_secs,
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    /// Hashes a plaintext password with the configured work factor.
    pub fn hash_password(&self, plain: &str) -> Result<String, AuthError> {
        Ok(bcrypt::hash(plain, self.bcrypt_cost)?)
    }

    pub fn verify_password(&self, plain: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(bcrypt::verify(plain, hash)?)
    }

    /// Signs a time-bound token carrying the student's identity claims.
    pub fn issue_token(&self, student: &StudentRecord) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            uid: student.id,
            username: student.username.clone(),
            role: student.role,
            iat: now,
            exp: now + self.token_ttl_secs as i64,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.token_secret.as_bytes()),
        )?;
        Ok(token)
    }

    pub fn decode_token(&self, token: &str) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.token_secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }

    /// Registers a new student: hashes the password, applies the student role,
    /// and persists the record. The username must be unused.
    pub async fn register(&self, request: RegisterRequest) -> Result<StudentRecord, AuthError> {
        let password_hash = self.hash_password(&request.password)?;
        let mut student = StudentRecord::new(request.username, password_hash);
        student.name = request.name;
        student.surname = request.surname;
        student.email = request.email;
        Ok(self.db.insert_student(student).await?)
    }

    /// Verifies the submitted credentials and issues a token. An unknown
    /// username and a wrong password produce the same error.
    pub async fn login(&self, request: &LoginRequest) -> Result<(LoggedStudent, String), AuthError> {
        let student = self
            .db
            .find_student_by_username(&request.username)
            .await
            .ok_or(AuthError::InvalidCredentials)?;
        if !self.verify_password(&request.password, &student.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }
        let token = self.issue_token(&student)?;
        Ok((LoggedStudent::from(&student), token))
    }
}
