//! Module for the student profile and course assignment API.
//!
//! This module defines the public interface and structure for maintaining
//! student accounts and their course enrollments through HTTP endpoints.

pub mod handlers;
pub mod routes;
