//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for different API domains,
//! such as student profile management, excluding core authentication routes
//! which are handled separately.

pub mod student;
