//! Module for store setup and the shared database handle.
//!
//! This module initializes the in-process document store and provides the
//! cloneable handle the rest of the application works through. Students and
//! courses live behind a single lock so operations that span both collections
//! commit as one unit.

pub mod models;
pub mod queries;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use models::{CourseRecord, StudentRecord};

/// Both collections, guarded together. Multi-aggregate updates such as course
/// assignment take one write guard over this struct and therefore cannot
/// interleave or half-apply.
#[derive(Debug, Default)]
struct Collections {
    students: HashMap<Uuid, StudentRecord>,
    courses: HashMap<Uuid, CourseRecord>,
}

/// Cloneable handle to the document store. All query functions live in
/// [`queries`].
#[derive(Debug, Clone, Default)]
pub struct Database {
    inner: Arc<RwLock<Collections>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }
}
