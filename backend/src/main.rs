//! Main entry point for the Rollbook backend.
//!
//! This file initializes the Axum web server, sets up the document store,
//! and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall structure.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod middleware;
mod services;

use axum::{routing::get, Router};

use auth::service::AuthService;
use config::AppConfig;
use database::Database;
use services::student_manager::StudentManager;

/// Shared application state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub students: StudentManager,
}

impl AppState {
    pub fn new(db: Database, config: &AppConfig) -> Self {
        let auth = AuthService::new(db.clone(), &config.auth);
        let students = StudentManager::new(db, auth.clone());
        Self { auth, students }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            std::process::exit(1);
        }
    };

    let db = Database::new();
    seed_courses(&db).await;

    let state = AppState::new(db, &config);
    let app = Router::new()
        .route("/", get(root_handler))
        .merge(auth::routes::auth_router())
        .merge(api::student::routes::student_router())
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(state);

    let addr = config.bind_addr();
    tracing::info!(%addr, "listening");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

async fn root_handler() -> &'static str {
    "Welcome to Rollbook!"
}

/// Courses are managed outside this API. A fresh process seeds a few so the
/// assignment endpoint is usable immediately; their ids are logged.
async fn seed_courses(db: &Database) {
    for name in ["Algebra I", "World History", "Organic Chemistry"] {
        let course = db.insert_course(name).await;
        tracing::info!(id = %course.id, name, "seeded course");
    }
}
