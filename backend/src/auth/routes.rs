//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle student registration and login. They are designed to
//! be merged into the main Axum router.

use axum::routing::post;
use axum::Router;

use super::handlers::{login_student, register_student};
use crate::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/Studentregister", post(register_student))
        .route("/Login", post(login_student))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::database::Database;

    fn test_app() -> Router {
        let mut config = AppConfig::default();
        config.auth.bcrypt_cost = 4;
        let state = AppState::new(Database::new(), &config);
        Router::new().merge(auth_router()).with_state(state)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn register_reports_the_chosen_username() {
        let app = test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/Studentregister",
                json!({"username": "amara", "password": "hunter2", "email": "amara@example.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("amara"));
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_server_error_with_a_safe_body() {
        let app = test_app();
        let payload = json!({"username": "amara", "password": "hunter2"});
        app.clone()
            .oneshot(json_request("POST", "/Studentregister", payload.clone()))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request("POST", "/Studentregister", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn login_returns_claims_and_token() {
        let app = test_app();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/Studentregister",
                json!({"username": "amara", "password": "hunter2"}),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "POST",
                "/Login",
                json!({"username": "amara", "password": "hunter2"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["message"], "Welcome amara");
        assert_eq!(body["loggedStudent"]["username"], "amara");
        assert_eq!(body["loggedStudent"]["role"], "STUDENT_ROLE");
        assert!(!body["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn bad_credentials_and_unknown_user_return_the_same_not_found() {
        let app = test_app();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/Studentregister",
                json!({"username": "amara", "password": "hunter2"}),
            ))
            .await
            .unwrap();

        let wrong_password = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/Login",
                json!({"username": "amara", "password": "wrong"}),
            ))
            .await
            .unwrap();
        let unknown_user = app
            .oneshot(json_request(
                "POST",
                "/Login",
                json!({"username": "nobody", "password": "hunter2"}),
            ))
            .await
            .unwrap();

        assert_eq!(wrong_password.status(), StatusCode::NOT_FOUND);
        assert_eq!(unknown_user.status(), StatusCode::NOT_FOUND);
        let first = response_json(wrong_password).await;
        let second = response_json(unknown_user).await;
        assert_eq!(first, second);
        assert_eq!(first["message"], "Invalid credentials");
    }
}
