use anyhow::Context;
use axum::{routing::get, Json, Router};
use fumi::GuestRecord;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod directory;
mod models;
mod routes;

use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub guests: Arc<Vec<GuestRecord>>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Fumi API is running - letters are sealed and waiting".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::guests::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fumi_server=info,tower_http=info")),
        )
        .init();

    tracing::info!("💌 Fumi API initializing...");

    let config = ServerConfig::from_env()?;
    let guests = directory::load(&config.guests_path)?;

    tracing::info!(
        "📖 Loaded {} guests from {:?}",
        guests.len(),
        config.guests_path
    );

    let state = AppState {
        guests: Arc::new(guests),
    };
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Fumi API ready on {}", config.bind_addr);

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState {
            guests: Arc::new(vec![
                GuestRecord::new("g-001", "鈴木太郎", "スズキタロウ", "太郎さんへ"),
                GuestRecord::new("g-002", "佐藤花子", "サトウハナコ", "花子さんへ"),
            ]),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_guests_in_directory_order_with_camel_case_keys() {
        let (status, body) = get_json("/api/guests").await;
        assert_eq!(status, StatusCode::OK);

        let guests = body.as_array().unwrap();
        assert_eq!(guests.len(), 2);
        assert_eq!(guests[0]["id"], "g-001");
        assert_eq!(guests[0]["kanjiName"], "鈴木太郎");
        assert_eq!(guests[1]["kanaName"], "サトウハナコ");

        // Same shape the client parses
        let records: Vec<GuestRecord> = serde_json::from_value(body).unwrap();
        assert_eq!(records[1].message, "花子さんへ");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_guests_path() {
        let (status, body) = get_json("/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/api/guests").is_some());
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/api/rsvp").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
