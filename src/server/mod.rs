//! HTTP front end: accepts an uploaded specification and returns the JSON report.

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::analyzer::RuleEngine;
use crate::loader::{SpecFormat, SpecLoader};
use crate::reporter::{ErrorReport, JsonReport};

type ApiError = (StatusCode, Json<ErrorReport>);

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze))
}

pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn analyze(mut multipart: Multipart) -> Result<Json<JsonReport>, ApiError> {
    let (filename, bytes) = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| bad_request(format!("Multipart error: {e}")))?
            .ok_or_else(|| bad_request("No file provided"))?;

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| bad_request(format!("Failed to read file: {e}")))?;
        break (filename, bytes);
    };

    let spec = SpecLoader::new()
        .parse(&bytes, SpecFormat::Auto)
        .map_err(|e| {
            warn!(file = %filename, error = %e, "Rejected uploaded specification");
            bad_request(e.to_string())
        })?;

    let findings = RuleEngine::new().run(&spec);
    info!(file = %filename, issues = findings.len(), "Analyzed uploaded specification");

    Ok(Json(JsonReport::from_findings(filename, &findings)))
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorReport::new(message)))
}
