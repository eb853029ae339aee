use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use wordgrid::render;
use wordgrid::{Dictionary, GenError, Params, Word};

#[derive(Deserialize)]
struct GenerateRequest {
    seed: Option<String>,
    word_count: Option<i64>,
    /// Custom dictionary; the bundled list when absent.
    words: Option<Vec<String>>,
    params: Option<Params>,
}

#[derive(Serialize, Debug)]
struct GenerateResponse {
    seed: String,
    width: usize,
    height: usize,
    rows: Vec<String>,
    words: Vec<Word>,
    skipped: Vec<String>,
    solution: String,
    timings: Vec<TimingEntry>,
}

#[derive(Serialize, Debug)]
struct TimingEntry {
    name: String,
    ms: f64,
}

/// Maps generation failures onto HTTP responses.
#[derive(Debug)]
enum AppError {
    Gen(GenError),
    Internal(String),
}

impl From<GenError> for AppError {
    fn from(e: GenError) -> Self {
        AppError::Gen(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Gen(GenError::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg)
            }
            AppError::Gen(e) => (StatusCode::INTERNAL_SERVER_ERROR, "GENERATION_FAILED", e.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", msg),
        };
        log::warn!("request failed: {code} {message}");
        (status, Json(json!({ "error": code, "message": message }))).into_response()
    }
}

fn data_url(png: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(png);
    format!("data:image/png;base64,{}", b64)
}

fn build_response(req: GenerateRequest) -> Result<GenerateResponse, GenError> {
    let seed = req.seed.unwrap_or_else(|| "1234567890".to_string());
    let word_count = req.word_count.unwrap_or(10);
    let params = req.params.unwrap_or_default();
    let dict = match req.words {
        Some(words) => Dictionary::new(words)?,
        None => Dictionary::builtin(),
    };

    let (puzzle, timings) = wordgrid::generate_timed(word_count, &seed, &dict, &params)?;
    let png = render::encode_png(&render::render_solution(&puzzle, 24))?;
    let doc = puzzle.document();

    Ok(GenerateResponse {
        seed: doc.seed,
        width: doc.width,
        height: doc.height,
        rows: doc.rows,
        words: doc.words,
        skipped: doc.skipped,
        solution: data_url(&png),
        timings: timings
            .iter()
            .map(|t| TimingEntry {
                name: t.name.to_string(),
                ms: t.ms,
            })
            .collect(),
    })
}

async fn generate_handler(Json(req): Json<GenerateRequest>) -> Result<Json<GenerateResponse>, AppError> {
    let response = tokio::task::spawn_blocking(move || build_response(req))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(Json(response))
}

fn app() -> Router {
    Router::new()
        .route("/api/generate", post(generate_handler))
        .layer(CorsLayer::permissive())
        .fallback_service(ServeDir::new("frontend"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let addr: SocketAddr = std::env::var("WORDGRID_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;
    log::info!("wordgrid server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> GenerateRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let resp = build_response(request("{}")).unwrap();
        assert_eq!(resp.seed, "1234567890");
        assert_eq!(resp.rows.len(), resp.height);
        assert!(resp.height <= resp.width);
        assert!(resp.solution.starts_with("data:image/png;base64,"));
        assert_eq!(resp.timings.last().map(|t| t.name.as_str()), Some("TOTAL"));
    }

    #[test]
    fn custom_words_are_used() {
        let resp = build_response(request(r#"{"seed":"s","word_count":0,"words":["cat"]}"#)).unwrap();
        assert_eq!(resp.words.len(), 1);
        assert_eq!(resp.words[0].text, "CAT");
    }

    #[test]
    fn empty_word_list_is_bad_request() {
        let err = build_response(request(r#"{"words":[]}"#)).unwrap_err();
        assert!(matches!(err, GenError::InvalidInput(_)));
        let resp = AppError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_params_are_bad_request() {
        let err = build_response(request(r#"{"params":{"attach_chance":3.0}}"#)).unwrap_err();
        assert!(matches!(err, GenError::InvalidInput(_)));
    }
}
