mod videos;
mod views;
mod wordcloud;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use vclens_analytics::WordCloud;
use vclens_core::VideoCatalog;
use vclens_store::{Dataset, DatasetCache, StoreError};

use crate::middleware::{request_id, RequestId};

/// Rows shown in the summary preview.
pub(super) const PREVIEW_ROWS: usize = 10;
/// Top-liked comments listed per sentiment label.
pub(super) const TOP_PER_LABEL: usize = 5;
/// Token cap handed to the word-cloud renderer.
pub(super) const MAX_CLOUD_WORDS: usize = 200;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<VideoCatalog>,
    pub data_dir: PathBuf,
    pub cache: DatasetCache,
    /// Last generated cloud per video slug; reused until an explicit
    /// regenerate trigger.
    pub word_clouds: Arc<Mutex<HashMap<String, WordCloud>>>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<VideoCatalog>, data_dir: PathBuf) -> Self {
        Self {
            catalog,
            data_dir,
            cache: DatasetCache::new(),
            word_clouds: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    videos: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            // A view whose required column is absent degrades with a warning
            // instead of failing the whole dashboard.
            "no_data" => StatusCode::UNPROCESSABLE_ENTITY,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Resolve a catalog slug to its cached dataset.
pub(super) fn resolve_dataset(
    state: &AppState,
    request_id: &str,
    slug: &str,
) -> Result<Arc<Dataset>, ApiError> {
    let video = state.catalog.find(slug).ok_or_else(|| {
        ApiError::new(request_id, "not_found", format!("unknown video '{slug}'"))
    })?;

    let path = state.data_dir.join(video.enriched_csv_name());
    state.cache.get_or_load(&path).map_err(|e| match e {
        StoreError::NotFound { .. } => ApiError::new(
            request_id,
            "not_found",
            format!("no dataset for '{slug}'; run collect and label first"),
        ),
        other => {
            tracing::error!(slug, error = %other, "dataset load failed");
            ApiError::new(request_id, "internal_error", "failed to load dataset")
        }
    })
}

/// Degrade a single view when its required column is absent.
pub(super) fn require_column(
    present: bool,
    request_id: &str,
    message: &str,
) -> Result<(), ApiError> {
    if present {
        Ok(())
    } else {
        Err(ApiError::new(request_id, "no_data", message))
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/videos", get(videos::list_videos))
        .route("/api/v1/videos/{slug}/summary", get(views::get_summary))
        .route(
            "/api/v1/videos/{slug}/wordcloud",
            get(wordcloud::get_word_cloud),
        )
        .route(
            "/api/v1/videos/{slug}/sentiment",
            get(views::get_sentiment_distribution),
        )
        .route(
            "/api/v1/videos/{slug}/comments/top",
            get(views::get_top_comments),
        )
        .route(
            "/api/v1/videos/{slug}/likes",
            get(views::get_likes_by_sentiment),
        )
        .route("/api/v1/videos/{slug}/trend", get(views::get_daily_trend))
        .route("/api/v1/videos/{slug}/verdict", get(views::get_verdict))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            videos: state.catalog.videos.len(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
