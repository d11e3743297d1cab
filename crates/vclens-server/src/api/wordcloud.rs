use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use vclens_analytics::WordCloud;

use crate::middleware::RequestId;

use super::{
    resolve_dataset, require_column, ApiError, ApiResponse, AppState, ResponseMeta,
    MAX_CLOUD_WORDS,
};

#[derive(Debug, Deserialize)]
pub(super) struct WordCloudQuery {
    /// Explicit regenerate trigger; without it the last render is reused.
    #[serde(default)]
    pub regenerate: bool,
}

pub(super) async fn get_word_cloud(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
    Query(query): Query<WordCloudQuery>,
) -> Result<Json<ApiResponse<WordCloud>>, ApiError> {
    let dataset = resolve_dataset(&state, &req_id.0, &slug)?;
    require_column(
        dataset.has_clean_text,
        &req_id.0,
        "no cleaned text in this dataset",
    )?;

    let mut clouds = state.word_clouds.lock().await;

    if !query.regenerate {
        if let Some(cloud) = clouds.get(&slug) {
            return Ok(Json(ApiResponse {
                data: cloud.clone(),
                meta: ResponseMeta::new(req_id.0),
            }));
        }
    }

    let cloud = vclens_analytics::build_word_cloud(&dataset.rows, MAX_CLOUD_WORDS);
    if cloud.words.is_empty() {
        return Err(ApiError::new(
            &req_id.0,
            "no_data",
            "no text available for the word cloud",
        ));
    }

    clouds.insert(slug, cloud.clone());

    Ok(Json(ApiResponse {
        data: cloud,
        meta: ResponseMeta::new(req_id.0),
    }))
}
