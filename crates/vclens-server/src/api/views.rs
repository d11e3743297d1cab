use axum::{
    extract::{Path, State},
    Extension, Json,
};

use vclens_analytics::{
    DistributionSlice, LikesBySentiment, SummaryView, TopCommentsBlock, TrendSeries, VerdictView,
};

use crate::middleware::RequestId;

use super::{
    resolve_dataset, require_column, ApiError, ApiResponse, AppState, ResponseMeta, PREVIEW_ROWS,
    TOP_PER_LABEL,
};

pub(super) async fn get_summary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<SummaryView>>, ApiError> {
    let dataset = resolve_dataset(&state, &req_id.0, &slug)?;
    Ok(Json(ApiResponse {
        data: vclens_analytics::summary(&dataset.rows, PREVIEW_ROWS),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_sentiment_distribution(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Vec<DistributionSlice>>>, ApiError> {
    let dataset = resolve_dataset(&state, &req_id.0, &slug)?;
    require_column(
        dataset.has_sentiment,
        &req_id.0,
        "no sentiment data in this dataset",
    )?;
    Ok(Json(ApiResponse {
        data: vclens_analytics::sentiment_distribution(&dataset.rows),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_top_comments(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Vec<TopCommentsBlock>>>, ApiError> {
    let dataset = resolve_dataset(&state, &req_id.0, &slug)?;
    require_column(
        dataset.has_likes,
        &req_id.0,
        "no like counts in this dataset",
    )?;
    Ok(Json(ApiResponse {
        data: vclens_analytics::top_comments(&dataset.rows, TOP_PER_LABEL),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_likes_by_sentiment(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Vec<LikesBySentiment>>>, ApiError> {
    let dataset = resolve_dataset(&state, &req_id.0, &slug)?;
    require_column(
        dataset.has_likes,
        &req_id.0,
        "no like counts in this dataset",
    )?;
    require_column(
        dataset.has_sentiment,
        &req_id.0,
        "no sentiment data in this dataset",
    )?;
    Ok(Json(ApiResponse {
        data: vclens_analytics::likes_by_sentiment(&dataset.rows),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_daily_trend(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Vec<TrendSeries>>>, ApiError> {
    let dataset = resolve_dataset(&state, &req_id.0, &slug)?;
    require_column(
        dataset.has_dates,
        &req_id.0,
        "no publication dates in this dataset",
    )?;
    Ok(Json(ApiResponse {
        data: vclens_analytics::daily_trend(&dataset.rows),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_verdict(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<VerdictView>>, ApiError> {
    let dataset = resolve_dataset(&state, &req_id.0, &slug)?;
    require_column(
        dataset.has_sentiment,
        &req_id.0,
        "no sentiment data in this dataset",
    )?;
    Ok(Json(ApiResponse {
        data: vclens_analytics::verdict(&dataset.rows),
        meta: ResponseMeta::new(req_id.0),
    }))
}
