use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

/// One entry of the selection control: a catalog video plus whether an
/// enriched dataset currently exists for it.
#[derive(Debug, Serialize)]
pub(super) struct VideoListItem {
    pub slug: String,
    pub title: String,
    pub video_id: String,
    pub has_data: bool,
}

pub(super) async fn list_videos(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<VideoListItem>>> {
    let data = state
        .catalog
        .videos
        .iter()
        .map(|video| VideoListItem {
            slug: video.slug(),
            title: video.title.clone(),
            video_id: video.video_id.clone(),
            has_data: state.data_dir.join(video.enriched_csv_name()).exists(),
        })
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
