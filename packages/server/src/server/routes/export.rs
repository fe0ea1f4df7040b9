use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use analysis::export_file_name;

use crate::server::routes::ErrorResponse;
use crate::state::AppState;

/// Download the most recent assessment as pretty-printed JSON
///
/// Returns 404 until an analysis in this process has produced one.
pub async fn export_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let assessment = state.last_assessment.read().await.clone();

    let Some(assessment) = assessment else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "no assessment to export".to_string(),
            }),
        ));
    };

    let body = assessment.export_json().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to serialize assessment: {}", e),
            }),
        )
    })?;

    Ok((attachment_headers(&export_file_name(Utc::now())), body))
}

/// Headers that make the browser save the body under `file_name`.
fn attachment_headers(file_name: &str) -> [(HeaderName, String); 2] {
    [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ),
    ]
}
