use crate::error::ApiError;
use crate::models::{ErrorResponse, GenerateReportRequest, ReportResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use roi_calc_domain::ScenarioId;

/// Generates a downloadable report for a stored scenario.
#[utoipa::path(
    post,
    path = "/report/generate",
    tag = "Reports",
    request_body = GenerateReportRequest,
    responses(
        (status = 200, description = "Report written", body = ReportResponse),
        (status = 400, description = "Missing fields or invalid email", body = ErrorResponse),
        (status = 404, description = "Scenario not found", body = ErrorResponse),
        (status = 500, description = "Report could not be written", body = ErrorResponse)
    )
)]
pub async fn generate_report(
    State(state): State<AppState>,
    body: Result<Json<GenerateReportRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, ApiError> {
    let Json(request) = body?;
    let artifact = state
        .scenarios
        .generate_report(
            request.scenario_id.map(ScenarioId::from),
            request.email.as_deref(),
        )
        .await?;

    Ok(Json(ReportResponse {
        success: true,
        message: "Report generated successfully".to_string(),
        download_url: artifact.download_url,
        filename: artifact.filename,
    }))
}
