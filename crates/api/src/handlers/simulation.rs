use crate::error::ApiError;
use crate::models::{ErrorResponse, RoiResultResponse, SimulateRequest, SimulationResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

/// Runs an ROI simulation without storing anything.
#[utoipa::path(
    post,
    path = "/simulate",
    tag = "Simulation",
    request_body = SimulateRequest,
    responses(
        (status = 200, description = "Projection computed", body = SimulationResponse),
        (status = 400, description = "Missing or invalid input", body = ErrorResponse)
    )
)]
pub async fn simulate(
    State(state): State<AppState>,
    body: Result<Json<SimulateRequest>, JsonRejection>,
) -> Result<Json<SimulationResponse>, ApiError> {
    let Json(request) = body?;
    let result = state.scenarios.simulate(&request.into())?;

    Ok(Json(SimulationResponse {
        success: true,
        results: RoiResultResponse::from(&result),
    }))
}
