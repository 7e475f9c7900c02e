use super::parse_scenario_id;
use crate::error::ApiError;
use crate::models::{
    ErrorResponse, ListScenariosResponse, MessageResponse, RoiResultResponse, SaveScenarioRequest,
    SaveScenarioResponse, ScenarioDetail, ScenarioDetailResponse, ScenarioResponse,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

/// Computes and stores a named scenario.
#[utoipa::path(
    post,
    path = "/scenarios",
    tag = "Scenarios",
    request_body = SaveScenarioRequest,
    responses(
        (status = 200, description = "Scenario saved", body = SaveScenarioResponse),
        (status = 400, description = "Missing or invalid input", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse)
    )
)]
pub async fn save_scenario(
    State(state): State<AppState>,
    body: Result<Json<SaveScenarioRequest>, JsonRejection>,
) -> Result<Json<SaveScenarioResponse>, ApiError> {
    let Json(request) = body?;
    let (scenario, result) = state
        .scenarios
        .save(request.scenario_name.as_deref(), &request.raw_input())
        .await?;

    Ok(Json(SaveScenarioResponse {
        success: true,
        message: "Scenario saved successfully".to_string(),
        scenario_id: scenario.id.0,
        results: RoiResultResponse::from(&result),
    }))
}

/// Lists stored scenarios, newest first.
#[utoipa::path(
    get,
    path = "/scenarios",
    tag = "Scenarios",
    responses(
        (status = 200, description = "Stored scenarios", body = ListScenariosResponse)
    )
)]
pub async fn list_scenarios(
    State(state): State<AppState>,
) -> Result<Json<ListScenariosResponse>, ApiError> {
    let scenarios: Vec<ScenarioResponse> = state
        .scenarios
        .list()
        .await?
        .iter()
        .map(ScenarioResponse::from)
        .collect();

    Ok(Json(ListScenariosResponse {
        success: true,
        count: scenarios.len(),
        scenarios,
    }))
}

/// Fetches a scenario with its full projection.
#[utoipa::path(
    get,
    path = "/scenarios/{id}",
    tag = "Scenarios",
    params(
        ("id" = String, Path, description = "Scenario id")
    ),
    responses(
        (status = 200, description = "Scenario found", body = ScenarioDetailResponse),
        (status = 404, description = "Scenario not found", body = ErrorResponse)
    )
)]
pub async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScenarioDetailResponse>, ApiError> {
    let id = parse_scenario_id(&id)?;
    let report = state.scenarios.detail(id).await?;

    Ok(Json(ScenarioDetailResponse {
        success: true,
        scenario: ScenarioDetail::new(&report.scenario, &report.result),
    }))
}

/// Deletes a scenario.
#[utoipa::path(
    delete,
    path = "/scenarios/{id}",
    tag = "Scenarios",
    params(
        ("id" = String, Path, description = "Scenario id")
    ),
    responses(
        (status = 200, description = "Scenario deleted", body = MessageResponse),
        (status = 404, description = "Scenario not found", body = ErrorResponse)
    )
)]
pub async fn delete_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_scenario_id(&id)?;
    state.scenarios.delete(id).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Scenario deleted successfully".to_string(),
    }))
}
