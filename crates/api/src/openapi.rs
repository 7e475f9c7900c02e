//! OpenAPI documentation configuration.
//!
//! The document is generated with utoipa and served at `/openapi.json`.

use crate::handlers;
use crate::models::{
    ErrorResponse, GenerateReportRequest, HealthResponse, HiddenBenefitsResponse,
    ListScenariosResponse, MessageResponse, ReportResponse, RoiResultResponse,
    SaveScenarioRequest, SaveScenarioResponse, ScenarioDetail, ScenarioDetailResponse,
    ScenarioResponse, SimulateRequest, SimulationResponse, YearRecordResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation structure.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ROI Calculator API",
        version = "0.1.0",
        description = "REST API for projecting the return on an automation investment. \
                       Provides one-off simulations, named scenario storage and \
                       downloadable reports.",
        license(name = "MIT")
    ),
    tags(
        (name = "Health", description = "Health check and API documentation"),
        (name = "Simulation", description = "One-off ROI projections"),
        (name = "Scenarios", description = "Stored scenario management"),
        (name = "Reports", description = "Report generation")
    ),
    paths(
        handlers::health::health_check,
        handlers::health::openapi_spec,
        handlers::simulation::simulate,
        handlers::scenarios::save_scenario,
        handlers::scenarios::list_scenarios,
        handlers::scenarios::get_scenario,
        handlers::scenarios::delete_scenario,
        handlers::reports::generate_report,
    ),
    components(
        schemas(
            // Requests
            SimulateRequest,
            SaveScenarioRequest,
            GenerateReportRequest,
            // Results
            RoiResultResponse,
            YearRecordResponse,
            HiddenBenefitsResponse,
            // Responses
            SimulationResponse,
            SaveScenarioResponse,
            ScenarioResponse,
            ListScenariosResponse,
            ScenarioDetail,
            ScenarioDetailResponse,
            ReportResponse,
            MessageResponse,
            HealthResponse,
            ErrorResponse,
        )
    )
)]
pub struct ApiDoc;

/// Returns the OpenAPI JSON specification.
#[must_use]
pub fn openapi_json() -> String {
    ApiDoc::openapi().to_json().unwrap_or_default()
}

/// Returns the OpenAPI specification as indented JSON.
#[must_use]
pub fn openapi_pretty_json() -> String {
    ApiDoc::openapi().to_pretty_json().unwrap_or_default()
}
