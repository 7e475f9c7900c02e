//! API request and response models.

use chrono::{DateTime, Utc};
use roi_calc_domain::{HiddenBenefits, RawScenarioInput, RoiResult, Scenario, YearRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Figures for a one-off ROI simulation.
///
/// Amounts may be sent as JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SimulateRequest {
    pub initial_investment: Option<Decimal>,
    pub annual_costs: Option<Decimal>,
    pub annual_savings: Option<Decimal>,
    pub time_period: Option<i64>,
}

impl From<SimulateRequest> for RawScenarioInput {
    fn from(req: SimulateRequest) -> Self {
        Self {
            initial_investment: req.initial_investment,
            annual_costs: req.annual_costs,
            annual_savings: req.annual_savings,
            time_period: req.time_period,
        }
    }
}

/// A scenario to compute and store under a unique name.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SaveScenarioRequest {
    pub scenario_name: Option<String>,
    pub initial_investment: Option<Decimal>,
    pub annual_costs: Option<Decimal>,
    pub annual_savings: Option<Decimal>,
    pub time_period: Option<i64>,
}

impl SaveScenarioRequest {
    /// The numeric part of the request.
    #[must_use]
    pub fn raw_input(&self) -> RawScenarioInput {
        RawScenarioInput {
            initial_investment: self.initial_investment,
            annual_costs: self.annual_costs,
            annual_savings: self.annual_savings,
            time_period: self.time_period,
        }
    }
}

/// Report generation request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct GenerateReportRequest {
    pub scenario_id: Option<Uuid>,
    /// Recipient shown on the report.
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Responses
//
// The result types below mirror `RoiResult`, `YearRecord` and
// `HiddenBenefits` field for field. They exist so the OpenAPI schema can be
// derived here while the domain crate stays free of `utoipa`; the
// `From<&domain type>` impls are the only way they are built.
// ---------------------------------------------------------------------------

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    /// Present when required fields are missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// Generic acknowledgement.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// One projection year.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct YearRecordResponse {
    pub year: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_costs: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_savings: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cumulative_costs: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cumulative_savings: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_position: Decimal,
}

impl From<&YearRecord> for YearRecordResponse {
    fn from(record: &YearRecord) -> Self {
        Self {
            year: record.year,
            annual_costs: record.annual_costs,
            annual_savings: record.annual_savings,
            cumulative_costs: record.cumulative_costs,
            cumulative_savings: record.cumulative_savings,
            net_position: record.net_position,
        }
    }
}

/// Hidden-benefit factors as whole percentages.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HiddenBenefitsResponse {
    pub quality_improvement: String,
    pub error_reduction: String,
    pub productivity_boost: String,
    pub total_multiplier: String,
}

impl From<&HiddenBenefits> for HiddenBenefitsResponse {
    fn from(benefits: &HiddenBenefits) -> Self {
        Self {
            quality_improvement: benefits.quality_improvement.clone(),
            error_reduction: benefits.error_reduction.clone(),
            productivity_boost: benefits.productivity_boost.clone(),
            total_multiplier: benefits.total_multiplier.clone(),
        }
    }
}

/// Full ROI projection.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoiResultResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub roi_percentage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub payback_period: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_benefit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_savings: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_costs: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub adjusted_annual_savings: Decimal,
    pub yearly_breakdown: Vec<YearRecordResponse>,
    pub hidden_benefits: HiddenBenefitsResponse,
}

impl From<&RoiResult> for RoiResultResponse {
    fn from(result: &RoiResult) -> Self {
        Self {
            roi_percentage: result.roi_percentage,
            payback_period: result.payback_period,
            net_benefit: result.net_benefit,
            total_savings: result.total_savings,
            total_costs: result.total_costs,
            adjusted_annual_savings: result.adjusted_annual_savings,
            yearly_breakdown: result.yearly_breakdown.iter().map(Into::into).collect(),
            hidden_benefits: (&result.hidden_benefits).into(),
        }
    }
}

/// Result of `POST /simulate`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SimulationResponse {
    pub success: bool,
    pub results: RoiResultResponse,
}

/// Result of `POST /scenarios`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaveScenarioResponse {
    pub success: bool,
    pub message: String,
    pub scenario_id: Uuid,
    pub results: RoiResultResponse,
}

/// A stored scenario with its persisted metrics.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScenarioResponse {
    pub id: Uuid,
    pub scenario_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub initial_investment: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_costs: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_savings: Decimal,
    pub time_period: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub roi_percentage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub payback_period: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_benefit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_savings: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_costs: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Scenario> for ScenarioResponse {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id.0,
            scenario_name: scenario.name.to_string(),
            initial_investment: scenario.input.initial_investment(),
            annual_costs: scenario.input.annual_costs(),
            annual_savings: scenario.input.annual_savings(),
            time_period: scenario.input.time_period(),
            roi_percentage: scenario.summary.roi_percentage,
            payback_period: scenario.summary.payback_period,
            net_benefit: scenario.summary.net_benefit,
            total_savings: scenario.summary.total_savings,
            total_costs: scenario.summary.total_costs,
            created_at: scenario.created_at,
            updated_at: scenario.updated_at,
        }
    }
}

/// Result of `GET /scenarios`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListScenariosResponse {
    pub success: bool,
    pub count: usize,
    pub scenarios: Vec<ScenarioResponse>,
}

/// A stored scenario merged with a freshly computed projection.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScenarioDetail {
    pub id: Uuid,
    pub scenario_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub initial_investment: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_costs: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_savings: Decimal,
    pub time_period: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub results: RoiResultResponse,
}

impl ScenarioDetail {
    /// Merges a stored scenario with its recomputed projection.
    #[must_use]
    pub fn new(scenario: &Scenario, result: &RoiResult) -> Self {
        Self {
            id: scenario.id.0,
            scenario_name: scenario.name.to_string(),
            initial_investment: scenario.input.initial_investment(),
            annual_costs: scenario.input.annual_costs(),
            annual_savings: scenario.input.annual_savings(),
            time_period: scenario.input.time_period(),
            created_at: scenario.created_at,
            updated_at: scenario.updated_at,
            results: result.into(),
        }
    }
}

/// Result of `GET /scenarios/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScenarioDetailResponse {
    pub success: bool,
    pub scenario: ScenarioDetail,
}

/// Result of `POST /report/generate`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportResponse {
    pub success: bool,
    pub message: String,
    pub download_url: String,
    pub filename: String,
}
