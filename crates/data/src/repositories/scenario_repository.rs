//! Scenario repository for PostgreSQL persistence.

use crate::error::DataError;
use crate::store::ScenarioStore;
use async_trait::async_trait;
use roi_calc_domain::{NewScenario, RoiSummary, Scenario, ScenarioId, ScenarioInput, ScenarioName};
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Database record for a stored scenario.
#[derive(Debug, Clone)]
pub struct ScenarioRecord {
    /// Unique identifier.
    pub id: Uuid,
    /// Unique scenario name.
    pub scenario_name: String,
    /// Up-front investment.
    pub initial_investment: Decimal,
    /// Yearly operating costs.
    pub annual_costs: Decimal,
    /// Yearly savings before hidden benefits.
    pub annual_savings: Decimal,
    /// Evaluation horizon in years.
    pub time_period: i32,
    /// ROI as a percentage.
    pub roi_percentage: Decimal,
    /// Payback period in years.
    pub payback_period: Decimal,
    /// Total savings minus total costs.
    pub net_benefit: Decimal,
    /// Adjusted savings over the horizon.
    pub total_savings: Decimal,
    /// Investment plus costs over the horizon.
    pub total_costs: Decimal,
    /// Record creation timestamp.
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Record update timestamp.
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ScenarioRecord {
    /// Creates a ScenarioRecord from a database row.
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            scenario_name: row.try_get("scenario_name")?,
            initial_investment: row.try_get("initial_investment")?,
            annual_costs: row.try_get("annual_costs")?,
            annual_savings: row.try_get("annual_savings")?,
            time_period: row.try_get("time_period")?,
            roi_percentage: row.try_get("roi_percentage")?,
            payback_period: row.try_get("payback_period")?,
            net_benefit: row.try_get("net_benefit")?,
            total_savings: row.try_get("total_savings")?,
            total_costs: row.try_get("total_costs")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    /// Converts the record into a domain scenario, re-validating its inputs.
    ///
    /// # Errors
    /// Returns [`DataError::Corrupt`] if the stored values break domain rules.
    pub fn into_scenario(self) -> Result<Scenario, DataError> {
        let id = ScenarioId(self.id);
        let corrupt = |reason: String| DataError::Corrupt { id, reason };

        let name =
            ScenarioName::parse(&self.scenario_name).map_err(|e| corrupt(e.to_string()))?;
        let input = ScenarioInput::new(
            self.initial_investment,
            self.annual_costs,
            self.annual_savings,
            i64::from(self.time_period),
        )
        .map_err(|e| corrupt(e.to_string()))?;

        Ok(Scenario {
            id,
            name,
            input,
            summary: RoiSummary {
                roi_percentage: self.roi_percentage,
                payback_period: self.payback_period,
                net_benefit: self.net_benefit,
                total_savings: self.total_savings,
                total_costs: self.total_costs,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Repository for scenario CRUD operations.
#[derive(Clone)]
pub struct ScenarioRepository {
    pool: Arc<PgPool>,
}

impl ScenarioRepository {
    /// Creates a new ScenarioRepository.
    #[must_use]
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Saves a scenario row.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn save(
        &self,
        id: Uuid,
        scenario: &NewScenario,
    ) -> Result<ScenarioRecord, sqlx::Error> {
        let input = &scenario.input;
        let summary = &scenario.summary;
        let row = sqlx::query(
            r#"
            INSERT INTO scenarios (id, scenario_name, initial_investment, annual_costs,
                                   annual_savings, time_period, roi_percentage, payback_period,
                                   net_benefit, total_savings, total_costs)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(scenario.name.as_str())
        .bind(input.initial_investment())
        .bind(input.annual_costs())
        .bind(input.annual_savings())
        // Bounded to [1, 50] by ScenarioInput.
        .bind(input.time_period() as i32)
        .bind(summary.roi_percentage)
        .bind(summary.payback_period)
        .bind(summary.net_benefit)
        .bind(summary.total_savings)
        .bind(summary.total_costs)
        .fetch_one(self.pool.as_ref())
        .await?;
        ScenarioRecord::from_row(&row)
    }

    /// Finds a scenario by ID.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ScenarioRecord>, sqlx::Error> {
        let row = sqlx::query("SELECT * FROM scenarios WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        row.as_ref().map(ScenarioRecord::from_row).transpose()
    }

    /// Finds all scenarios, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn find_all(&self) -> Result<Vec<ScenarioRecord>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM scenarios ORDER BY created_at DESC")
            .fetch_all(self.pool.as_ref())
            .await?;
        rows.iter().map(ScenarioRecord::from_row).collect()
    }

    /// Deletes a scenario.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scenarios WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ScenarioStore for ScenarioRepository {
    async fn insert(&self, scenario: NewScenario) -> Result<Scenario, DataError> {
        let id = ScenarioId::generate();
        match self.save(id.0, &scenario).await {
            Ok(record) => {
                info!(%id, name = %scenario.name, "scenario saved");
                record.into_scenario()
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(DataError::DuplicateName(scenario.name.to_string()))
            }
            Err(e) => {
                error!(error = %e, "failed to save scenario");
                Err(e.into())
            }
        }
    }

    async fn list(&self) -> Result<Vec<Scenario>, DataError> {
        self.find_all()
            .await?
            .into_iter()
            .map(ScenarioRecord::into_scenario)
            .collect()
    }

    async fn get(&self, id: ScenarioId) -> Result<Scenario, DataError> {
        self.find_by_id(id.0)
            .await?
            .ok_or(DataError::NotFound(id))?
            .into_scenario()
    }

    async fn delete(&self, id: ScenarioId) -> Result<(), DataError> {
        if self.delete_by_id(id.0).await? {
            info!(%id, "scenario deleted");
            Ok(())
        } else {
            Err(DataError::NotFound(id))
        }
    }
}
