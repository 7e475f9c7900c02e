//! Scenario operations behind the HTTP handlers.

use crate::error::ApiError;
use roi_calc_data::ScenarioStore;
use roi_calc_domain::{
    EmailAddress, NewScenario, RawScenarioInput, RoiCalculator, RoiResult, Scenario, ScenarioId,
    ScenarioName,
};
use roi_calc_report::{ReportArtifact, ReportGenerator, ScenarioReport};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Service for simulating, storing and reporting on scenarios.
#[derive(Clone)]
pub struct ScenarioService {
    store: Arc<dyn ScenarioStore>,
    calculator: RoiCalculator,
    reports: ReportGenerator,
}

impl ScenarioService {
    /// Creates a service with the standard calculator.
    pub fn new(store: Arc<dyn ScenarioStore>, reports: ReportGenerator) -> Self {
        Self {
            store,
            calculator: RoiCalculator::default(),
            reports,
        }
    }

    /// Replaces the calculator.
    #[must_use]
    pub fn with_calculator(mut self, calculator: RoiCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    /// Directory generated reports are written to.
    #[must_use]
    pub fn reports_dir(&self) -> &Path {
        self.reports.output_dir()
    }

    /// Runs a one-off simulation.
    ///
    /// # Errors
    /// Returns [`ApiError::MissingFields`] or [`ApiError::BadRequest`] for
    /// absent or invalid figures.
    pub fn simulate(&self, raw: &RawScenarioInput) -> Result<RoiResult, ApiError> {
        require(raw.missing_fields())?;
        Ok(self.calculator.calculate_raw(raw)?)
    }

    /// Computes and stores a named scenario.
    ///
    /// # Errors
    /// Returns [`ApiError::Conflict`] if the name is taken, or a validation
    /// error for bad input.
    pub async fn save(
        &self,
        name: Option<&str>,
        raw: &RawScenarioInput,
    ) -> Result<(Scenario, RoiResult), ApiError> {
        let mut missing = Vec::new();
        if name.is_none_or(|n| n.trim().is_empty()) {
            missing.push("scenario_name");
        }
        missing.extend(raw.missing_fields());
        require(missing)?;

        let name = ScenarioName::parse(name.unwrap_or_default())?;
        let input = raw.validate()?;
        let result = self.calculator.calculate(&input);

        let stored = self
            .store
            .insert(NewScenario::new(name, input, &result))
            .await?;
        Ok((stored, result))
    }

    /// Lists stored scenarios, newest first.
    ///
    /// # Errors
    /// Returns [`ApiError::Internal`] on storage failure.
    pub async fn list(&self) -> Result<Vec<Scenario>, ApiError> {
        Ok(self.store.list().await?)
    }

    /// Fetches a scenario and recomputes its full projection.
    ///
    /// # Errors
    /// Returns [`ApiError::NotFound`] for unknown ids.
    pub async fn detail(&self, id: ScenarioId) -> Result<ScenarioReport, ApiError> {
        let scenario = self.store.get(id).await?;
        let result = self.calculator.calculate(&scenario.input);
        Ok(ScenarioReport { scenario, result })
    }

    /// Deletes a scenario.
    ///
    /// # Errors
    /// Returns [`ApiError::NotFound`] for unknown ids.
    pub async fn delete(&self, id: ScenarioId) -> Result<(), ApiError> {
        Ok(self.store.delete(id).await?)
    }

    /// Generates a report for a stored scenario.
    ///
    /// # Errors
    /// Returns [`ApiError::BadRequest`] for a malformed email,
    /// [`ApiError::NotFound`] for an unknown scenario, and
    /// [`ApiError::Internal`] if the file cannot be written.
    pub async fn generate_report(
        &self,
        id: Option<ScenarioId>,
        email: Option<&str>,
    ) -> Result<ReportArtifact, ApiError> {
        let email = email.filter(|e| !e.is_empty());
        let (id, email) = match (id, email) {
            (Some(id), Some(email)) => (id, email),
            (id, email) => {
                let mut missing = Vec::new();
                if id.is_none() {
                    missing.push("scenario_id");
                }
                if email.is_none() {
                    missing.push("email");
                }
                return Err(ApiError::MissingFields(missing));
            }
        };
        let recipient = EmailAddress::parse(email)?;
        let report = self.detail(id).await?;
        debug!(%id, recipient = %recipient, "generating report");
        Ok(self.reports.generate(&report, &recipient).await?)
    }
}

fn require(missing: Vec<&'static str>) -> Result<(), ApiError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roi_calc_data::InMemoryScenarioStore;
    use rust_decimal::Decimal;

    fn service(dir: &Path) -> ScenarioService {
        ScenarioService::new(
            Arc::new(InMemoryScenarioStore::new()),
            ReportGenerator::new(dir),
        )
    }

    fn raw(ii: i64, ac: i64, sav: i64, years: i64) -> RawScenarioInput {
        RawScenarioInput {
            initial_investment: Some(Decimal::from(ii)),
            annual_costs: Some(Decimal::from(ac)),
            annual_savings: Some(Decimal::from(sav)),
            time_period: Some(years),
        }
    }

    #[test]
    fn test_simulate_reports_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let err = service(dir.path())
            .simulate(&RawScenarioInput::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingFields(fields) if fields.len() == 4));
    }

    #[tokio::test]
    async fn test_save_and_detail() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path());

        let (stored, result) = service
            .save(Some("Robots"), &raw(50000, 10000, 75000, 5))
            .await
            .unwrap();
        assert_eq!(stored.summary, result.summary());

        let detail = service.detail(stored.id).await.unwrap();
        assert_eq!(detail.result, result);
    }

    #[tokio::test]
    async fn test_save_requires_name() {
        let dir = tempfile::tempdir().unwrap();
        let err = service(dir.path())
            .save(Some("  "), &raw(1, 1, 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingFields(fields) if fields == vec!["scenario_name"]));
    }

    #[tokio::test]
    async fn test_report_rejects_bad_email_before_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let err = service(dir.path())
            .generate_report(Some(ScenarioId::generate()), Some("not-an-email"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(msg) if msg == "Invalid email format"));
    }
}
