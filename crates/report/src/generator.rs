//! ROI report generator.

use crate::error::ReportError;
use crate::layout::layout;
use crate::pdf::render_pdf;
use chrono::{DateTime, Utc};
use roi_calc_domain::{EmailAddress, RoiResult, Scenario};
use std::path::{Path, PathBuf};
use tracing::info;

/// A stored scenario together with its freshly computed projection.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub result: RoiResult,
}

/// Location of a generated report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    /// File on disk.
    pub path: PathBuf,
    /// File name inside the reports directory.
    pub filename: String,
    /// URL path under which the file is served.
    pub download_url: String,
}

/// Writes scenario reports into a directory.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    output_dir: PathBuf,
    url_prefix: String,
}

impl ReportGenerator {
    /// Creates a generator writing into `output_dir`, served under `/reports`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            url_prefix: "/reports".to_string(),
        }
    }

    /// Overrides the URL prefix used in download links.
    #[must_use]
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into().trim_end_matches('/').to_string();
        self
    }

    /// Directory reports are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Renders and writes the report for `recipient`.
    ///
    /// # Errors
    /// Returns [`ReportError::Pdf`] if the document cannot be built and
    /// [`ReportError::Io`] if the directory or file cannot be written.
    pub async fn generate(
        &self,
        report: &ScenarioReport,
        recipient: &EmailAddress,
    ) -> Result<ReportArtifact, ReportError> {
        let now = Utc::now();
        let filename = report_filename(report.scenario.name.as_str(), now);
        let path = self.output_dir.join(&filename);

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| ReportError::Io {
                path: self.output_dir.clone(),
                source,
            })?;

        let lines = layout(report, recipient, now);
        let document = render_pdf(
            &format!("ROI Report - {}", report.scenario.name),
            &lines,
        )?;
        tokio::fs::write(&path, document)
            .await
            .map_err(|source| ReportError::Io {
                path: path.clone(),
                source,
            })?;

        info!(
            scenario = %report.scenario.id,
            file = %path.display(),
            "report generated"
        );

        Ok(ReportArtifact {
            download_url: format!("{}/{}", self.url_prefix, filename),
            filename,
            path,
        })
    }
}

/// Builds `roi_report_<name>_<unix millis>.pdf`.
///
/// Whitespace runs become `_`; characters that are unsafe in a file name
/// are replaced as well.
#[must_use]
pub fn report_filename(scenario_name: &str, at: DateTime<Utc>) -> String {
    let stem: String = scenario_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("roi_report_{stem}_{}.pdf", at.timestamp_millis())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;
    use roi_calc_domain::{NewScenario, ScenarioId, ScenarioInput, ScenarioName, calculate_roi};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    pub(crate) fn report(
        name: &str,
        ii: Decimal,
        ac: Decimal,
        sav: Decimal,
        years: i64,
    ) -> ScenarioReport {
        let input = ScenarioInput::new(ii, ac, sav, years).unwrap();
        let result = calculate_roi(&input);
        let new = NewScenario::new(ScenarioName::parse(name).unwrap(), input, &result);
        ScenarioReport {
            scenario: Scenario::from_new(ScenarioId::generate(), new, Utc::now()),
            result,
        }
    }

    pub(crate) fn email() -> EmailAddress {
        EmailAddress::parse("cfo@example.com").unwrap()
    }

    #[test]
    fn test_filename() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(
            report_filename("Warehouse  robots Q3", at),
            "roi_report_Warehouse_robots_Q3_1700000000123.pdf"
        );
        assert_eq!(
            report_filename("../etc/passwd", at),
            "roi_report____etc_passwd_1700000000123.pdf"
        );
    }

    #[tokio::test]
    async fn test_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ReportGenerator::new(dir.path().join("reports"));
        let report = report("Line 7 retrofit", dec!(20000), dec!(1000), dec!(9000), 3);

        let artifact = generator.generate(&report, &email()).await.unwrap();

        assert!(artifact.filename.starts_with("roi_report_Line_7_retrofit_"));
        assert_eq!(artifact.download_url, format!("/reports/{}", artifact.filename));
        assert!(artifact.filename.ends_with(".pdf"));
        let contents = tokio::fs::read(&artifact.path).await.unwrap();
        assert!(contents.starts_with(b"%PDF"));
    }
}
