//! Report content as a sequence of styled lines.

use crate::format::{fixed, money};
use crate::generator::ScenarioReport;
use chrono::{DateTime, Utc};
use prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE;
use prettytable::{Cell, Row, Table};
use roi_calc_domain::{EmailAddress, RoiResult};
use rust_decimal::Decimal;

/// Visual weight of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Document title.
    Title,
    /// Section heading.
    Heading,
    /// Running text.
    Body,
    /// Fixed-width text, used for tables.
    Mono,
    /// Vertical gap.
    Blank,
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub style: LineStyle,
    pub text: String,
}

impl ReportLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineStyle::Blank, "")
    }
}

/// Lays out the full report: header, scenario information, executive
/// summary, detailed calculations, yearly projection, hidden benefits,
/// recommendations and footer.
#[must_use]
pub fn layout(
    report: &ScenarioReport,
    recipient: &EmailAddress,
    at: DateTime<Utc>,
) -> Vec<ReportLine> {
    use LineStyle::{Body, Heading, Title};

    let scenario = &report.scenario;
    let result = &report.result;
    let input = &scenario.input;
    let date = at.format("%Y-%m-%d").to_string();

    let mut lines = vec![
        ReportLine::new(Title, "ROI Calculator Report"),
        ReportLine::new(Body, "Automation Investment Analysis"),
        ReportLine::blank(),
        ReportLine::new(Heading, "Scenario Information"),
        ReportLine::new(Body, format!("Scenario Name: {}", scenario.name)),
        ReportLine::new(Body, format!("Generated For: {recipient}")),
        ReportLine::new(Body, format!("Date: {date}")),
        ReportLine::blank(),
        ReportLine::new(Heading, "Executive Summary"),
        ReportLine::new(
            Body,
            format!("Return on Investment (ROI): {}%", fixed(result.roi_percentage)),
        ),
        ReportLine::new(
            Body,
            format!("Payback Period: {} years", fixed(result.payback_period)),
        ),
        ReportLine::new(Body, format!("Net Benefit: {}", money(result.net_benefit))),
        ReportLine::new(Body, format!("Total Savings: {}", money(result.total_savings))),
        ReportLine::new(Body, format!("Total Costs: {}", money(result.total_costs))),
        ReportLine::blank(),
        ReportLine::new(Heading, "Detailed Calculations"),
    ];

    let mut details = Table::new();
    details.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
    for (label, value) in [
        ("Initial Investment", money(input.initial_investment())),
        ("Annual Operating Costs", money(input.annual_costs())),
        ("Annual Savings (Base)", money(input.annual_savings())),
        (
            "Annual Savings (Adjusted)",
            money(result.adjusted_annual_savings),
        ),
        ("Time Period", format!("{} years", input.time_period())),
        ("Total Costs", money(result.total_costs)),
        ("Total Savings", money(result.total_savings)),
        ("Net Benefit", money(result.net_benefit)),
    ] {
        details.add_row(Row::new(vec![
            Cell::new(label),
            Cell::new(&value).style_spec("r"),
        ]));
    }
    push_table(&mut lines, &details);

    lines.push(ReportLine::blank());
    lines.push(ReportLine::new(Heading, "Year-by-Year Projection"));
    let mut yearly = Table::new();
    yearly.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
    yearly.set_titles(Row::new(
        ["Year", "Annual Costs", "Annual Savings", "Net Position"]
            .into_iter()
            .map(Cell::new)
            .collect(),
    ));
    for year in &result.yearly_breakdown {
        yearly.add_row(Row::new(vec![
            Cell::new(&year.year.to_string()),
            Cell::new(&money(year.annual_costs)).style_spec("r"),
            Cell::new(&money(year.annual_savings)).style_spec("r"),
            Cell::new(&money(year.net_position)).style_spec("r"),
        ]));
    }
    push_table(&mut lines, &yearly);

    let benefits = &result.hidden_benefits;
    lines.extend([
        ReportLine::blank(),
        ReportLine::new(Heading, "Hidden Benefits Included"),
        ReportLine::new(
            Body,
            "Our analysis includes additional benefits from automation:",
        ),
        ReportLine::new(
            Body,
            format!("- Quality Improvement: {}", benefits.quality_improvement),
        ),
        ReportLine::new(Body, format!("- Error Reduction: {}", benefits.error_reduction)),
        ReportLine::new(
            Body,
            format!("- Productivity Boost: {}", benefits.productivity_boost),
        ),
        ReportLine::new(
            Body,
            format!("Total Benefit Multiplier: {}", benefits.total_multiplier),
        ),
        ReportLine::blank(),
        ReportLine::new(Heading, "Recommendations"),
    ]);
    lines.extend(
        recommendations(result)
            .into_iter()
            .map(|line| ReportLine::new(Body, line)),
    );

    lines.push(ReportLine::blank());
    lines.push(ReportLine::new(
        Body,
        format!("Generated by ROI Calculator | {date}"),
    ));
    lines
}

fn push_table(lines: &mut Vec<ReportLine>, table: &Table) {
    lines.extend(
        table
            .to_string()
            .lines()
            .map(|row| ReportLine::new(LineStyle::Mono, row)),
    );
}

/// Advice lines chosen from the ROI and payback thresholds.
#[must_use]
pub fn recommendations(result: &RoiResult) -> Vec<&'static str> {
    let roi = result.roi_percentage;

    let mut lines = if roi > Decimal::ONE_HUNDRED {
        vec![
            "[+] Excellent Investment: This automation project shows exceptional returns.",
            "[+] Recommendation: Proceed with implementation immediately.",
        ]
    } else if roi > Decimal::from(50) {
        vec![
            "[+] Strong Investment: This project demonstrates solid financial benefits.",
            "[+] Recommendation: Strongly consider moving forward with this initiative.",
        ]
    } else if roi > Decimal::ZERO {
        vec![
            "[+] Positive ROI: This investment will generate positive returns.",
            "[+] Recommendation: Evaluate against other priorities and consider implementation.",
        ]
    } else {
        vec![
            "[!] Negative ROI: Current projections show losses.",
            "[!] Recommendation: Review assumptions and explore cost reduction opportunities.",
        ]
    };

    if result.payback_period < Decimal::TWO {
        lines.push("[+] Quick Payback: Investment recovers in less than 2 years.");
    } else if result.payback_period < Decimal::from(5) {
        lines.push("[+] Reasonable Payback: Investment recovers within acceptable timeframe.");
    }
    lines
}
