//! Command Line Interface for the ROI calculator.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use prettytable::format::consts::FORMAT_BOX_CHARS;
use prettytable::{Table, row};
use roi_calc_api::openapi::openapi_pretty_json;
use roi_calc_api::{ApiServer, AppState, ScenarioService, ServerConfig};
use roi_calc_data::{Database, InMemoryScenarioStore, ScenarioStore};
use roi_calc_domain::{RoiResult, ScenarioInput, calculate_roi};
use roi_calc_report::ReportGenerator;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roi-calc")]
#[command(about = "Automation ROI calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Interface to bind
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 5000)]
        port: u16,

        /// PostgreSQL connection string; scenarios are kept in memory when unset
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,

        /// Only origin allowed to call the API cross-origin
        #[arg(long, env = "FRONTEND_URL")]
        frontend_url: Option<String>,

        /// Directory for generated reports
        #[arg(long, env = "REPORTS_DIR", default_value = "reports")]
        reports_dir: PathBuf,
    },
    /// Compute an ROI projection and print it
    Simulate {
        /// Up-front investment
        #[arg(long)]
        initial_investment: Decimal,

        /// Yearly operating costs
        #[arg(long)]
        annual_costs: Decimal,

        /// Yearly savings before hidden benefits
        #[arg(long)]
        annual_savings: Decimal,

        /// Evaluation horizon in years (1-50)
        #[arg(short, long)]
        years: i64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the OpenAPI document
    Openapi {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Create the scenarios table
    Migrate {
        /// PostgreSQL connection string
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
    /// Check database connectivity and schema
    CheckDb {
        /// PostgreSQL connection string
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            database_url,
            frontend_url,
            reports_dir,
        } => {
            let store: Arc<dyn ScenarioStore> = match database_url {
                Some(url) => {
                    let db = Database::connect(&url)
                        .await
                        .context("failed to connect to database")?;
                    db.migrate().await.context("failed to apply schema")?;
                    Arc::new(db.scenarios())
                }
                None => {
                    warn!("DATABASE_URL not set; scenarios will not survive a restart");
                    Arc::new(InMemoryScenarioStore::new())
                }
            };

            let service = ScenarioService::new(store, ReportGenerator::new(&reports_dir));
            let config = ServerConfig {
                host,
                port,
                frontend_url: frontend_url.filter(|url| !url.is_empty()),
                reports_dir,
            };

            ApiServer::new(config, AppState::new(service))
                .run()
                .await
                .context("server failed")?;
        }
        Commands::Simulate {
            initial_investment,
            annual_costs,
            annual_savings,
            years,
            json,
        } => {
            let input =
                ScenarioInput::new(initial_investment, annual_costs, annual_savings, years)?;
            let result = calculate_roi(&input);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&input, &result);
            }
        }
        Commands::Openapi { output } => {
            let document = openapi_pretty_json();
            match output {
                Some(path) => {
                    std::fs::write(&path, document)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(file = %path.display(), "OpenAPI document written");
                }
                None => println!("{document}"),
            }
        }
        Commands::Migrate { database_url } => {
            let db = Database::connect(&database_url).await?;
            db.migrate().await?;
            info!("schema applied");
            println!("✅ Scenarios table is ready");
        }
        Commands::CheckDb { database_url } => {
            let db = Database::connect(&database_url).await?;
            let status = db.check().await?;
            println!("✅ Database connection OK");
            if status.scenarios_table {
                println!(
                    "📦 Scenarios table present ({} rows)",
                    status.scenario_count.unwrap_or_default()
                );
            } else {
                println!("⚠️  Scenarios table missing; run `roi-calc migrate`");
            }
        }
    }

    Ok(())
}

fn print_result(input: &ScenarioInput, result: &RoiResult) {
    println!("\n📊 ROI Projection");
    println!("════════════════════════════════════");
    println!("Initial Investment: ${:.2}", input.initial_investment());
    println!("Annual Costs:       ${:.2}", input.annual_costs());
    println!("Annual Savings:     ${:.2}", input.annual_savings());
    println!("Adjusted Savings:   ${:.2}", result.adjusted_annual_savings);
    println!("Time Period:        {} years", input.time_period());
    println!("────────────────────────────────────");
    println!("ROI:                {:.2}%", result.roi_percentage);
    println!("Payback Period:     {:.2} years", result.payback_period);
    println!("Net Benefit:        ${:.2}", result.net_benefit);
    println!("Total Savings:      ${:.2}", result.total_savings);
    println!("Total Costs:        ${:.2}", result.total_costs);
    println!("════════════════════════════════════\n");

    let mut table = Table::new();
    table.set_format(*FORMAT_BOX_CHARS);
    table.set_titles(row!["Year", "Costs", "Savings", "Cum. Costs", "Cum. Savings", "Net"]);
    for year in &result.yearly_breakdown {
        table.add_row(row![
            year.year,
            format!("{:.2}", year.annual_costs),
            format!("{:.2}", year.annual_savings),
            format!("{:.2}", year.cumulative_costs),
            format!("{:.2}", year.cumulative_savings),
            format!("{:.2}", year.net_position)
        ]);
    }
    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_command_parses() {
        let cli = Cli::try_parse_from(["roi-calc", "openapi", "-o", "api.json"]).unwrap();
        assert!(
            matches!(cli.command, Commands::Openapi { output: Some(path) } if path == PathBuf::from("api.json"))
        );
    }

    #[test]
    fn test_openapi_document_lists_routes() {
        let document = openapi_pretty_json();
        assert!(document.contains("/scenarios/{id}"));
        assert!(document.contains("/report/generate"));
    }
}
