//! Lifecycle Commands

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use storefront_qa_client::{run_booking_lifecycle, LifecycleReport, LifecycleStep, ServiceFactory};
use storefront_qa_common::{admin_credentials, ScenarioProvider, SuiteConfig};

use crate::output::{
    print_error, print_list, print_serialized, print_success, OutputFormat, TableDisplay,
};

#[derive(Args)]
pub struct LifecycleArgs {
    /// Override the booking API base URL from the configuration
    #[arg(long)]
    pub booking_api: Option<String>,

    /// RNG seed for the booking data
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Step display wrapper for serialization
#[derive(Serialize)]
#[serde(transparent)]
pub struct StepDisplay(LifecycleStep);

impl TableDisplay for StepDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["Step", "Passed", "Duration", "Detail"]
    }

    fn row(&self) -> Vec<String> {
        let step = &self.0;
        vec![
            step.name.clone(),
            if step.success { "✓" } else { "✗" }.to_string(),
            format!("{}ms", step.duration_ms),
            step.detail.clone().unwrap_or_default(),
        ]
    }
}

fn print_report(report: &LifecycleReport, format: OutputFormat) {
    match format {
        OutputFormat::Json | OutputFormat::Yaml => print_serialized(report, format),
        OutputFormat::Table | OutputFormat::Plain => {
            let steps: Vec<StepDisplay> = report.steps.iter().cloned().map(StepDisplay).collect();
            print_list(&steps, format);
        }
    }
}

pub async fn execute(args: LifecycleArgs, config: &SuiteConfig, format: OutputFormat) -> Result<()> {
    let mut config = config.clone();
    if let Some(url) = args.booking_api {
        config.urls.booking_api = url;
    }

    let services = ServiceFactory::from_config(&config)?;
    let scenario = ScenarioProvider::from_rng(super::rng(args.seed)).booking_lifecycle();
    let credentials = admin_credentials(&config.auth);

    let report = run_booking_lifecycle(&services, &credentials, &scenario).await;
    print_report(&report, format);

    match report.failed_step() {
        Some(step) => {
            print_error(&format!("Lifecycle failed at '{}'", step.name));
            bail!("booking lifecycle failed against {}", config.urls.booking_api)
        }
        None => {
            print_success(&format!(
                "Lifecycle passed against {} ({} ms)",
                config.urls.booking_api, report.duration_ms
            ));
            Ok(())
        }
    }
}
