//! Scenario Commands

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use storefront_qa_common::{ScenarioKind, ScenarioProvider};

use crate::output::{print_list, print_serialized, OutputFormat, TableDisplay};

#[derive(Args)]
pub struct ScenarioArgs {
    /// Scenario to build; omit to list every scenario
    pub kind: Option<ScenarioKind>,

    /// RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Serialize)]
pub struct ScenarioSummary {
    pub kind: ScenarioKind,
    pub expected_behavior: String,
}

impl TableDisplay for ScenarioSummary {
    fn headers() -> Vec<&'static str> {
        vec!["Scenario", "Expected Behavior"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.kind.to_string(), self.expected_behavior.clone()]
    }
}

pub fn execute(args: ScenarioArgs, format: OutputFormat) -> Result<()> {
    let mut provider = ScenarioProvider::from_rng(super::rng(args.seed));

    match args.kind {
        Some(kind) => {
            let scenario = provider.build(kind);
            if let OutputFormat::Table | OutputFormat::Plain = format {
                print_list(
                    &[ScenarioSummary {
                        kind,
                        expected_behavior: scenario.expected_behavior().to_string(),
                    }],
                    format,
                );
            }
            print_serialized(&scenario, format);
        }
        None => {
            let summaries: Vec<ScenarioSummary> = ScenarioKind::ALL
                .into_iter()
                .map(|kind| ScenarioSummary {
                    kind,
                    expected_behavior: provider.build(kind).expected_behavior().to_string(),
                })
                .collect();
            print_list(&summaries, format);
        }
    }
    Ok(())
}
