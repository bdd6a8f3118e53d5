//! Validate Commands

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use storefront_qa_common::{
    Booking, EntityKind, PaymentDetails, UserDetails, Validate, ValidationResult,
};

use crate::output::{print_list, print_success, OutputFormat, TableDisplay};

#[derive(Args)]
pub struct ValidateArgs {
    /// Entity kind: booking, user or payment
    pub kind: EntityKind,

    /// JSON file holding one entity or an array of them
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ValidationRow {
    pub index: usize,
    #[serde(flatten)]
    pub result: ValidationResult,
}

impl TableDisplay for ValidationRow {
    fn headers() -> Vec<&'static str> {
        vec!["#", "Valid", "Errors", "Warnings"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            if self.result.is_valid() { "✓" } else { "✗" }.to_string(),
            self.result.errors().join("\n"),
            self.result.warnings().join("\n"),
        ]
    }
}

fn check<T: DeserializeOwned + Validate>(value: Value) -> Result<ValidationResult> {
    let entity: T = serde_json::from_value(value)
        .with_context(|| format!("not a {} object", T::KIND))?;
    Ok(entity.validate())
}

/// Validate every entity in `document`, which may be one object or an array
pub fn validate_document(kind: EntityKind, document: Value) -> Result<Vec<ValidationRow>> {
    let values = match document {
        Value::Array(values) => values,
        other => vec![other],
    };

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let result = match kind {
                EntityKind::Booking => check::<Booking>(value),
                EntityKind::User => check::<UserDetails>(value),
                EntityKind::Payment => check::<PaymentDetails>(value),
            }
            .with_context(|| format!("entry {}", index))?;
            Ok(ValidationRow { index, result })
        })
        .collect()
}

pub fn execute(args: ValidateArgs, format: OutputFormat) -> Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", args.file.display()))?;

    let rows = validate_document(args.kind, document)?;
    print_list(&rows, format);

    let invalid = rows.iter().filter(|r| !r.result.is_valid()).count();
    if invalid > 0 {
        bail!("{} of {} {} entit(ies) invalid", invalid, rows.len(), args.kind);
    }
    print_success(&format!("{} {} entit(ies) valid", rows.len(), args.kind));
    Ok(())
}
