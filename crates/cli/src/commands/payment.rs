//! Payment Commands

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use storefront_qa_common::{PaymentDetails, PaymentFactory};

use crate::output::{print_item, OutputFormat, TableDisplay};

#[derive(Args)]
pub struct PaymentArgs {
    /// Generate details every field of which fails validation
    #[arg(long)]
    pub invalid: bool,

    /// RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Payment display wrapper for serialization
#[derive(Serialize)]
#[serde(transparent)]
pub struct PaymentDisplay(pub PaymentDetails);

impl TableDisplay for PaymentDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["Name on Card", "Card Number", "CVC", "Expiry"]
    }

    fn row(&self) -> Vec<String> {
        let payment = &self.0;
        vec![
            payment.name_on_card.clone(),
            payment.card_number.clone(),
            payment.cvc.clone(),
            format!("{}/{}", payment.expiry_month, payment.expiry_year),
        ]
    }
}

pub fn execute(args: PaymentArgs, format: OutputFormat) -> Result<()> {
    let mut factory = PaymentFactory::from_rng(super::rng(args.seed));
    let payment = if args.invalid {
        factory.invalid_payment()
    } else {
        factory.valid_payment()
    };

    print_item(&PaymentDisplay(payment), format);
    Ok(())
}
