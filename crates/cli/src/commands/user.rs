//! User Commands

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use storefront_qa_common::{UserDetails, UserFactory, UserOverrides};

use crate::output::{print_list, OutputFormat, TableDisplay};

#[derive(Args)]
pub struct UserArgs {
    /// Number of users to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Country for every generated user
    #[arg(long)]
    pub country: Option<String>,

    /// Email domain for every generated user
    #[arg(long)]
    pub domain: Option<String>,

    /// Fixed password (not validated)
    #[arg(long)]
    pub password: Option<String>,

    /// Generate company accounts (newsletter on, offers off)
    #[arg(long)]
    pub corporate: bool,

    /// RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// User display wrapper for serialization
#[derive(Serialize)]
#[serde(transparent)]
pub struct UserDisplay(pub UserDetails);

impl TableDisplay for UserDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Email", "Password", "Country", "City", "Mobile", "Newsletter"]
    }

    fn row(&self) -> Vec<String> {
        let user = &self.0;
        vec![
            format!("{} {} {}", user.title, user.firstname, user.lastname),
            user.email.clone(),
            user.password.clone(),
            user.country.clone(),
            user.city.clone(),
            user.mobile_number.clone(),
            if user.newsletter { "✓" } else { "✗" }.to_string(),
        ]
    }
}

/// Every flag folded into one set of overrides, so they combine freely
fn overrides(args: &UserArgs) -> UserOverrides {
    let mut overrides = UserOverrides {
        country: args.country.clone(),
        email_domain: args.domain.clone(),
        password: args.password.clone(),
        ..Default::default()
    };
    if args.corporate {
        overrides.newsletter = Some(true);
        overrides.special_offers = Some(false);
    }
    overrides
}

pub fn execute(args: UserArgs, format: OutputFormat) -> Result<()> {
    if args.count == 0 {
        bail!("--count must be at least 1");
    }

    let mut factory = UserFactory::from_rng(super::rng(args.seed));
    let users: Vec<UserDisplay> = (0..args.count)
        .map(|_| UserDisplay(factory.create_user(overrides(&args))))
        .collect();

    print_list(&users, format);
    Ok(())
}
