//! Booking Commands

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use storefront_qa_common::{Booking, BookingDataProvider};

use crate::output::{print_list, OutputFormat, TableDisplay};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum BookingArchetype {
    #[default]
    Standard,
    Minimal,
    MaxPrice,
    MinPrice,
    HighValue,
    LowValue,
    LongStay,
}

#[derive(Args)]
pub struct BookingArgs {
    /// Number of bookings to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Fixed total price
    #[arg(short, long, conflicts_with = "archetype")]
    pub price: Option<i64>,

    /// Booking archetype
    #[arg(short, long, value_enum, default_value_t = BookingArchetype::Standard)]
    pub archetype: BookingArchetype,

    /// Stay length in nights for long-stay bookings
    #[arg(long, default_value_t = 14)]
    pub days: u32,

    /// RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Booking display wrapper for serialization
#[derive(Serialize)]
#[serde(transparent)]
pub struct BookingDisplay(pub Booking);

impl TableDisplay for BookingDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["First Name", "Last Name", "Price", "Deposit", "Check-in", "Check-out", "Needs"]
    }

    fn row(&self) -> Vec<String> {
        let booking = &self.0;
        vec![
            booking.firstname.clone(),
            booking.lastname.clone(),
            booking.totalprice.to_string(),
            if booking.depositpaid { "✓" } else { "✗" }.to_string(),
            booking.bookingdates.checkin.to_string(),
            booking.bookingdates.checkout.to_string(),
            booking.additionalneeds.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }
}

pub fn execute(args: BookingArgs, format: OutputFormat) -> Result<()> {
    if args.count == 0 {
        bail!("--count must be at least 1");
    }

    let mut provider = BookingDataProvider::from_rng(super::rng(args.seed));
    let bookings: Vec<BookingDisplay> = (0..args.count)
        .map(|_| match (args.price, args.archetype) {
            (Some(price), _) => provider.booking_with_price(price),
            (None, BookingArchetype::Standard) => provider.standard_booking(),
            (None, BookingArchetype::Minimal) => provider.minimal_booking(),
            (None, BookingArchetype::MaxPrice) => provider.max_price_booking(),
            (None, BookingArchetype::MinPrice) => provider.min_price_booking(),
            (None, BookingArchetype::HighValue) => provider.high_value_booking(),
            (None, BookingArchetype::LowValue) => provider.low_value_booking(),
            (None, BookingArchetype::LongStay) => provider.long_stay_booking(args.days),
        })
        .map(BookingDisplay)
        .collect();

    print_list(&bookings, format);
    Ok(())
}
