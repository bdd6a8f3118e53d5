//! Booking lifecycle smoke run
//!
//! Drives a `BookingLifecycleScenario` against a live booking API:
//!
//! ```text
//! authenticate -> create -> read back -> update -> partial update -> delete -> confirm gone
//! ```
//!
//! Every step is timed. The run stops at the first failing step and the
//! failure is recorded in the report, so a caller always gets a report back.
//! A booking created before the failure is deleted in a trailing `cleanup`
//! step.

use std::fmt::Debug;
use std::future::Future;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use storefront_qa_common::scenario::BookingLifecycleScenario;
use storefront_qa_common::AuthCredentials;

use crate::error::{ClientError, ClientResult};
use crate::factory::Services;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleStep {
    pub name: String,
    pub success: bool,
    pub detail: Option<String>,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleReport {
    pub booking_id: Option<u64>,
    pub success: bool,
    pub duration_ms: u64,
    pub steps: Vec<LifecycleStep>,
}

impl LifecycleReport {
    pub fn failed_step(&self) -> Option<&LifecycleStep> {
        self.steps.iter().find(|s| !s.success)
    }
}

#[derive(Default)]
struct Run {
    steps: Vec<LifecycleStep>,
    token: Option<String>,
    booking_id: Option<u64>,
    deleted: bool,
}

impl Run {
    /// Time one step; `None` means it failed and the run must stop
    async fn step<T, F>(&mut self, name: &str, fut: F) -> Option<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        let start = Instant::now();
        debug!("lifecycle step: {}", name);
        let outcome = fut.await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(value) => {
                info!("✓ {} ({} ms)", name, duration_ms);
                self.steps.push(LifecycleStep {
                    name: name.to_string(),
                    success: true,
                    detail: None,
                    duration_ms,
                });
                Some(value)
            }
            Err(e) => {
                error!("✗ {} - {}", name, e);
                self.steps.push(LifecycleStep {
                    name: name.to_string(),
                    success: false,
                    detail: Some(e.to_string()),
                    duration_ms,
                });
                None
            }
        }
    }
}

fn expect_eq<T: PartialEq + Debug>(what: &str, actual: &T, expected: &T) -> ClientResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(ClientError::UnexpectedResponse(format!(
            "{} mismatch: expected {:?}, got {:?}",
            what, expected, actual
        )))
    }
}

async fn drive(
    run: &mut Run,
    services: &Services,
    credentials: &AuthCredentials,
    scenario: &BookingLifecycleScenario,
) -> Option<()> {
    let bookings = &services.booking;

    let token = run.step("authenticate", services.auth.token(credentials)).await?;
    run.token = Some(token.clone());

    let id = run
        .step("create", async {
            let created = bookings.create_booking(&scenario.initial_booking).await?;
            expect_eq("created booking", &created.booking, &scenario.initial_booking)?;
            Ok::<_, ClientError>(created.bookingid)
        })
        .await?;
    run.booking_id = Some(id);

    run.step("read back", async {
        let fetched = bookings.booking(id).await?;
        expect_eq("fetched booking", &fetched, &scenario.initial_booking)
    })
    .await?;

    run.step("update", async {
        let updated = bookings.update_booking(id, &scenario.update_data, &token).await?;
        expect_eq("updated booking", &updated, &scenario.update_data)
    })
    .await?;

    run.step("partial update", async {
        let patched = bookings
            .partial_update_booking(id, &scenario.partial_update, &token)
            .await?;
        expect_eq("patched booking", &patched, &scenario.expected_final_booking())
    })
    .await?;

    run.step("delete", bookings.delete_booking(id, &token)).await?;
    run.deleted = true;

    run.step("confirm gone", async {
        if bookings.booking_exists(id).await? {
            Err(ClientError::UnexpectedResponse(format!(
                "booking {} still retrievable after delete",
                id
            )))
        } else {
            Ok(())
        }
    })
    .await
}

/// Remove a booking left behind by a failed run. Best effort: a failure here
/// is recorded but never masks the step that stopped the run.
async fn clean_up(run: &mut Run, services: &Services) {
    if run.deleted {
        return;
    }
    let (Some(id), Some(token)) = (run.booking_id, run.token.clone()) else {
        return;
    };
    warn!("lifecycle stopped early, deleting booking {}", id);
    run.step("cleanup", services.booking.delete_booking(id, &token)).await;
}

pub async fn run_booking_lifecycle(
    services: &Services,
    credentials: &AuthCredentials,
    scenario: &BookingLifecycleScenario,
) -> LifecycleReport {
    let start = Instant::now();
    let mut run = Run::default();

    info!("Running booking lifecycle...");
    let completed = drive(&mut run, services, credentials, scenario).await.is_some();
    if !completed {
        clean_up(&mut run, services).await;
    }
    let duration_ms = start.elapsed().as_millis() as u64;

    let passed = run.steps.iter().filter(|s| s.success).count();
    info!(
        "Lifecycle results: {} of {} step(s) passed ({} ms)",
        passed,
        run.steps.len(),
        duration_ms
    );

    LifecycleReport {
        booking_id: run.booking_id,
        success: completed,
        duration_ms,
        steps: run.steps,
    }
}
