// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Bounded fixed-interval polling

use crate::constants::deletion::{POLL_INTERVAL_SECS, TIMEOUT_SECS};
use crate::error::{NswardError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Timeout and interval for a polling loop. Fixed once the loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitBudget {
    pub timeout: Duration,
    pub interval: Duration,
}

impl WaitBudget {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }
}

impl Default for WaitBudget {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(TIMEOUT_SECS),
            interval: Duration::from_secs(POLL_INTERVAL_SECS),
        }
    }
}

/// Result of a single polling attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt<T> {
    /// The condition holds; stop polling
    Done(T),
    /// Not there yet, with a reason describing why
    Retry(String),
}

/// Run `check` immediately, then once per interval, until it reports
/// [`Attempt::Done`] or the next sleep would exceed the timeout.
///
/// On timeout the error carries the reason from the final attempt.
pub async fn poll_immediate<T, F, Fut>(budget: WaitBudget, mut check: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Attempt<T>>,
{
    let started = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let reason = match check().await {
            Attempt::Done(value) => {
                debug!(attempts, elapsed = ?started.elapsed(), "Condition met");
                return Ok(value);
            }
            Attempt::Retry(reason) => reason,
        };

        if started.elapsed() + budget.interval > budget.timeout {
            debug!(attempts, elapsed = ?started.elapsed(), "Wait budget exhausted");
            return Err(NswardError::Timeout(reason));
        }

        debug!(attempts, "{}, retrying in {:?}", reason, budget.interval);
        sleep(budget.interval).await;
    }
}
