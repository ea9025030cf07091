// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::lifecycle::WaitBudget;
use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// What the binary should do with the target namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Ensure,
    Delete,
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ensure" | "create" => Ok(Action::Ensure),
            "delete" => Ok(Action::Delete),
            other => bail!("unknown action '{}', expected 'ensure' or 'delete'", other),
        }
    }
}

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub namespace: String,
    pub action: Action,
    pub wait_budget: WaitBudget,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace =
            lookup("NSWARD_NAMESPACE").context("NSWARD_NAMESPACE environment variable not set")?;
        let action = lookup("NSWARD_ACTION")
            .context("NSWARD_ACTION environment variable not set")?
            .parse::<Action>()?;

        let defaults = WaitBudget::default();
        let timeout = parse_secs(&lookup, "NSWARD_WAIT_TIMEOUT_SECS")?.unwrap_or(defaults.timeout);
        let interval =
            parse_secs(&lookup, "NSWARD_POLL_INTERVAL_SECS")?.unwrap_or(defaults.interval);
        if interval.is_zero() {
            bail!("NSWARD_POLL_INTERVAL_SECS must be greater than zero");
        }

        Ok(Config {
            namespace,
            action,
            wait_budget: WaitBudget::new(timeout, interval),
        })
    }
}

fn parse_secs<F>(lookup: &F, key: &str) -> Result<Option<Duration>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| {
            v.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .with_context(|| format!("{} must be a whole number of seconds, got '{}'", key, v))
        })
        .transpose()
}
