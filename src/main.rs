// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nsward::config::{Action, Config};
use nsward::lifecycle::NamespaceManager;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, action={:?}",
        config.namespace, config.action
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let manager = NamespaceManager::new(client).with_wait_budget(config.wait_budget);

    match config.action {
        Action::Ensure => manager.ensure_namespace(&config.namespace).await?,
        Action::Delete => {
            let budget = manager.wait_budget();
            info!(
                "Deleting namespace {} (timeout {:?}, poll interval {:?})",
                config.namespace, budget.timeout, budget.interval
            );
            manager.delete_namespace_and_wait(&config.namespace).await?
        }
    }

    info!("Done");
    Ok(())
}
