// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace provisioning and reclamation.

use crate::constants::{deletion::WAITING_REASON, MAX_NAMESPACE_NAME_LEN};
use crate::error::{NswardError, Result};
use crate::kubernetes::{is_already_exists, is_not_found, monitored_namespace, NamespaceApi};
use crate::lifecycle::wait::{poll_immediate, Attempt, WaitBudget};
use tracing::{debug, info, instrument, warn};

/// What a single existence check observed while waiting for deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespacePresence {
    Present,
    Absent,
    /// The API could not answer; treated like `Present`
    Unreachable(String),
}

impl NamespacePresence {
    fn into_attempt(self) -> Attempt<()> {
        match self {
            NamespacePresence::Absent => Attempt::Done(()),
            NamespacePresence::Present => Attempt::Retry(WAITING_REASON.to_string()),
            NamespacePresence::Unreachable(detail) => {
                Attempt::Retry(format!("error talking to k8s apiserver: {}", detail))
            }
        }
    }
}

/// Creates and tears down namespaces through an injected API client
pub struct NamespaceManager<A> {
    api: A,
    wait_budget: WaitBudget,
}

impl<A: NamespaceApi> NamespaceManager<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            wait_budget: WaitBudget::default(),
        }
    }

    /// Override how long deletion is awaited and how often it is checked
    pub fn with_wait_budget(mut self, wait_budget: WaitBudget) -> Self {
        self.wait_budget = wait_budget;
        self
    }

    pub fn wait_budget(&self) -> WaitBudget {
        self.wait_budget
    }

    /// Ensure the namespace exists and carries the monitoring label.
    ///
    /// An existing namespace counts as success; its labels are left untouched.
    #[instrument(skip(self))]
    pub async fn ensure_namespace(&self, name: &str) -> Result<()> {
        validate_namespace_name(name)?;

        match self.api.create_namespace(&monitored_namespace(name)).await {
            Ok(_) => {
                info!("Namespace {} created successfully", name);
                Ok(())
            }
            Err(e) if is_already_exists(&e) => {
                debug!("Namespace {} already exists", name);
                Ok(())
            }
            Err(e) => Err(NswardError::ApiFailure(e)),
        }
    }

    /// Delete the namespace and block until the API no longer returns it.
    ///
    /// A failed delete request is returned right away without polling.
    /// Otherwise fails with [`NswardError::Timeout`] carrying the last
    /// observed reason if the namespace outlives the wait budget.
    #[instrument(skip(self))]
    pub async fn delete_namespace_and_wait(&self, name: &str) -> Result<()> {
        validate_namespace_name(name)?;

        match self.api.delete_namespace(name).await {
            Ok(()) => info!("Deletion of namespace {} requested", name),
            Err(e) if is_not_found(&e) => debug!("Namespace {} not found on delete", name),
            Err(e) => return Err(NswardError::ApiFailure(e)),
        }

        info!(
            "Waiting up to {:?} for namespace {} to terminate",
            self.wait_budget.timeout, name
        );
        poll_immediate(self.wait_budget, move || async move {
            self.namespace_presence(name).await.into_attempt()
        })
        .await?;

        info!("Namespace {} deleted", name);
        Ok(())
    }

    async fn namespace_presence(&self, name: &str) -> NamespacePresence {
        match self.api.get_namespace(name).await {
            Ok(_) => NamespacePresence::Present,
            Err(e) if is_not_found(&e) => NamespacePresence::Absent,
            Err(e) => {
                warn!("Error checking namespace {}: {}", name, e);
                NamespacePresence::Unreachable(e.to_string())
            }
        }
    }
}

/// Ensure a namespace exists using the default settings
pub async fn ensure_namespace<A: NamespaceApi>(api: &A, name: &str) -> Result<()> {
    NamespaceManager::new(api).ensure_namespace(name).await
}

/// Delete a namespace and wait for it to disappear using the default budget
pub async fn delete_namespace_and_wait<A: NamespaceApi>(api: &A, name: &str) -> Result<()> {
    NamespaceManager::new(api).delete_namespace_and_wait(name).await
}

/// Reject names the API server would never accept as a namespace (RFC 1123 label)
pub fn validate_namespace_name(name: &str) -> Result<()> {
    let valid_chars = name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    let alnum_edges = name.bytes().next().is_some_and(|b| b.is_ascii_alphanumeric())
        && name.bytes().last().is_some_and(|b| b.is_ascii_alphanumeric());

    if name.is_empty() || name.len() > MAX_NAMESPACE_NAME_LEN || !valid_chars || !alnum_edges {
        return Err(NswardError::InvalidName(name.to_string()));
    }
    Ok(())
}
