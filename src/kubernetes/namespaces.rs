// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace access against the control plane

use crate::constants::labels;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{DeleteParams, ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// The subset of the Namespace API the lifecycle operations rely on.
///
/// Implemented for [`kube::Client`]; tests substitute a mock.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NamespaceApi: Send + Sync {
    /// Submit a creation request for the given namespace object
    async fn create_namespace(&self, namespace: &Namespace) -> Result<Namespace, kube::Error>;

    /// Request deletion of a namespace; finalization happens asynchronously
    async fn delete_namespace(&self, name: &str) -> Result<(), kube::Error>;

    /// Fetch a namespace by name
    async fn get_namespace(&self, name: &str) -> Result<Namespace, kube::Error>;
}

#[async_trait]
impl NamespaceApi for Client {
    async fn create_namespace(&self, namespace: &Namespace) -> Result<Namespace, kube::Error> {
        let namespaces: Api<Namespace> = Api::all(self.clone());
        namespaces.create(&PostParams::default(), namespace).await
    }

    async fn delete_namespace(&self, name: &str) -> Result<(), kube::Error> {
        let namespaces: Api<Namespace> = Api::all(self.clone());
        let response = namespaces.delete(name, &DeleteParams::default()).await?;
        if response.is_left() {
            debug!("Namespace {} accepted for deletion, finalizing", name);
        }
        Ok(())
    }

    async fn get_namespace(&self, name: &str) -> Result<Namespace, kube::Error> {
        let namespaces: Api<Namespace> = Api::all(self.clone());
        namespaces.get(name).await
    }
}

#[async_trait]
impl<T: NamespaceApi + ?Sized> NamespaceApi for &T {
    async fn create_namespace(&self, namespace: &Namespace) -> Result<Namespace, kube::Error> {
        (**self).create_namespace(namespace).await
    }

    async fn delete_namespace(&self, name: &str) -> Result<(), kube::Error> {
        (**self).delete_namespace(name).await
    }

    async fn get_namespace(&self, name: &str) -> Result<Namespace, kube::Error> {
        (**self).get_namespace(name).await
    }
}

/// Check whether the API reported the object as missing
pub fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.code == 404 || resp.reason == "NotFound")
}

/// Check whether the API rejected a create because the object already exists
pub fn is_already_exists(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.code == 409 && resp.reason == "AlreadyExists")
}

/// Build a namespace object carrying the cluster monitoring label
pub fn monitored_namespace(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: Some(BTreeMap::from([(
                labels::CLUSTER_MONITORING.to_string(),
                labels::CLUSTER_MONITORING_VALUE.to_string(),
            )])),
            ..Default::default()
        },
        ..Default::default()
    }
}
