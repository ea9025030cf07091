// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes label keys applied by nsward
pub mod labels {
    /// Includes the namespace in cluster-wide monitoring collection
    pub const CLUSTER_MONITORING: &str = "openshift.io/cluster-monitoring";
    pub const CLUSTER_MONITORING_VALUE: &str = "true";
}

/// Namespace deletion polling configuration
pub mod deletion {
    /// Fixed interval between existence checks in seconds
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Total time to wait for the namespace to disappear in seconds
    pub const TIMEOUT_SECS: u64 = 600;

    /// Reason recorded while the namespace is still returned by the API
    pub const WAITING_REASON: &str = "waiting on namespace to be deleted";
}

/// Maximum length of a namespace name (RFC 1123 label)
pub const MAX_NAMESPACE_NAME_LEN: usize = 63;
