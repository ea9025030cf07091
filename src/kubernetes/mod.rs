// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes access for namespace management.

pub mod namespaces;

pub use namespaces::{is_already_exists, is_not_found, monitored_namespace, NamespaceApi};
