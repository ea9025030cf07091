// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace lifecycle: idempotent creation and deletion with confirmation.

pub mod manager;
pub mod wait;

pub use manager::{
    delete_namespace_and_wait, ensure_namespace, validate_namespace_name, NamespaceManager,
    NamespacePresence,
};
pub use wait::{poll_immediate, Attempt, WaitBudget};
