// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NswardError {
    /// The control plane rejected a create or delete request.
    #[error("Kubernetes API error: {0}")]
    ApiFailure(#[from] kube::Error),

    /// The namespace was still observable when the wait budget ran out.
    #[error("Timed out waiting for the condition: {0}")]
    Timeout(String),

    #[error("Invalid namespace name: {0}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, NswardError>;
