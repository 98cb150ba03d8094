// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! A minimal Kubernetes API client working on raw JSON documents.

pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod registry;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::ClientConfig;
pub use error::{Error, RequestError, Result};
pub use kubernetes::{Client, ListParams, RawResponse};
pub use registry::{Registry, ResourceType};
pub use types::Resource;
