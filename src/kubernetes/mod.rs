// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes API access: path construction, authenticated transport and the client facade.

pub mod client;
pub mod transport;
pub mod url;

pub use client::{Client, ListParams};
pub use transport::RawResponse;
pub use url::resource_path;
