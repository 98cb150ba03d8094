// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as env_vars, in_cluster};
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Connection parameters for a single cluster
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API server, e.g. `https://kubernetes.default`
    pub base_url: String,
    /// PEM bundle used instead of the system trust store
    pub ca_cert_path: Option<PathBuf>,
    /// Bearer token sent with every request
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ca_cert_path: None,
            token: None,
        }
    }

    pub fn with_ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_cert_path = Some(path.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Configuration for a pod talking to its own cluster through the service account
    pub fn in_cluster() -> Result<Self> {
        Self::in_cluster_from(Path::new(in_cluster::TOKEN_PATH))
    }

    fn in_cluster_from(token_path: &Path) -> Result<Self> {
        let token = read_token(token_path)?;

        Ok(Self::new(in_cluster::URL)
            .with_ca_cert(in_cluster::CA_CERT_PATH)
            .with_token(token))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(env_vars::API_URL).ok_or_else(|| {
            Error::Configuration(format!("{} environment variable not set", env_vars::API_URL))
        })?;

        let mut config = Self::new(base_url);
        if let Some(path) = lookup(env_vars::CA_CERT) {
            config = config.with_ca_cert(path);
        }
        if let Some(token) = lookup(env_vars::TOKEN) {
            config = config.with_token(token);
        }

        Ok(config)
    }
}

// The token never ends up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("ca_cert_path", &self.ca_cert_path)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn read_token(path: &Path) -> Result<String> {
    let token = fs::read_to_string(path).map_err(|e| {
        Error::Configuration(format!(
            "Failed to read service account token {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(token.trim_end().to_string())
}
