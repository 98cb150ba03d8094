// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Well-known locations available to pods running inside a cluster
pub mod in_cluster {
    /// API server address reachable from every pod
    pub const URL: &str = "https://kubernetes.default";
    /// CA bundle mounted with the service account
    pub const CA_CERT_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/ca.crt";
    /// Service account bearer token
    pub const TOKEN_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/token";
}

/// Environment variables read by `ClientConfig::from_env`
pub mod env {
    pub const API_URL: &str = "KUBE_API_URL";
    pub const CA_CERT: &str = "KUBE_CA_CERT";
    pub const TOKEN: &str = "KUBE_TOKEN";
}

/// Request body content types
pub mod content_type {
    pub const JSON: &str = "application/json";
    pub const STRATEGIC_MERGE_PATCH: &str = "application/strategic-merge-patch+json";
}

/// API group path of the core (legacy) group
pub const CORE_API_GROUP: &str = "api/v1";
