// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use escafil::{Client, ClientConfig, ListParams};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Lists the pods of a namespace and labels the first one.
///
/// Uses the service account when running in a pod, `KUBE_API_URL` (plus optional
/// `KUBE_CA_CERT` and `KUBE_TOKEN`) otherwise.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match ClientConfig::in_cluster() {
        Ok(config) => config,
        Err(e) => {
            debug!("Not running in a cluster ({}), using the environment", e);
            ClientConfig::from_env()?
        }
    };
    info!("Connecting to {}", config.base_url);
    let client = Client::try_new(config).await?;

    let namespace = std::env::var("NAMESPACE").unwrap_or_else(|_| "default".to_string());
    let pods = client
        .list("Pod", &ListParams::default(), Some(&namespace))
        .await?;
    info!("Found {} pods in {}", pods.len(), namespace);

    for pod in &pods {
        info!("{} labels={:?}", pod, pod.labels());
    }

    if let Some(pod) = pods.into_iter().next() {
        pod.patch(&serde_json::json!({ "metadata": { "labels": { "seen-by": "escafil" } } }))
            .await?;

        let mut pod = pod;
        pod.refresh().await?;
        info!("{} now has labels {:?}", pod, pod.labels());
    }

    Ok(())
}
