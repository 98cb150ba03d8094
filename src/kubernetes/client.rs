// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client entry point: get, list and create resources by kind

use crate::config::ClientConfig;
use crate::constants::content_type;
use crate::error::Result;
use crate::kubernetes::transport::{Payload, RawResponse, Transport};
use crate::kubernetes::url::{resource_path, with_query};
use crate::registry::{Registry, ResourceType};
use crate::types::Resource;
use http::Method;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Selectors narrowing a list request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub field_selector: Option<String>,
    pub label_selector: Option<String>,
}

impl ListParams {
    /// Filter by fields, e.g. `status.phase=Running`
    pub fn fields(mut self, selector: &str) -> Self {
        self.field_selector = Some(selector.to_string());
        self
    }

    /// Filter by labels, e.g. `app=web,tier!=db`
    pub fn labels(mut self, selector: &str) -> Self {
        self.label_selector = Some(selector.to_string());
        self
    }

    fn query_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        if let Some(fields) = &self.field_selector {
            pairs.push(("fieldSelector", fields.as_str()));
        }
        if let Some(labels) = &self.label_selector {
            pairs.push(("labelSelector", labels.as_str()));
        }
        pairs
    }
}

/// Handle to one cluster. Cheap to clone; clones share the connection and the registry.
#[derive(Clone)]
pub struct Client {
    transport: Transport,
    registry: Arc<Registry>,
}

impl Client {
    /// Connect to the cluster described by `config` using the built-in registry
    pub async fn try_new(config: ClientConfig) -> Result<Self> {
        info!("Creating client for {}", config.base_url);
        let transport = Transport::from_config(&config).await?;

        Ok(Self {
            transport,
            registry: Arc::new(Registry::default()),
        })
    }

    /// Connect to the cluster this process is running in
    pub async fn in_cluster() -> Result<Self> {
        Self::try_new(ClientConfig::in_cluster()?).await
    }

    /// Wrap an existing kube client, e.g. one built on a custom service stack
    pub fn from_kube_client(client: kube::Client, token: Option<&str>) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(client, token)?,
            registry: Arc::new(Registry::default()),
        })
    }

    /// Replace the set of known kinds
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn resource_type(&self, kind: &str) -> Result<Arc<ResourceType>> {
        self.registry.resolve(kind)
    }

    /// REST path of a kind's collection, or of one item when `name` is given
    pub fn resource_path(
        &self,
        kind: &str,
        name: Option<&str>,
        namespace: Option<&str>,
        subresource: Option<&str>,
    ) -> Result<String> {
        let resource_type = self.resource_type(kind)?;
        let namespace = resource_type.validate_namespace(namespace)?;

        resource_path(
            &resource_type.api_group,
            Some(resource_type.collection.as_str()),
            name,
            namespace,
            subresource,
        )
    }

    /// Fetch a single resource by name
    #[instrument(skip(self))]
    pub async fn get(&self, kind: &str, name: &str, namespace: Option<&str>) -> Result<Resource> {
        let resource_type = self.resource_type(kind)?;
        let namespace = resource_type.validate_namespace(namespace)?;

        let mut metadata = serde_json::json!({ "name": name });
        if let Some(namespace) = namespace {
            metadata["namespace"] = serde_json::json!(namespace);
        }

        let mut resource = Resource::new(
            self.clone(),
            resource_type,
            serde_json::json!({ "metadata": metadata }),
        );
        resource.refresh().await?;

        Ok(resource)
    }

    /// Create a resource from `body` and return the server's representation of it
    #[instrument(skip(self, body))]
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        kind: &str,
        body: &B,
        namespace: Option<&str>,
    ) -> Result<Resource> {
        let resource_type = self.resource_type(kind)?;
        let namespace = resource_type.validate_namespace(namespace)?;
        let path = resource_path(
            &resource_type.api_group,
            Some(resource_type.collection.as_str()),
            None,
            namespace,
            None,
        )?;

        let payload = Payload::json(content_type::JSON, body)?;
        let response = self.send(&resource_type, Method::POST, &path, Some(payload)).await?;

        let resource = Resource::new(self.clone(), resource_type, response.json()?);
        info!("Created {}", resource);
        Ok(resource)
    }

    /// List resources of a kind, across all namespaces unless `namespace` is given
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        kind: &str,
        params: &ListParams,
        namespace: Option<&str>,
    ) -> Result<Vec<Resource>> {
        let resource_type = self.resource_type(kind)?;
        let namespace = resource_type.validate_namespace(namespace)?;
        let path = resource_path(
            &resource_type.api_group,
            Some(resource_type.collection.as_str()),
            None,
            namespace,
            None,
        )?;
        let path = with_query(path, &params.query_pairs());

        let response = self.send(&resource_type, Method::GET, &path, None).await?;
        let mut list: serde_json::Value = response.json()?;

        let items = match list.get_mut("items").map(serde_json::Value::take) {
            Some(serde_json::Value::Array(items)) => items,
            _ => Vec::new(),
        };
        debug!("Listed {} {}", items.len(), resource_type.collection);

        Ok(items
            .into_iter()
            .map(|item| Resource::new(self.clone(), resource_type.clone(), item))
            .collect())
    }

    /// Send a request on behalf of `resource_type`; request errors name its kind
    pub(crate) async fn send(
        &self,
        resource_type: &ResourceType,
        method: Method,
        path: &str,
        payload: Option<Payload>,
    ) -> Result<RawResponse> {
        self.transport
            .send(method, path, payload)
            .await
            .map_err(|e| e.for_kind(&resource_type.kind))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").field("transport", &"...").finish()
    }
}
