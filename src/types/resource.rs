// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::content_type;
use crate::error::{Error, Result};
use crate::kubernetes::transport::Payload;
use crate::kubernetes::url::resource_path;
use crate::kubernetes::Client;
use crate::registry::ResourceType;
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// One object of a known kind, backed by the raw JSON document the API server returned
#[derive(Clone)]
pub struct Resource {
    client: Client,
    resource_type: Arc<ResourceType>,
    document: Value,
}

impl Resource {
    pub fn new(client: Client, resource_type: Arc<ResourceType>, document: Value) -> Self {
        Self {
            client,
            resource_type,
            document,
        }
    }

    pub fn kind(&self) -> &str {
        &self.resource_type.kind
    }

    pub fn resource_type(&self) -> &ResourceType {
        &self.resource_type
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn into_document(self) -> Value {
        self.document
    }

    /// Decode the document into a typed representation such as `k8s_openapi::api::core::v1::Pod`
    pub fn try_parse<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.document).map_err(Error::Decode)
    }

    /// Value at `path` (a sequence of object keys), if every step exists
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.document, |value, key| value.get(key))
    }

    pub fn get_str(&self, path: &[&str]) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// String entries of the object at `path`; empty when the object is missing
    pub fn get_mapping(&self, path: &[&str]) -> BTreeMap<String, String> {
        self.get(path)
            .and_then(Value::as_object)
            .map(|object| {
                object
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str(&["metadata", "name"])
    }

    pub fn uid(&self) -> Option<&str> {
        self.get_str(&["metadata", "uid"])
    }

    pub fn namespace(&self) -> Option<&str> {
        self.get_str(&["metadata", "namespace"])
    }

    pub fn labels(&self) -> BTreeMap<String, String> {
        self.get_mapping(&["metadata", "labels"])
    }

    pub fn annotations(&self) -> BTreeMap<String, String> {
        self.get_mapping(&["metadata", "annotations"])
    }

    /// REST path of this object
    pub fn self_path(&self) -> Result<String> {
        let name = self.name().filter(|n| !n.is_empty()).ok_or_else(|| {
            Error::InvalidArgument(format!("{} has no metadata.name", self.kind()))
        })?;

        resource_path(
            &self.resource_type.api_group,
            Some(self.resource_type.collection.as_str()),
            Some(name),
            self.namespace(),
            None,
        )
    }

    /// Re-read the object from the server, replacing the whole local document
    #[instrument(skip(self), fields(resource = %self))]
    pub async fn refresh(&mut self) -> Result<&mut Self> {
        let path = self.self_path()?;
        let response = self
            .client
            .send(&self.resource_type, Method::GET, &path, None)
            .await?;

        self.document = response.json()?;
        Ok(self)
    }

    /// Send a strategic merge patch. The local document is left as is; call
    /// [`Resource::refresh`] to observe the result.
    #[instrument(skip(self, patch), fields(resource = %self))]
    pub async fn patch<P: Serialize + ?Sized>(&self, patch: &P) -> Result<()> {
        let path = self.self_path()?;
        let payload = Payload::json(content_type::STRATEGIC_MERGE_PATCH, patch)?;

        self.client
            .send(&self.resource_type, Method::PATCH, &path, Some(payload))
            .await?;
        debug!("Patched {}", path);
        Ok(())
    }

    /// Delete the object, optionally passing `DeleteOptions` as the body
    #[instrument(skip(self, options), fields(resource = %self))]
    pub async fn delete(&self, options: Option<&Value>) -> Result<()> {
        let path = self.self_path()?;
        let payload = options
            .map(|options| Payload::json(content_type::JSON, options))
            .transpose()?;

        self.client
            .send(&self.resource_type, Method::DELETE, &path, payload)
            .await?;
        debug!("Deleted {}", path);
        Ok(())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} \"{}\">", self.kind(), self.name().unwrap_or_default())
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("kind", &self.kind())
            .field("document", &self.document)
            .finish()
    }
}
