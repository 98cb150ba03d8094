// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Authenticated request dispatch and response classification

use crate::config::ClientConfig;
use crate::error::{Error, RequestError, Result};
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Method, Request, StatusCode};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::config::{KubeConfigOptions, Kubeconfig};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Status and body of a completed exchange
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RawResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::Decode)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Body of a Kubernetes `Status` returned on failures
#[derive(Deserialize)]
struct ErrorStatus {
    message: String,
}

/// JSON-encoded request payload together with its content type
pub(crate) struct Payload {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Payload {
    pub fn json<T: serde::Serialize + ?Sized>(content_type: &'static str, body: &T) -> Result<Self> {
        Ok(Self {
            content_type,
            bytes: serde_json::to_vec(body).map_err(Error::Encode)?,
        })
    }
}

/// Sends requests through a kube client, adding the bearer token to each of them
#[derive(Clone)]
pub struct Transport {
    client: kube::Client,
    authorization: Option<HeaderValue>,
}

impl Transport {
    pub fn new(client: kube::Client, token: Option<&str>) -> Result<Self> {
        let authorization = token
            .map(|token| {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                    Error::Configuration(format!("Bearer token is not a valid header value: {}", e))
                })?;
                value.set_sensitive(true);
                Ok::<_, Error>(value)
            })
            .transpose()?;

        Ok(Self {
            client,
            authorization,
        })
    }

    /// Build the underlying HTTPS client: base URL plus an optional custom trust root
    pub async fn from_config(config: &ClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url).map_err(|e| {
            Error::Configuration(format!("Invalid base URL {}: {}", config.base_url, e))
        })?;

        let mut cluster = serde_json::json!({ "server": config.base_url });
        if let Some(ca) = &config.ca_cert_path {
            cluster["certificate-authority"] = serde_json::json!(ca.display().to_string());
        }

        let kubeconfig: Kubeconfig = serde_json::from_value(serde_json::json!({
            "apiVersion": "v1",
            "kind": "Config",
            "clusters": [{ "name": "escafil", "cluster": cluster }],
            "users": [{ "name": "escafil", "user": {} }],
            "contexts": [{
                "name": "escafil",
                "context": { "cluster": "escafil", "user": "escafil" }
            }],
            "current-context": "escafil",
        }))
        .map_err(|e| Error::Configuration(format!("Failed to build kubeconfig: {}", e)))?;

        let client_config =
            kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(|e| Error::Configuration(format!("Failed to create config: {}", e)))?;

        let client = kube::Client::try_from(client_config)
            .map_err(|e| Error::Configuration(format!("Failed to create client: {}", e)))?;

        Self::new(client, config.token.as_deref())
    }

    /// Issue one request; any status >= 400 becomes [`Error::Request`]
    #[instrument(skip(self, payload))]
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
    ) -> Result<RawResponse> {
        let mut builder = Request::builder().method(method.clone()).uri(path);

        if let Some(authorization) = &self.authorization {
            builder = builder.header(AUTHORIZATION, authorization.clone());
        }

        let request = match payload {
            Some(payload) => builder
                .header(CONTENT_TYPE, payload.content_type)
                .body(payload.bytes)?,
            None => builder.body(Vec::new())?,
        };

        let response = self.client.send(request.map(Body::from)).await?;

        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .map_err(|e| Error::Body(e.to_string()))?
            .to_bytes();

        debug!("{} {} -> {}", method, path, parts.status);

        classify(RawResponse {
            status: parts.status,
            headers: parts.headers,
            body,
        })
    }
}

fn classify(response: RawResponse) -> Result<RawResponse> {
    if response.status.as_u16() < 400 {
        return Ok(response);
    }

    let status: ErrorStatus = response.json()?;
    Err(RequestError {
        message: status.message,
        kind: None,
        response,
    }
    .into())
}
