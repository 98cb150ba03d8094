// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! REST path construction

use crate::error::{Error, Result};
use url::form_urlencoded;

/// Build `/{api_group}[/namespaces/{ns}][/{collection}][/{name}][/{subresource}]`.
///
/// Empty segments count as absent. Segments are not escaped; names and
/// namespaces are expected to be valid Kubernetes identifiers already.
pub fn resource_path(
    api_group: &str,
    collection: Option<&str>,
    name: Option<&str>,
    namespace: Option<&str>,
    subresource: Option<&str>,
) -> Result<String> {
    let mut components = vec![api_group];

    if let Some(namespace) = present(namespace) {
        components.extend(["namespaces", namespace]);
    }
    let collection = present(collection);
    if let Some(collection) = collection {
        components.push(collection);
    }
    if let Some(name) = present(name) {
        if collection.is_none() {
            return Err(Error::InvalidArgument(
                "collection is required for URLs with names".to_string(),
            ));
        }
        components.push(name);
    }
    if let Some(subresource) = present(subresource) {
        components.push(subresource);
    }

    Ok(format!("/{}", components.join("/")))
}

fn present(segment: Option<&str>) -> Option<&str> {
    segment.filter(|s| !s.is_empty())
}

/// Append form-encoded query parameters to a path, if there are any
pub fn with_query(path: String, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path;
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("{}?{}", path, query)
}
