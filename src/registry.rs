// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource kinds known to the client and how they are addressed.

use crate::constants::CORE_API_GROUP;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Static description of one resource kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceType {
    pub kind: String,
    /// Path prefix of the API group, e.g. `api/v1` or `apis/apps/v1`
    pub api_group: String,
    /// Collection segment of the REST path, e.g. `pods`
    pub collection: String,
    pub namespaced: bool,
}

impl ResourceType {
    /// A namespaced kind in the core group whose collection is `lowercase(kind) + "s"`.
    ///
    /// The pluralization is naive on purpose: kinds such as `Endpoints` or
    /// `Ingress` must set their collection with [`ResourceType::with_collection`].
    pub fn new(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        let collection = format!("{}s", kind.to_lowercase());

        Self {
            kind,
            api_group: CORE_API_GROUP.to_string(),
            collection,
            namespaced: true,
        }
    }

    pub fn with_api_group(mut self, api_group: impl Into<String>) -> Self {
        self.api_group = api_group.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn cluster_scoped(mut self) -> Self {
        self.namespaced = false;
        self
    }

    /// Reject a namespace for kinds that don't live in one
    pub fn validate_namespace<'a>(&self, namespace: Option<&'a str>) -> Result<Option<&'a str>> {
        match namespace.filter(|ns| !ns.is_empty()) {
            Some(_) if !self.namespaced => Err(Error::InvalidArgument(format!(
                "{} is not namespaced",
                self.kind
            ))),
            ns => Ok(ns),
        }
    }
}

/// Mapping from kind name to its [`ResourceType`]
#[derive(Debug, Clone)]
pub struct Registry {
    types: HashMap<String, Arc<ResourceType>>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Registry pre-populated with the commonly used built-in kinds
    pub fn builtin() -> Self {
        let mut registry = Self::empty();

        let builtin = [
            ResourceType::new("Pod"),
            ResourceType::new("Service"),
            ResourceType::new("ConfigMap"),
            ResourceType::new("Secret"),
            ResourceType::new("ServiceAccount"),
            ResourceType::new("Event"),
            ResourceType::new("PersistentVolumeClaim"),
            ResourceType::new("ReplicationController"),
            ResourceType::new("LimitRange"),
            ResourceType::new("ResourceQuota"),
            ResourceType::new("Endpoints").with_collection("endpoints"),
            ResourceType::new("Namespace").cluster_scoped(),
            ResourceType::new("Node").cluster_scoped(),
            ResourceType::new("PersistentVolume").cluster_scoped(),
            ResourceType::new("Deployment").with_api_group("apis/apps/v1"),
            ResourceType::new("ReplicaSet").with_api_group("apis/apps/v1"),
            ResourceType::new("StatefulSet").with_api_group("apis/apps/v1"),
            ResourceType::new("DaemonSet").with_api_group("apis/apps/v1"),
            ResourceType::new("Job").with_api_group("apis/batch/v1"),
            ResourceType::new("CronJob").with_api_group("apis/batch/v1"),
            ResourceType::new("Ingress")
                .with_api_group("apis/networking.k8s.io/v1")
                .with_collection("ingresses"),
            ResourceType::new("NetworkPolicy")
                .with_api_group("apis/networking.k8s.io/v1")
                .with_collection("networkpolicies"),
            ResourceType::new("Role").with_api_group("apis/rbac.authorization.k8s.io/v1"),
            ResourceType::new("RoleBinding").with_api_group("apis/rbac.authorization.k8s.io/v1"),
            ResourceType::new("ClusterRole")
                .with_api_group("apis/rbac.authorization.k8s.io/v1")
                .cluster_scoped(),
            ResourceType::new("ClusterRoleBinding")
                .with_api_group("apis/rbac.authorization.k8s.io/v1")
                .cluster_scoped(),
            ResourceType::new("StorageClass")
                .with_api_group("apis/storage.k8s.io/v1")
                .with_collection("storageclasses")
                .cluster_scoped(),
            ResourceType::new("CustomResourceDefinition")
                .with_api_group("apis/apiextensions.k8s.io/v1")
                .cluster_scoped(),
        ];

        for resource_type in builtin {
            registry.insert(resource_type);
        }

        registry
    }

    /// Register a kind, replacing any earlier registration under the same name
    pub fn register(&mut self, resource_type: ResourceType) -> Result<()> {
        if resource_type.kind.is_empty() {
            return Err(Error::InvalidArgument(
                "resource kind must not be empty".to_string(),
            ));
        }
        if resource_type.api_group.is_empty() || resource_type.collection.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "{} needs a non-empty API group and collection",
                resource_type.kind
            )));
        }

        self.insert(resource_type);
        Ok(())
    }

    /// Look up a kind; an unknown kind is a programming error on the caller's side
    pub fn resolve(&self, kind: &str) -> Result<Arc<ResourceType>> {
        self.types
            .get(kind)
            .cloned()
            .ok_or_else(|| Error::UnregisteredKind(kind.to_string()))
    }

    fn insert(&mut self, resource_type: ResourceType) {
        self.types
            .insert(resource_type.kind.clone(), Arc::new(resource_type));
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
