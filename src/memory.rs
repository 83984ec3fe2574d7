//! In-process [`SolrConfigManager`] keeping configuration sets in memory.
//!
//! Behaves like a cluster's configuration namespace: clusters have to be
//! registered before use, uploads replace an existing set of the same name,
//! and deleting a set that is not there is a no-op.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Cursor;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::contract::{ConfigArchive, SolrConfigManager};
use crate::error::SolrConfigError;

type Namespace = BTreeMap<String, Vec<u8>>;

#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    clusters: RwLock<HashMap<String, Namespace>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the given clusters already registered.
    pub fn with_clusters<I, S>(cluster_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let clusters = cluster_ids
            .into_iter()
            .map(|id| (id.into(), Namespace::new()))
            .collect();
        InMemoryConfigStore {
            clusters: RwLock::new(clusters),
        }
    }

    /// Registers a cluster. Returns false if it was already known; its configurations are kept.
    pub async fn add_cluster(&self, solr_cluster_id: impl Into<String>) -> bool {
        let id = solr_cluster_id.into();
        let mut clusters = self.clusters.write().await;
        if clusters.contains_key(&id) {
            return false;
        }
        info!(solr_cluster_id = %id, "Registered solr cluster");
        clusters.insert(id, Namespace::new());
        true
    }

    /// Drops a cluster and every configuration stored under it.
    pub async fn remove_cluster(&self, solr_cluster_id: &str) -> bool {
        let removed = self.clusters.write().await.remove(solr_cluster_id).is_some();
        if removed {
            info!(solr_cluster_id, "Removed solr cluster");
        }
        removed
    }

    async fn store(
        &self,
        solr_cluster_id: &str,
        config_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), SolrConfigError> {
        let mut clusters = self.clusters.write().await;
        let namespace = clusters
            .get_mut(solr_cluster_id)
            .ok_or_else(|| cluster_not_found(solr_cluster_id))?;
        let size = bytes.len();
        let replaced = namespace.insert(config_name.to_string(), bytes).is_some();
        info!(
            solr_cluster_id,
            config_name,
            size,
            replaced,
            "Stored solr cluster configuration"
        );
        Ok(())
    }
}

fn require(value: &str, what: &str) -> Result<(), SolrConfigError> {
    if value.trim().is_empty() {
        error!(argument = what, "Empty argument");
        return Err(SolrConfigError::InvalidArgument(format!(
            "{what} must not be empty"
        )));
    }
    Ok(())
}

fn cluster_not_found(solr_cluster_id: &str) -> SolrConfigError {
    error!(solr_cluster_id, "Unknown solr cluster");
    SolrConfigError::ClusterNotFound(solr_cluster_id.to_string())
}

#[async_trait]
impl SolrConfigManager for InMemoryConfigStore {
    async fn upload_solr_cluster_configuration_zip(
        &self,
        solr_cluster_id: &str,
        config_name: &str,
        zipped_config: &Path,
    ) -> Result<(), SolrConfigError> {
        require(solr_cluster_id, "solr cluster id")?;
        require(config_name, "config name")?;

        let bytes = tokio::fs::read(zipped_config).await.map_err(|e| {
            error!(error = ?e, path = %zipped_config.display(), "Failed to read configuration zip");
            e
        })?;
        if let Err(source) = zip::ZipArchive::new(Cursor::new(bytes.as_slice())) {
            error!(error = ?source, path = %zipped_config.display(), "Configuration file is not a zip archive");
            return Err(SolrConfigError::InvalidArchive {
                path: zipped_config.to_path_buf(),
                source,
            });
        }

        self.store(solr_cluster_id, config_name, bytes).await
    }

    async fn delete_solr_cluster_configuration(
        &self,
        solr_cluster_id: &str,
        configuration_name: &str,
    ) -> Result<(), SolrConfigError> {
        require(solr_cluster_id, "solr cluster id")?;
        require(configuration_name, "configuration name")?;

        let mut clusters = self.clusters.write().await;
        let namespace = clusters
            .get_mut(solr_cluster_id)
            .ok_or_else(|| cluster_not_found(solr_cluster_id))?;
        if namespace.remove(configuration_name).is_some() {
            info!(solr_cluster_id, configuration_name, "Deleted solr cluster configuration");
        } else {
            debug!(solr_cluster_id, configuration_name, "No configuration to delete");
        }
        Ok(())
    }

    async fn get_solr_cluster_configuration(
        &self,
        solr_cluster_id: &str,
        configuration_name: &str,
    ) -> Result<Option<ConfigArchive>, SolrConfigError> {
        require(solr_cluster_id, "solr cluster id")?;
        require(configuration_name, "configuration name")?;

        let clusters = self.clusters.read().await;
        let namespace = clusters
            .get(solr_cluster_id)
            .ok_or_else(|| cluster_not_found(solr_cluster_id))?;
        let found = namespace
            .get(configuration_name)
            .map(|bytes| ConfigArchive::from_bytes(bytes.clone()));
        debug!(
            solr_cluster_id,
            configuration_name,
            found = found.is_some(),
            "Fetched solr cluster configuration"
        );
        Ok(found)
    }

    async fn get_solr_cluster_configurations(
        &self,
        solr_cluster_id: &str,
    ) -> Result<BTreeSet<String>, SolrConfigError> {
        require(solr_cluster_id, "solr cluster id")?;

        let clusters = self.clusters.read().await;
        let namespace = clusters
            .get(solr_cluster_id)
            .ok_or_else(|| cluster_not_found(solr_cluster_id))?;
        let names: BTreeSet<String> = namespace.keys().cloned().collect();
        debug!(solr_cluster_id, count = names.len(), "Listed solr cluster configurations");
        Ok(names)
    }
}
