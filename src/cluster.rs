//! Cluster-scoped view over an injected [`SolrConfigManager`].
//!
//! Callers working against one Solr cluster hold a [`ClusterConfigs`] instead
//! of threading the cluster id through every call. The manager is shared
//! (`Arc`), so several handles may point at different clusters of the same
//! client.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::contract::{ConfigArchive, SolrConfigManager};
use crate::error::SolrConfigError;

pub struct ClusterConfigs<M: ?Sized> {
    manager: Arc<M>,
    solr_cluster_id: String,
}

impl<M: ?Sized> Clone for ClusterConfigs<M> {
    fn clone(&self) -> Self {
        ClusterConfigs {
            manager: Arc::clone(&self.manager),
            solr_cluster_id: self.solr_cluster_id.clone(),
        }
    }
}

impl<M> ClusterConfigs<M>
where
    M: SolrConfigManager + ?Sized,
{
    pub fn new(manager: Arc<M>, solr_cluster_id: impl Into<String>) -> Self {
        ClusterConfigs {
            manager,
            solr_cluster_id: solr_cluster_id.into(),
        }
    }

    pub fn solr_cluster_id(&self) -> &str {
        &self.solr_cluster_id
    }

    pub async fn upload_zip(
        &self,
        config_name: &str,
        zipped_config: &Path,
    ) -> Result<(), SolrConfigError> {
        debug!(solr_cluster_id = %self.solr_cluster_id, config_name, "Uploading configuration zip");
        self.manager
            .upload_solr_cluster_configuration_zip(&self.solr_cluster_id, config_name, zipped_config)
            .await
    }

    pub async fn upload_directory(
        &self,
        config_name: &str,
        config_directory: &Path,
    ) -> Result<(), SolrConfigError> {
        debug!(solr_cluster_id = %self.solr_cluster_id, config_name, "Uploading configuration directory");
        self.manager
            .upload_solr_cluster_configuration_directory(
                &self.solr_cluster_id,
                config_name,
                config_directory,
            )
            .await
    }

    pub async fn delete(&self, configuration_name: &str) -> Result<(), SolrConfigError> {
        debug!(solr_cluster_id = %self.solr_cluster_id, configuration_name, "Deleting configuration");
        self.manager
            .delete_solr_cluster_configuration(&self.solr_cluster_id, configuration_name)
            .await
    }

    pub async fn get(
        &self,
        configuration_name: &str,
    ) -> Result<Option<ConfigArchive>, SolrConfigError> {
        debug!(solr_cluster_id = %self.solr_cluster_id, configuration_name, "Fetching configuration");
        self.manager
            .get_solr_cluster_configuration(&self.solr_cluster_id, configuration_name)
            .await
    }

    pub async fn list(&self) -> Result<BTreeSet<String>, SolrConfigError> {
        debug!(solr_cluster_id = %self.solr_cluster_id, "Listing configurations");
        self.manager
            .get_solr_cluster_configurations(&self.solr_cluster_id)
            .await
    }

    /// Whether a configuration of this name is listed for the cluster.
    pub async fn contains(&self, configuration_name: &str) -> Result<bool, SolrConfigError> {
        Ok(self.list().await?.contains(configuration_name))
    }
}
