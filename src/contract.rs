//! # contract: Solr cluster configuration management
//!
//! This module defines the [`SolrConfigManager`] trait and the [`ConfigArchive`]
//! it hands back. A configuration set (schema.xml, solrconfig.xml and friends)
//! lives in the ZooKeeper namespace of a Solr cluster under a name that
//! collections reference when they are created.
//!
//! ## Interface & Extensibility
//! - Implement [`SolrConfigManager`] for a remote client (HTTP, ZooKeeper, ...).
//!   Transport and authentication belong to the implementer.
//! - Only the zip upload must be provided for uploads: directory upload
//!   packages the directory and delegates to it unless overridden.
//! - All methods are async and report failures as [`SolrConfigError`].
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall`; `MockSolrConfigManager` is exported
//!   under the `test-export-mocks` feature (on by default).
//! - [`crate::memory::InMemoryConfigStore`] is a working in-process implementer.

use std::collections::BTreeSet;
use std::io::{Cursor, Read};
use std::path::Path;

use async_trait::async_trait;
#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

use crate::config::PackagingOptions;
use crate::error::SolrConfigError;
use crate::packaging;

/// A zipped configuration set, readable as a byte stream.
#[derive(Debug, Clone)]
pub struct ConfigArchive {
    cursor: Cursor<Vec<u8>>,
}

impl ConfigArchive {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        ConfigArchive {
            cursor: Cursor::new(bytes),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, SolrConfigError> {
        Ok(ConfigArchive::from_bytes(std::fs::read(path)?))
    }

    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.get_ref().is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.cursor.get_ref()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.cursor.into_inner()
    }

    /// Entry names in archive order.
    pub fn file_names(&self) -> Result<Vec<String>, SolrConfigError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(self.as_bytes()))?;
        let mut names = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            names.push(archive.by_index(i)?.name().to_string());
        }
        Ok(names)
    }

    /// Decompressed contents of one entry.
    pub fn read_entry(&self, name: &str) -> Result<Vec<u8>, SolrConfigError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(self.as_bytes()))?;
        let mut file = archive.by_name(name)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

// Equality ignores how far the archive has been read.
impl PartialEq for ConfigArchive {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ConfigArchive {}

impl From<Vec<u8>> for ConfigArchive {
    fn from(bytes: Vec<u8>) -> Self {
        ConfigArchive::from_bytes(bytes)
    }
}

impl Read for ConfigArchive {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.cursor.read(buf)
    }
}

/// Manages the configuration sets of Solr clusters.
///
/// Each call is one independent request against the cluster's configuration
/// namespace; no state is carried between calls.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait SolrConfigManager: Send + Sync {
    /// Upload a configuration zip (schema.xml, solrconfig.xml and every other
    /// file a SolrCloud collection needs) under `config_name`.
    ///
    /// Fails when the cluster or the configuration store cannot be reached.
    async fn upload_solr_cluster_configuration_zip(
        &self,
        solr_cluster_id: &str,
        config_name: &str,
        zipped_config: &Path,
    ) -> Result<(), SolrConfigError>;

    /// Upload an unpacked configuration directory under `config_name`.
    ///
    /// The directory is zipped on the blocking thread pool with the default
    /// [`PackagingOptions`] (files on the XSLT path are left out) and passed to
    /// [`upload_solr_cluster_configuration_zip`](Self::upload_solr_cluster_configuration_zip).
    /// Returns [`SolrConfigError::NotADirectory`] without uploading anything
    /// when `config_directory` is not a directory.
    async fn upload_solr_cluster_configuration_directory(
        &self,
        solr_cluster_id: &str,
        config_name: &str,
        config_directory: &Path,
    ) -> Result<(), SolrConfigError> {
        let dir = config_directory.to_path_buf();
        let zipped = tokio::task::spawn_blocking(move || {
            packaging::zip_directory_to_file(&dir, &PackagingOptions::default())
        })
        .await
        .map_err(|e| SolrConfigError::Io(std::io::Error::other(e)))??;
        self.upload_solr_cluster_configuration_zip(solr_cluster_id, config_name, zipped.path())
            .await
    }

    /// Delete a configuration namespace.
    async fn delete_solr_cluster_configuration(
        &self,
        solr_cluster_id: &str,
        configuration_name: &str,
    ) -> Result<(), SolrConfigError>;

    /// Fetch the zipped configuration, or `None` if no configuration by that name exists.
    async fn get_solr_cluster_configuration(
        &self,
        solr_cluster_id: &str,
        configuration_name: &str,
    ) -> Result<Option<ConfigArchive>, SolrConfigError>;

    /// Names of the configuration sets stored for the cluster.
    async fn get_solr_cluster_configurations(
        &self,
        solr_cluster_id: &str,
    ) -> Result<BTreeSet<String>, SolrConfigError>;
}
