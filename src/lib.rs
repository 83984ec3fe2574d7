#![doc = "watson-sdk: client models and service contracts for Watson cognitive services."]

//! This crate contains the data models exchanged with the conversation and
//! personality insights services, and the configuration-manager contract for
//! Retrieve and Rank Solr clusters.
//!
//! # Layout
//! - [`conversation`]: counterexample listings and pagination.
//! - [`personality_insights`]: content items submitted for analysis.
//! - [`contract`]: the [`contract::SolrConfigManager`] trait and its archive type.
//! - [`packaging`]: zips configuration directories for upload.
//! - [`memory`]: in-process [`contract::SolrConfigManager`] implementation.
//! - [`cluster`]: cluster-scoped handle over an injected manager.
//!
//! Transport is not included: remote clients implement the contract and are
//! handed to [`cluster::ClusterConfigs`] or used directly.

pub mod cluster;
pub mod config;
pub mod contract;
pub mod conversation;
pub mod error;
pub mod memory;
pub mod model;
pub mod packaging;
pub mod personality_insights;

pub use cluster::ClusterConfigs;
pub use contract::{ConfigArchive, SolrConfigManager};
pub use error::SolrConfigError;
pub use memory::InMemoryConfigStore;

#[cfg(any(test, feature = "test-export-mocks"))]
pub use contract::MockSolrConfigManager;
