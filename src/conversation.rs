//! Conversation workspace models for counterexamples: inputs explicitly
//! marked as irrelevant for a workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::display_as_json;

/// An example of input marked as irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterexample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated: Option<DateTime<Utc>>,
}

impl Counterexample {
    pub fn new(text: impl Into<String>) -> Self {
        Counterexample::default().with_text(text)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn set_created(&mut self, created: DateTime<Utc>) {
        self.created = Some(created);
    }

    pub fn set_updated(&mut self, updated: DateTime<Utc>) {
        self.updated = Some(updated);
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.set_created(created);
        self
    }

    pub fn with_updated(mut self, updated: DateTime<Utc>) -> Self {
        self.set_updated(updated);
        self
    }
}

/// Pagination data for a page of returned objects.
///
/// Only describes where the next page lives; following `next_url` is the
/// caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    matched: Option<u64>,
}

impl Pagination {
    /// URL that re-fetches the current page.
    pub fn refresh_url(&self) -> Option<&str> {
        self.refresh_url.as_deref()
    }

    /// URL of the next page; absent on the last page.
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    /// Number of objects on this page.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Number of objects matching the query across all pages.
    pub fn matched(&self) -> Option<u64> {
        self.matched
    }

    pub fn has_next_page(&self) -> bool {
        self.next_url.is_some()
    }

    pub fn set_refresh_url(&mut self, refresh_url: impl Into<String>) {
        self.refresh_url = Some(refresh_url.into());
    }

    pub fn set_next_url(&mut self, next_url: impl Into<String>) {
        self.next_url = Some(next_url.into());
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = Some(total);
    }

    pub fn set_matched(&mut self, matched: u64) {
        self.matched = Some(matched);
    }

    pub fn with_refresh_url(mut self, refresh_url: impl Into<String>) -> Self {
        self.set_refresh_url(refresh_url);
        self
    }

    pub fn with_next_url(mut self, next_url: impl Into<String>) -> Self {
        self.set_next_url(next_url);
        self
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.set_total(total);
        self
    }

    pub fn with_matched(mut self, matched: u64) -> Self {
        self.set_matched(matched);
        self
    }
}

/// One page of counterexamples, in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterexampleCollection {
    #[serde(default)]
    counterexamples: Vec<Counterexample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pagination: Option<Pagination>,
}

impl CounterexampleCollection {
    pub fn new(counterexamples: Vec<Counterexample>, pagination: Option<Pagination>) -> Self {
        CounterexampleCollection {
            counterexamples,
            pagination,
        }
    }

    pub fn counterexamples(&self) -> &[Counterexample] {
        &self.counterexamples
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn set_counterexamples(&mut self, counterexamples: Vec<Counterexample>) {
        self.counterexamples = counterexamples;
    }

    /// Accepts a `Pagination` or `None` to clear it.
    pub fn set_pagination(&mut self, pagination: impl Into<Option<Pagination>>) {
        self.pagination = pagination.into();
    }

    pub fn with_counterexamples(mut self, counterexamples: Vec<Counterexample>) -> Self {
        self.set_counterexamples(counterexamples);
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.set_pagination(pagination);
        self
    }

    pub fn len(&self) -> usize {
        self.counterexamples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counterexamples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Counterexample> {
        self.counterexamples.iter()
    }

    pub fn into_counterexamples(self) -> Vec<Counterexample> {
        self.counterexamples
    }
}

impl<'a> IntoIterator for &'a CounterexampleCollection {
    type Item = &'a Counterexample;
    type IntoIter = std::slice::Iter<'a, Counterexample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

display_as_json!(Counterexample, Pagination, CounterexampleCollection);
