//! # personality_insights: content submitted for personality analysis
//!
//! [`ContentItem`] is one piece of text (a post, an email, a message) and
//! [`Content`] is the envelope that carries a list of them to the profile
//! endpoint. Both are plain records: nothing is validated locally, the
//! service decides what it accepts.
//!
//! Timestamps travel as integer milliseconds since the Unix epoch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::display_as_json;

/// The content to be analyzed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    charset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(
        rename = "contenttype",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    content_type: Option<String>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    forward: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(rename = "parentid", default, skip_serializing_if = "Option::is_none")]
    parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reply: Option<bool>,
    #[serde(rename = "sourceid", default, skip_serializing_if = "Option::is_none")]
    source_id: Option<String>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    updated: Option<DateTime<Utc>>,
    #[serde(rename = "userid", default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
}

impl ContentItem {
    pub fn new(content: impl Into<String>) -> Self {
        ContentItem::default().with_content(content)
    }

    /// Character set of the text, for example "UTF-8".
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// MIME type of the content, e.g. "text/plain" or "text/html". Tags are
    /// stripped from HTML before analysis; other types are processed as is.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    /// Raw forward flag; `None` when never set.
    pub fn forward(&self) -> Option<bool> {
        self.forward
    }

    /// True if the content is a forwarded/copied version of another item.
    pub fn is_forward(&self) -> bool {
        self.forward.unwrap_or(false)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Two-letter ISO 639-1 language identifier.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Identifier of the item this one relates to. Lookup only, no ownership.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn reply(&self) -> Option<bool> {
        self.reply
    }

    pub fn is_reply(&self) -> bool {
        self.reply.unwrap_or(false)
    }

    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn set_charset(&mut self, charset: impl Into<String>) {
        self.charset = Some(charset.into());
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = Some(content.into());
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.content_type = Some(content_type.into());
    }

    pub fn set_created(&mut self, created: DateTime<Utc>) {
        self.created = Some(created);
    }

    pub fn set_forward(&mut self, forward: bool) {
        self.forward = Some(forward);
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = Some(language.into());
    }

    pub fn set_parent_id(&mut self, parent_id: impl Into<String>) {
        self.parent_id = Some(parent_id.into());
    }

    pub fn set_reply(&mut self, reply: bool) {
        self.reply = Some(reply);
    }

    pub fn set_source_id(&mut self, source_id: impl Into<String>) {
        self.source_id = Some(source_id.into());
    }

    pub fn set_updated(&mut self, updated: DateTime<Utc>) {
        self.updated = Some(updated);
    }

    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.user_id = Some(user_id.into());
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.set_charset(charset);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.set_content_type(content_type);
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.set_created(created);
        self
    }

    pub fn with_forward(mut self, forward: bool) -> Self {
        self.set_forward(forward);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.set_language(language);
        self
    }

    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.set_parent_id(parent_id);
        self
    }

    pub fn with_reply(mut self, reply: bool) -> Self {
        self.set_reply(reply);
        self
    }

    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.set_source_id(source_id);
        self
    }

    pub fn with_updated(mut self, updated: DateTime<Utc>) -> Self {
        self.set_updated(updated);
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.set_user_id(user_id);
        self
    }
}

/// Request body for a profile call: the items to analyze, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "contentItems", default)]
    content_items: Vec<ContentItem>,
}

impl Content {
    pub fn new(content_items: Vec<ContentItem>) -> Self {
        Content { content_items }
    }

    pub fn content_items(&self) -> &[ContentItem] {
        &self.content_items
    }

    pub fn set_content_items(&mut self, content_items: Vec<ContentItem>) {
        self.content_items = content_items;
    }

    pub fn add_content_item(&mut self, item: ContentItem) {
        self.content_items.push(item);
    }

    pub fn with_content_item(mut self, item: ContentItem) -> Self {
        self.add_content_item(item);
        self
    }

    pub fn len(&self) -> usize {
        self.content_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content_items.is_empty()
    }
}

impl FromIterator<ContentItem> for Content {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Content::new(iter.into_iter().collect())
    }
}

display_as_json!(ContentItem, Content);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_false_when_absent() {
        let item = ContentItem::default();
        assert_eq!(item.reply(), None);
        assert!(!item.is_reply());
        assert!(!item.is_forward());
    }

    #[test]
    fn new_sets_only_the_content() {
        let item = ContentItem::new("I love hiking");
        assert_eq!(item.content(), Some("I love hiking"));
        assert_eq!(item.id(), None);
        assert_eq!(item.content_type(), None);
    }
}
