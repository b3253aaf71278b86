// SPDX-License-Identifier: MPL-2.0
//! Content record as delivered by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kind of published content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Document,
    Flipbook,
    Video,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [
        ContentType::Document,
        ContentType::Flipbook,
        ContentType::Video,
    ];

    /// Wire name, also used as the suffix of the lexicon key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Document => "document",
            ContentType::Flipbook => "flipbook",
            ContentType::Video => "video",
        }
    }

    /// Fluent key of the human-readable label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ContentType::Document => "content-type-document",
            ContentType::Flipbook => "content-type-flipbook",
            ContentType::Video => "content-type-video",
        }
    }

    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, ContentType::Video)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category a record may be linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCategory {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
}

/// One published record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    pub year: i32,
    pub content_type: ContentType,
    #[serde(default, deserialize_with = "non_empty")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "optional_id_as_string")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category: Option<ContentCategory>,
    #[serde(default, deserialize_with = "non_empty")]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub document_url_en: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub document_url_ar: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub flipbook_url_en: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub flipbook_url_ar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContentItem {
    /// Minimal record; optional references start empty.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: i32, content_type: ContentType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            content_type,
            image_url: None,
            category_id: None,
            category: None,
            video_url: None,
            document_url_en: None,
            document_url_ar: None,
            flipbook_url_en: None,
            flipbook_url_ar: None,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Video reference, only meaningful for video items.
    #[must_use]
    pub fn playable_video(&self) -> Option<&str> {
        if self.content_type.is_video() {
            self.video_url.as_deref()
        } else {
            None
        }
    }
}

/// Treats `null`, missing and blank strings alike.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Stores accept either UUID strings or serial integers as keys.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn optional_id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?
        .map(String::from)
        .filter(|s| !s.is_empty()))
}
