use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::kv::{KvStore, StoreError};

pub const FIRST_DAY: u8 = 1;
pub const LAST_DAY: u8 = 24;

/// The day's visual. Exactly one source is authoritative at a time, so
/// this is an enum rather than a pair of optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Base64-encoded payload captured through the admin upload.
    Inline(String),
    /// Remote image URL.
    Url(String),
    /// The built-in procedural art.
    #[default]
    DefaultArt,
}

impl ImageSource {
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::DefaultArt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub id: String,
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub text: String,
    pub done: bool,
}

/// Full content record for one calendar day. Identity is the day number;
/// records only change through an admin save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayContent {
    pub title: Option<String>,
    pub description: String,
    pub image: ImageSource,
    /// Preset name or literal `#hex` color; `None` means legacy fallback.
    pub color: Option<String>,
    pub force_open: bool,
    pub hidden: bool,
    pub stream_link: Option<String>,
    /// Legacy single clip link. Superseded by `clips` when that is
    /// non-empty; `"#"` and `""` mean absent.
    pub clip_link: Option<String>,
    pub clips: Vec<Clip>,
    pub todos: Vec<TodoItem>,
}

impl Default for DayContent {
    fn default() -> Self {
        Self {
            title: None,
            description: String::new(),
            image: ImageSource::DefaultArt,
            color: None,
            force_open: false,
            hidden: false,
            stream_link: None,
            clip_link: None,
            clips: Vec::new(),
            todos: Vec::new(),
        }
    }
}

/// Distinguishes a field that is absent from the record (keep the
/// compiled default) from one that is an explicit `null` (clear it).
/// Plain `Option<Option<T>>` collapses both to `None`.
fn clearable<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Persisted admin override: the same shape with every field optional, so
/// partial or older records still merge field-by-field against the
/// compiled defaults. Fields that are themselves optional in `DayContent`
/// are double-wrapped: the outer level is record presence, the inner one
/// the value, so a save can clear a default-populated field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayOverride {
    #[serde(deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    pub description: Option<String>,
    pub image: Option<ImageSource>,
    #[serde(deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub color: Option<Option<String>>,
    pub force_open: Option<bool>,
    pub hidden: Option<bool>,
    #[serde(deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub stream_link: Option<Option<String>>,
    #[serde(deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub clip_link: Option<Option<String>>,
    pub clips: Option<Vec<Clip>>,
    pub todos: Option<Vec<TodoItem>>,
}

impl From<&DayContent> for DayOverride {
    fn from(content: &DayContent) -> Self {
        Self {
            title: Some(content.title.clone()),
            description: Some(content.description.clone()),
            image: Some(content.image.clone()),
            color: Some(content.color.clone()),
            force_open: Some(content.force_open),
            hidden: Some(content.hidden),
            stream_link: Some(content.stream_link.clone()),
            clip_link: Some(content.clip_link.clone()),
            clips: Some(content.clips.clone()),
            todos: Some(content.todos.clone()),
        }
    }
}

impl DayContent {
    /// Two-tier resolution: an override field that is present replaces the
    /// default, an absent field keeps it. `todos` is the exception — when
    /// the override carries a list, it owns membership and order
    /// wholesale.
    #[must_use]
    pub fn merged(mut self, ov: DayOverride) -> Self {
        if let Some(title) = ov.title {
            self.title = title;
        }
        if let Some(description) = ov.description {
            self.description = description;
        }
        if let Some(image) = ov.image {
            self.image = image;
        }
        if let Some(color) = ov.color {
            self.color = color;
        }
        if let Some(force_open) = ov.force_open {
            self.force_open = force_open;
        }
        if let Some(hidden) = ov.hidden {
            self.hidden = hidden;
        }
        if let Some(stream_link) = ov.stream_link {
            self.stream_link = stream_link;
        }
        if let Some(clip_link) = ov.clip_link {
            self.clip_link = clip_link;
        }
        if let Some(clips) = ov.clips {
            self.clips = clips;
        }
        if let Some(todos) = ov.todos {
            self.todos = todos;
        }
        self
    }
}

fn override_key(day: u8) -> String {
    format!("day_{day:02}")
}

/// Compiled defaults layered with persisted admin overrides.
pub struct ContentStore {
    kv: Box<dyn KvStore>,
}

impl ContentStore {
    #[must_use]
    pub fn new(kv: Box<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Effective content for `day`. A corrupt override record is dropped
    /// in favor of the compiled default; this never fails.
    #[must_use]
    pub fn get(&self, day: u8) -> DayContent {
        let base = defaults::day_content(day);
        let Some(raw) = self.kv.get(&override_key(day)) else {
            return base;
        };
        match serde_json::from_str::<DayOverride>(&raw) {
            Ok(ov) => base.merged(ov),
            Err(e) => {
                log::warn!("discarding corrupt override for day {day}: {e}");
                base
            }
        }
    }

    /// Replaces the whole override record for `day`. Subsequent `get`
    /// calls see the new value immediately.
    pub fn put(&mut self, day: u8, content: &DayContent) -> Result<(), StoreError> {
        if !(FIRST_DAY..=LAST_DAY).contains(&day) {
            return Err(StoreError::DayOutOfRange(day));
        }
        let raw = serde_json::to_string(&DayOverride::from(content))?;
        self.kv.set(&override_key(day), &raw)
    }
}
