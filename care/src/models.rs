//! Wire models for the plant-care API.
//!
//! The server owns the lifecycle of every entity here; the client only reads
//! them. Collections default to empty and ids are accepted as either strings or
//! numbers so a partially populated response still decodes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ai_text::{CareTipsText, SuggestionText};
use crate::health::{self, HealthStatus};

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

/// The signed-in account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Up to two upper-cased initials taken from the words of the name.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    /// First word of the name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }

    /// Merge fields returned by a profile update into the cached copy.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

/// Partial user as returned by profile endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, deserialize_with = "optional_id_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Root aggregate shown by list and detail views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "list")]
    pub images: Vec<PlantImage>,
    #[serde(default, deserialize_with = "list")]
    pub logs: Vec<Log>,
    #[serde(default, deserialize_with = "list")]
    pub recommendations: Vec<Recommendation>,
    #[serde(default, deserialize_with = "list")]
    pub care_tips: Vec<CareTip>,
}

impl Plant {
    /// The display thumbnail: the first image, if any.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&PlantImage> {
        self.images.first()
    }

    /// The most recent analysis. The API returns recommendations newest first.
    #[must_use]
    pub fn latest_recommendation(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }

    #[must_use]
    pub fn health(&self) -> HealthStatus {
        health::classify(self.latest_recommendation())
    }

    #[must_use]
    pub fn species_label(&self) -> &str {
        self.species
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown Species")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantImage {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub image_url: String,
}

impl PlantImage {
    /// Absolute URL; `image_url` is a server-relative path.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.image_url)
    }
}

/// Kind of care event. Unknown values from the server decode as `Other`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogType {
    #[default]
    Watered,
    Fertilized,
    Pruned,
    Repotted,
    Observed,
    #[serde(other)]
    Other,
}

impl LogType {
    pub const ALL: [Self; 6] = [
        Self::Watered,
        Self::Fertilized,
        Self::Pruned,
        Self::Repotted,
        Self::Observed,
        Self::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Watered => "Watered",
            Self::Fertilized => "Fertilized",
            Self::Pruned => "Pruned",
            Self::Repotted => "Repotted",
            Self::Observed => "Observed",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
                format!("unknown log type '{s}' (expected one of {})", names.join(", "))
            })
    }
}

/// A user-recorded care event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub log_type: LogType,
    #[serde(default)]
    pub log_value: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub log_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Log {
    /// When the event happened, falling back to when it was recorded.
    #[must_use]
    pub fn display_date(&self) -> Option<&str> {
        self.log_date.as_deref().or(self.created_at.as_deref())
    }
}

/// Reference to the plant image an analysis was run against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
}

/// A stored AI disease analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default, deserialize_with = "optional_id_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub suggestion_text: SuggestionText,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub plant_image: Option<ImageRef>,
}

impl Recommendation {
    /// URL of the analyzed image, served by id.
    #[must_use]
    pub fn image_url(&self, base_url: &str) -> Option<String> {
        self.plant_image
            .as_ref()
            .map(|image| format!("{}/plants/images/{}", base_url.trim_end_matches('/'), image.id))
    }
}

/// A stored AI care-guidance result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareTip {
    #[serde(default, deserialize_with = "optional_id_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub tips: CareTipsText,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One page of the plant list plus the server-side match count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantPage {
    #[serde(default, deserialize_with = "list")]
    pub plants: Vec<Plant>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn optional_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
