//! String-or-object AI fields.
//!
//! DESIGN
//! ======
//! The analysis and care-tip endpoints return their payload either as plain
//! text or as a JSON object packed into a string. Both arrive in the same
//! field, so they are decoded once at ingestion into [`AiText`] and every view
//! matches on the variant instead of re-parsing.
//!
//! ERROR HANDLING
//! ==============
//! Decoding never fails. Anything that is not an object-shaped string that
//! parses into the expected structure is kept verbatim as [`AiText::Raw`].

use std::borrow::Cow;

use serde::de::{DeserializeOwned, Deserializer};
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "ai_text_test.rs"]
mod ai_text_test;

/// An AI-generated field: either opaque display text or a decoded structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AiText<T> {
    Raw(String),
    Structured(T),
}

/// Disease analysis payload stored on a recommendation.
pub type SuggestionText = AiText<Suggestion>;

/// Care guidance payload stored on a care tip.
pub type CareTipsText = AiText<CareGuide>;

impl<T> Default for AiText<T> {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

impl<T: DeserializeOwned> AiText<T> {
    /// Decode a string field. Only text starting with `{` is tried as JSON.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if !text.trim_start().starts_with('{') {
            return Self::Raw(text.to_owned());
        }
        match serde_json::from_str::<T>(text) {
            Ok(value) => Self::Structured(value),
            Err(error) => {
                tracing::debug!(%error, "ai text looked structured but did not parse; keeping raw");
                Self::Raw(text.to_owned())
            }
        }
    }

    /// Decode whatever JSON value the server put in the field.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::String(text) => Self::parse(&text),
            Value::Object(_) => {
                let text = value.to_string();
                serde_json::from_value::<T>(value).map_or_else(|_| Self::Raw(text), Self::Structured)
            }
            other => Self::Raw(other.to_string()),
        }
    }
}

impl<T> AiText<T> {
    /// The decoded structure, if there is one.
    #[must_use]
    pub fn structured(&self) -> Option<&T> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// The opaque text, if the field did not decode.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Raw(text) => Some(text),
            Self::Structured(_) => None,
        }
    }

    /// True for an empty or whitespace-only raw value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Raw(text) if text.trim().is_empty())
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for AiText<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Written back in the string form the API uses.
impl<T: Serialize> Serialize for AiText<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Raw(text) => serializer.serialize_str(text),
            Self::Structured(value) => {
                let text = serde_json::to_string(value).map_err(S::Error::custom)?;
                serializer.serialize_str(&text)
            }
        }
    }
}

/// Structured disease analysis.
///
/// The API spells the symptoms key `Sympotoms`; that spelling is part of the
/// wire contract and must not be corrected here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "Plant Name", default, skip_serializing_if = "Option::is_none")]
    pub plant_name: Option<String>,
    #[serde(rename = "Diseases", default, deserialize_with = "string_list")]
    pub diseases: Vec<String>,
    #[serde(rename = "Sympotoms", default, deserialize_with = "string_list")]
    pub symptoms: Vec<String>,
}

impl Suggestion {
    /// Plant name reported by the analysis, ignoring blanks.
    #[must_use]
    pub fn plant_name(&self) -> Option<&str> {
        self.plant_name.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }
}

impl SuggestionText {
    /// Name to show for an analysis: the reported plant name, then the plant's
    /// species, then `"Unknown"`.
    #[must_use]
    pub fn display_name<'a>(&'a self, species: Option<&'a str>) -> &'a str {
        self.structured()
            .and_then(Suggestion::plant_name)
            .or_else(|| species.map(str::trim).filter(|s| !s.is_empty()))
            .unwrap_or("Unknown")
    }

    /// Symptoms from a structured payload; empty for raw text.
    #[must_use]
    pub fn symptoms(&self) -> &[String] {
        self.structured().map_or(&[], |s| s.symptoms.as_slice())
    }
}

/// Structured care guidance, one optional paragraph per topic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareGuide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunlight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<String>,
}

impl CareGuide {
    /// Titled, non-empty sections in display order.
    #[must_use]
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        [
            ("Watering", &self.water),
            ("Sunlight", &self.sunlight),
            ("Soil & Fertilizer", &self.soil),
            ("Important Warnings", &self.warnings),
            ("General Advice", &self.general),
        ]
        .into_iter()
        .filter_map(|(title, body)| {
            let body = body.as_deref()?.trim();
            (!body.is_empty()).then_some((title, body))
        })
        .collect()
    }
}

impl CareTipsText {
    /// Care guide for display; raw text becomes the general advice section.
    #[must_use]
    pub fn guide(&self) -> Cow<'_, CareGuide> {
        match self {
            Self::Structured(guide) => Cow::Borrowed(guide),
            Self::Raw(text) => Cow::Owned(CareGuide {
                general: Some(text.clone()),
                ..CareGuide::default()
            }),
        }
    }
}

/// Accept a missing/null list as empty.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
