use chrono::{DateTime, Utc};
use derivative::*;
use serde_derive::Deserialize;

use crate::configuration::constants::common::SCREENSHOT_MIME;
use crate::reporter::allure::model::status::Status;

pub type Report = Vec<Feature>;

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A child of a feature, tagged by its `type`. Only scenarios produce results.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Scenario(Scenario),
    Background(Background),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct Background {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default, with = "crate::configuration::deserialize::timestamp")]
    pub start_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct Step {
    /// Hook steps (`Before`, `After`) come without a name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub result: Option<Outcome>,
    #[serde(default, with = "crate::configuration::deserialize::timestamp")]
    pub start_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub embeddings: Vec<Embedding>,
}

#[derive(Debug, Deserialize)]
pub struct Outcome {
    #[serde(default, with = "crate::configuration::deserialize::status")]
    pub status: Option<Status>,
    /// Nanoseconds.
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Deserialize, Derivative)]
#[derivative(Debug)]
pub struct Embedding {
    pub mime_type: String,
    /// Base64 payload, decoded only when the attachment is extracted.
    #[derivative(Debug = "ignore")]
    pub data: String,
}

impl Step {
    pub fn status(&self) -> Status {
        self.result
            .as_ref()
            .and_then(|outcome| outcome.status)
            .unwrap_or_default()
    }

    pub fn duration(&self) -> Option<u64> {
        self.result.as_ref().and_then(|outcome| outcome.duration)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|outcome| outcome.error_message.as_deref())
    }

    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Step {}", index + 1),
        }
    }

    pub fn screenshots(&self) -> impl Iterator<Item = &Embedding> {
        self.embeddings
            .iter()
            .filter(|embedding| embedding.mime_type == SCREENSHOT_MIME)
    }
}
