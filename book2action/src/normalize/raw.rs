//! Untrusted shapes deserialized straight from assistant output.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::backfill;
use crate::model::{ActionableStep, StepDetails};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawBook {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub summary: Option<String>,
    #[serde(default)]
    pub actionable_steps: Option<Vec<RawStep>>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub published_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub isbn: Option<String>,
}

/// A step as the model wrote it. Older plan shapes used bare strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawStep {
    Structured(RawStepFields),
    Legacy(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStepFields {
    #[serde(default, deserialize_with = "lenient_text")]
    step: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    chapter: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    day: Option<String>,
    #[serde(default)]
    details: Option<RawDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDetails {
    #[serde(default)]
    sentences: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    key_takeaway: Option<String>,
}

impl RawStep {
    /// Name of the first field a complete 7-day step lacks.
    pub fn missing_field(&self, require_plan_fields: bool) -> Option<&'static str> {
        let fields = match self {
            Self::Legacy(text) if text.trim().is_empty() => return Some("step"),
            Self::Legacy(_) if require_plan_fields => return Some("chapter"),
            Self::Legacy(_) => return None,
            Self::Structured(fields) => fields,
        };

        if fields.step.is_none() {
            Some("step")
        } else if require_plan_fields && fields.chapter.is_none() {
            Some("chapter")
        } else if require_plan_fields && fields.day.is_none() {
            Some("day")
        } else {
            None
        }
    }

    /// The weekday the model assigned, if any.
    pub fn day(&self) -> Option<&str> {
        match self {
            Self::Structured(fields) => fields.day.as_deref(),
            Self::Legacy(_) => None,
        }
    }

    /// Convert to the normalized step, synthesizing whatever details are absent.
    pub fn into_step(self) -> ActionableStep {
        let (step, chapter, day, details) = match self {
            Self::Legacy(text) => (text.trim().to_string(), String::new(), None, None),
            Self::Structured(fields) => (
                fields.step.unwrap_or_default(),
                fields.chapter.unwrap_or_default(),
                fields.day,
                fields.details,
            ),
        };

        let details = complete_details(details, &step, &chapter);

        ActionableStep {
            step,
            chapter,
            day,
            details,
        }
    }
}

fn complete_details(details: Option<RawDetails>, step: &str, chapter: &str) -> StepDetails {
    let Some(details) = details else {
        return backfill::details_for(step, chapter);
    };

    let sentences: Vec<String> = details
        .sentences
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    StepDetails {
        sentences: if sentences.is_empty() {
            backfill::sentences(step, chapter)
        } else {
            sentences
        },
        key_takeaway: details
            .key_takeaway
            .unwrap_or_else(|| backfill::key_takeaway(step)),
    }
}

/// Strings are trimmed and empty ones dropped; numbers are kept as text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts `2018`, `2018.0` or `"2018"`; anything else becomes `None`.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(|y| i32::try_from(y).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
