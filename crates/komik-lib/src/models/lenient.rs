//! Field deserializers that tolerate the loosely typed JSON scraper backends emit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, de::IgnoredAny};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    /// Booleans, objects and arrays carry nothing we could show
    Other(IgnoredAny),
}

/// Strings and numbers become trimmed text, blanks and anything else become `None`
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Scalar::Text(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Scalar::Number(number) => Some(number.to_string()),
        Scalar::Other(_) => None,
    }))
}

/// Accepts `12` as well as `"12"`
pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Scalar::Text(text) => text.trim().parse().ok(),
        Scalar::Number(number) => number.as_u64(),
        Scalar::Other(_) => None,
    }))
}

pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<Scalar>>::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            Scalar::Text(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
            Scalar::Number(number) => Some(number.to_string()),
            _ => None,
        })
        .collect())
}

pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = text(deserializer)?;
    Ok(value.and_then(|value| {
        DateTime::parse_from_rfc3339(&value)
            .map(|at| at.with_timezone(&Utc))
            .ok()
    }))
}
