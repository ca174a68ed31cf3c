//! Typed views over parts of the Monday.com response envelope

use crate::error::{MondayMcpError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Monday.com identifiers arrive as strings or numbers depending on the field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MondayId {
    /// Identifier encoded as a JSON string
    Text(String),
    /// Identifier encoded as a JSON number
    Number(serde_json::Number),
}

impl std::fmt::Display for MondayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MondayId::Text(s) => f.write_str(s),
            MondayId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A board as returned by the boards listing
#[derive(Debug, Clone, Deserialize)]
pub struct BoardSummary {
    /// Board identifier
    pub id: MondayId,
    /// Board name
    pub name: String,
}

/// The minimal shape of an item
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSummary {
    /// Item identifier
    pub id: MondayId,
    /// Display name
    pub name: String,
}

/// Author of an update
#[derive(Debug, Clone, Deserialize)]
pub struct Creator {
    /// User identifier
    pub id: MondayId,
    /// User name
    pub name: String,
}

/// A file attached to an update
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    /// Asset identifier
    pub id: MondayId,
    /// File name
    pub name: String,
    /// Download URL
    pub url: String,
}

/// An update (comment) on an item
#[derive(Debug, Clone, Deserialize)]
pub struct ItemUpdate {
    /// Update identifier
    pub id: MondayId,
    /// HTML body
    pub body: String,
    /// Creation timestamp
    pub created_at: String,
    /// Author; absent for updates posted by automations
    pub creator: Option<Creator>,
    /// Attachments
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// Identifiers in tool arguments may be given as strings or numbers
pub fn id_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    MondayId::deserialize(deserializer).map(|id| id.to_string())
}

/// Optional form of [`id_string`]; blank strings count as absent
pub fn optional_id_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<MondayId>::deserialize(deserializer)?
        .map(|id| id.to_string())
        .filter(|id| !id.trim().is_empty()))
}

/// A list of identifiers, each a string or a number
pub fn id_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Vec::<MondayId>::deserialize(deserializer)?
        .into_iter()
        .map(|id| id.to_string())
        .collect())
}

/// One identifier or several
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// A single identifier
    One(MondayId),
    /// A list of identifiers
    Many(Vec<MondayId>),
}

impl OneOrMany {
    /// Flatten into identifier strings
    pub fn into_ids(self) -> Vec<String> {
        match self {
            OneOrMany::One(id) => vec![id.to_string()],
            OneOrMany::Many(ids) => ids.into_iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Walk a JSON pointer into the envelope, failing with an upstream error
pub fn at<'a>(envelope: &'a Value, pointer: &str) -> Result<&'a Value> {
    envelope
        .pointer(pointer)
        .filter(|v| !v.is_null())
        .ok_or_else(|| MondayMcpError::malformed(format!("missing '{pointer}'")))
}

/// Decode the value at a JSON pointer into a typed shape
pub fn decode_at<T: serde::de::DeserializeOwned>(envelope: &Value, pointer: &str) -> Result<T> {
    let value = at(envelope, pointer)?;
    serde_json::from_value(value.clone())
        .map_err(|e| MondayMcpError::malformed(format!("unexpected shape at '{pointer}': {e}")))
}

/// Identifier at a JSON pointer, copied exactly as the service sent it
pub fn id_at(envelope: &Value, pointer: &str) -> Result<String> {
    decode_at::<MondayId>(envelope, pointer).map(|id| id.to_string())
}
