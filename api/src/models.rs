//! Wire types. Field names follow the backend's JSON exactly.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A user identifier as the backend sends it: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginUser {
    pub id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub user: LoginUser,
    /// Top-level `userId`. Not every backend build sends it.
    #[serde(rename = "userId", default)]
    pub user_id: Option<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceUpdate {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTranslation {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "palabraTraducida")]
    pub translated_text: String,
    /// Synthetic path; no audio file is produced client-side.
    #[serde(rename = "audioTraducido")]
    pub audio_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "TraduccionID")]
    pub id: i64,
    #[serde(rename = "PalabraTraducida")]
    pub translated_text: String,
    #[serde(rename = "RutaAudio", default, deserialize_with = "null_as_empty")]
    pub audio_path: String,
    #[serde(rename = "FechaTraduccion", default, deserialize_with = "null_as_empty")]
    pub translated_at: String,
}

/// Nullable text columns come back as `null`; treat them as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Body shape of backend error responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
