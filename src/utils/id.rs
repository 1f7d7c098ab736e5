use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

/// Accepts an identifier sent either as a JSON string or a JSON number.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) => Ok(Some(id)),
        Some(Value::Number(id)) => Ok(Some(id.to_string())),
        Some(other) => Err(D::Error::custom(format!("invalid identifier: {}", other))),
    }
}
