//! Parameter data structures returned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parameter held in the remote store.
///
/// `name` is the full hierarchical name as the store reports it (e.g.
/// `/app/db/password`) until a fetch rewrites it to the relative key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    /// Hierarchical name
    pub name: String,

    /// Value (decrypted when the request asked for it)
    pub value: String,

    /// Parameter type
    #[serde(rename = "type")]
    pub param_type: ParameterType,

    /// Version number assigned by the store
    #[serde(default)]
    pub version: i64,

    /// When the parameter was last changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Parameter {
    /// Creates a plain `String` parameter at version 1.
    ///
    /// # Example
    ///
    /// ```
    /// use ssm_params::{Parameter, ParameterType};
    ///
    /// let param = Parameter::new("/app/db/host", "localhost");
    /// assert_eq!(param.param_type, ParameterType::String);
    /// assert_eq!(param.version, 1);
    /// ```
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            param_type: ParameterType::String,
            version: 1,
            last_modified: Some(Utc::now()),
        }
    }

    /// Creates a `SecureString` parameter holding an already-decrypted value.
    pub fn new_secure(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            param_type: ParameterType::SecureString,
            ..Self::new(name, value)
        }
    }
}

/// Type of a stored parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    /// Plain text
    String,
    /// Comma-separated list
    StringList,
    /// KMS-encrypted text
    SecureString,
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::StringList => write!(f, "StringList"),
            Self::SecureString => write!(f, "SecureString"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_secure() {
        let param = Parameter::new_secure("/app/db/password", "hunter2");
        assert_eq!(param.name, "/app/db/password");
        assert_eq!(param.value, "hunter2");
        assert_eq!(param.param_type, ParameterType::SecureString);
        assert!(param.last_modified.is_some());
    }

    #[test]
    fn test_parameter_type_display() {
        assert_eq!(ParameterType::String.to_string(), "String");
        assert_eq!(ParameterType::StringList.to_string(), "StringList");
        assert_eq!(ParameterType::SecureString.to_string(), "SecureString");
    }

    #[test]
    fn test_serialized_field_names() {
        let param = Parameter {
            last_modified: None,
            ..Parameter::new("/app/flag", "true")
        };
        let json = serde_json::to_value(&param).unwrap();

        assert_eq!(json["type"], "String");
        assert_eq!(json["version"], 1);
        assert!(json.get("last_modified").is_none());
    }
}
