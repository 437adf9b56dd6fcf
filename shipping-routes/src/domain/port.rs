//! Port code and port types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maximum length of a port code.
const MAX_CODE_LEN: usize = 8;

/// Error returned when parsing an invalid port code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid port code {code:?}: {reason}")]
pub struct InvalidPortCode {
    code: String,
    reason: &'static str,
}

/// A valid port code: the unique key of a port in the catalogue.
///
/// Port codes are 1 to 8 uppercase ASCII letters or digits. This type
/// guarantees that any `PortCode` value is valid by construction, and is
/// cheap to clone since journeys copy codes around freely.
///
/// # Examples
///
/// ```
/// use shipping_routes::domain::PortCode;
///
/// let ba = PortCode::parse("BA").unwrap();
/// assert_eq!(ba.as_str(), "BA");
///
/// // Lowercase is rejected, but can be normalized
/// assert!(PortCode::parse("ba").is_err());
/// assert_eq!(PortCode::parse_normalized(" ba ").unwrap(), ba);
///
/// assert!(PortCode::parse("").is_err());
/// assert!(PortCode::parse("TOOLONGCODE").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortCode(Arc<str>);

impl PortCode {
    /// Parse a port code from a string.
    ///
    /// The input must be 1 to 8 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidPortCode> {
        let invalid = |reason| InvalidPortCode {
            code: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if s.len() > MAX_CODE_LEN {
            return Err(invalid("must be at most 8 characters"));
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(invalid("must be uppercase ASCII letters or digits"));
        }

        Ok(PortCode(Arc::from(s)))
    }

    /// Parse a port code after trimming whitespace and uppercasing.
    ///
    /// Used for user input, where `" ny"` should mean `NY`.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidPortCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the port code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PortCode({})", self.as_str())
    }
}

impl fmt::Display for PortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PortCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PortCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PortCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A named port in the routing graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// Unique port code
    pub code: PortCode,
    /// Full port name for display
    pub name: String,
}

impl Port {
    /// Creates a new port.
    pub fn new(code: PortCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}
