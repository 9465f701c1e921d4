use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally assigned identifier of a warehouse unit (e.g. `MWH.001`)
///
/// BusinessUnitCode is a wrapper around the business-facing code to provide
/// type safety and prevent mixing up unit codes with location identifiers or
/// other strings in the system. The code is assigned at creation and never
/// changes; replacement creates a new record under the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessUnitCode(String);

impl BusinessUnitCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BusinessUnitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BusinessUnitCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for BusinessUnitCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}
