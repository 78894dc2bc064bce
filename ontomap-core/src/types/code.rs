/// Ontology code type used throughout ontomap
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Code identifying one node within a single tree version - newtype pattern for type safety
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    /// Create a new Code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the inner value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Blank codes carry no identity and are never looked up
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Code {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for Code {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Code {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Join codes with commas, in iteration order
pub fn join_codes<'a, I>(codes: I) -> String
where
    I: IntoIterator<Item = &'a Code>,
{
    codes
        .into_iter()
        .map(Code::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
