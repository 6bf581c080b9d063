//! Safe symbolic identifiers.
//!
//! Every name the generator writes into a build file, a C++ type or a file
//! stem goes through [`Identifier`]. One normalization rule for all three
//! slots keeps cross-references between generated files consistent.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Normalize arbitrary text into the identifier alphabet.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, and a leading digit
/// gets a `_` prefix. Total and idempotent; the empty string stays empty.
/// Distinct inputs may collide (`"a-b"` and `"a_b"` both give `"a_b"`).
pub fn normalize(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }

    out
}

/// A non-empty string matching `[A-Za-z_][A-Za-z0-9_]*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Normalize `raw` and reject the result if it is empty.
    ///
    /// `slot` names the role of the identifier in error messages
    /// ("plugin name", "model class", ...).
    pub fn new(raw: &str, slot: &'static str) -> Result<Self, DomainError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(DomainError::EmptyIdentifier { slot });
        }
        Ok(Self(normalized))
    }

    /// Append a suffix, used to derive default names (`<Name>Plugin`).
    pub fn suffixed(&self, suffix: &str) -> Self {
        Self(normalize(&format!("{}{suffix}", self.0)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
