//! Location identifier types.

use std::fmt;

/// Error returned when parsing an invalid ICS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ICS code: {reason}")]
pub struct InvalidIcsCode {
    reason: &'static str,
}

/// A canonical location identifier from the journey planner.
///
/// ICS codes are short ASCII alphanumeric strings (usually seven digits)
/// that the journey planner accepts in place of free-text place names.
///
/// # Examples
///
/// ```
/// use fare_server::domain::IcsCode;
///
/// let kgx = IcsCode::parse("1000129").unwrap();
/// assert_eq!(kgx.as_str(), "1000129");
///
/// assert!(IcsCode::parse("").is_err());
/// assert!(IcsCode::parse("10 00").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IcsCode(String);

impl IcsCode {
    /// Parse an ICS code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidIcsCode> {
        if s.is_empty() {
            return Err(InvalidIcsCode {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidIcsCode {
                reason: "must be ASCII letters or digits",
            });
        }

        Ok(IcsCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for IcsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IcsCode({})", self.0)
    }
}

impl fmt::Display for IcsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One disambiguation option for a free-text place name.
///
/// The identifier is absent when the journey planner could not pin the
/// option down to a single location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCandidate {
    /// Display name of the matched place, if given.
    pub name: Option<String>,
    /// Canonical identifier, if the match resolved to one.
    pub ics_code: Option<IcsCode>,
}

impl LocationCandidate {
    /// Create a candidate carrying an identifier.
    pub fn resolved(name: impl Into<String>, ics_code: IcsCode) -> Self {
        Self {
            name: Some(name.into()),
            ics_code: Some(ics_code),
        }
    }

    /// Create a candidate without an identifier.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ics_code: None,
        }
    }
}
