//! User identity
//!
//! The user id names the storage slot, so it is restricted to characters
//! that are safe in a file name on every platform.

use std::fmt;
use std::str::FromStr;

use crate::error::BasketError;

/// Validated user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn parse(s: &str) -> Result<Self, BasketError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(BasketError::Validation("User id cannot be empty".into()));
        }

        if s.starts_with('.') {
            return Err(BasketError::Validation(format!(
                "User id cannot start with '.': {}",
                s
            )));
        }

        if let Some(bad) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@')))
        {
            return Err(BasketError::Validation(format!(
                "User id contains invalid character '{}': {}",
                bad, s
            )));
        }

        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = BasketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
