use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::error::AppError;

/// Permission tier granted to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    ReadOnly,
    Full,
    Limited,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadOnly => "read-only",
            Self::Full => "full",
            Self::Limited => "limited",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read-only" => Ok(Self::ReadOnly),
            "full" => Ok(Self::Full),
            "limited" => Ok(Self::Limited),
            other => Err(AppError::InvalidAccessLevel(other.to_string())),
        }
    }
}

/// Lifecycle marker: invited until the account is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserState {
    Active,
    Invited,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub email: String,
    pub access_level: AccessLevel,
    pub state: UserState,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RInviteUsers {
    pub emails: Vec<String>,
    // Kept as a raw string so unknown values surface as invalidAccess
    // instead of a deserialization error.
    pub access_level: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct RUserEmail {
    pub email: String,
}
