//! ID types for teams, players and matches.

use crate::error::{CricketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parse a record ID, rejecting anything below 1.
fn parse_id(s: &str) -> Result<u32> {
    match s.trim().parse::<u32>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(CricketError::InvalidId {
            value: s.to_string(),
        }),
    }
}

/// Type-safe wrapper for Team IDs.
///
/// Keeps team IDs from being mixed up with player or match IDs, which share
/// the same numeric range.
///
/// # Examples
///
/// ```rust
/// use cricket_db::TeamId;
///
/// let team_id: TeamId = "7".parse().unwrap();
/// assert_eq!(team_id.as_u32(), 7);
/// assert!("0".parse::<TeamId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new TeamId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = CricketError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(parse_id(s)?))
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = CricketError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(parse_id(s)?))
    }
}

/// Type-safe wrapper for Match IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub u32);

impl MatchId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchId {
    type Err = CricketError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(parse_id(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        assert_eq!("1".parse::<TeamId>().unwrap(), TeamId::new(1));
        assert_eq!(" 42 ".parse::<PlayerId>().unwrap().as_u32(), 42);
        assert_eq!("900".parse::<MatchId>().unwrap().to_string(), "900");
    }

    #[test]
    fn test_id_parsing_rejects_zero_and_garbage() {
        for bad in ["0", "-3", "abc", "", "1.5"] {
            match bad.parse::<TeamId>() {
                Err(CricketError::InvalidId { value }) => assert_eq!(value, bad),
                other => panic!("Expected InvalidId for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&PlayerId::new(12)).unwrap();
        assert_eq!(json, "12");
    }
}
