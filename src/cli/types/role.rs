//! Player roles.

use crate::error::CricketError;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role a player fills in the side.
///
/// Stored in the database as its display string, e.g. `"All-Rounder"`.
///
/// # Examples
///
/// ```rust
/// use cricket_db::Role;
///
/// let role: Role = "wicket-keeper".parse().unwrap();
/// assert_eq!(role, Role::WicketKeeper);
/// assert_eq!(role.to_string(), "Wicket-Keeper");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    #[serde(rename = "All-Rounder")]
    AllRounder,
    #[serde(rename = "Wicket-Keeper")]
    WicketKeeper,
}

impl Role {
    /// All roles in the order they are offered for selection.
    pub const ALL: [Role; 4] = [
        Role::Batsman,
        Role::Bowler,
        Role::AllRounder,
        Role::WicketKeeper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-Rounder",
            Role::WicketKeeper => "Wicket-Keeper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = CricketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(&['_', ' '][..], "-").as_str() {
            "batsman" => Ok(Role::Batsman),
            "bowler" => Ok(Role::Bowler),
            "all-rounder" | "allrounder" => Ok(Role::AllRounder),
            "wicket-keeper" | "wicketkeeper" | "keeper" => Ok(Role::WicketKeeper),
            _ => Err(CricketError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}

impl ToSql for Role {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Role {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        s.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_conversion() {
        assert_eq!(Role::Batsman.to_string(), "Batsman");
        assert_eq!(Role::Bowler.to_string(), "Bowler");
        assert_eq!(Role::AllRounder.to_string(), "All-Rounder");
        assert_eq!(Role::WicketKeeper.to_string(), "Wicket-Keeper");
    }

    #[test]
    fn test_role_parsing_is_lenient_about_case_and_separators() {
        assert_eq!("BOWLER".parse::<Role>().unwrap(), Role::Bowler);
        assert_eq!("all rounder".parse::<Role>().unwrap(), Role::AllRounder);
        assert_eq!("All_Rounder".parse::<Role>().unwrap(), Role::AllRounder);
        assert_eq!("keeper".parse::<Role>().unwrap(), Role::WicketKeeper);
        assert!("Umpire".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_round_trips_through_display() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_serde_uses_display_names() {
        let json = serde_json::to_string(&Role::AllRounder).unwrap();
        assert_eq!(json, "\"All-Rounder\"");
    }
}
