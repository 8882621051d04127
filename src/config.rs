//! Database location resolution

use crate::{
    error::{CricketError, Result},
    DB_PATH_ENV_VAR,
};
use dirs::data_dir;
use std::path::PathBuf;

/// Resolve the database file from the `--db` flag, then `CRICKET_DB_PATH`,
/// then the platform data directory.
pub fn resolve_database_path(cli_path: Option<PathBuf>) -> Result<PathBuf> {
    resolve_from(cli_path, std::env::var(DB_PATH_ENV_VAR).ok())
}

pub(crate) fn resolve_from(cli_path: Option<PathBuf>, env_path: Option<String>) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        return Ok(path);
    }
    match env_path {
        Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => default_database_path(),
    }
}

/// `<data dir>/cricket-db/cricket.db`
pub fn default_database_path() -> Result<PathBuf> {
    let data_dir = data_dir().ok_or_else(|| CricketError::MissingDataDir {
        env_var: DB_PATH_ENV_VAR.to_string(),
    })?;
    Ok(data_dir.join("cricket-db").join("cricket.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_path_wins() {
        let path = resolve_from(
            Some(PathBuf::from("/tmp/flag.db")),
            Some("/tmp/env.db".to_string()),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/flag.db"));
    }

    #[test]
    fn test_env_path_used_without_flag() {
        let path = resolve_from(None, Some("/tmp/env.db".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/env.db"));
    }

    #[test]
    fn test_blank_env_falls_back_to_default() {
        let resolved = resolve_from(None, Some("  ".to_string()));
        if let Ok(default) = default_database_path() {
            assert_eq!(resolved.unwrap(), default);
            assert!(default.ends_with("cricket-db/cricket.db"));
        }
    }
}
