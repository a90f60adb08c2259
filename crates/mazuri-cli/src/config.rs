//! CLI configuration
//!
//! The database path comes from `--db`, then `MAJI_MAZURI_DB` (a `.env` file
//! is loaded first), then the default file in the working directory. Clap
//! applies that precedence; this module turns the parsed flags into the
//! settings `main` acts on.

use mazuri_core::logging_facility::Profile;
use mazuri_core::Result;
use std::path::{Path, PathBuf};

/// Database file used when neither `--db` nor the environment names one
pub const DEFAULT_DB_PATH: &str = "maji_mazuri.db";

/// Environment variable naming the database file
pub const DB_ENV_VAR: &str = "MAJI_MAZURI_DB";

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// SQLite database file
    pub db_path: PathBuf,

    pub log_profile: Profile,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_profile: Profile::Cli,
        }
    }
}

impl CliConfig {
    /// Build the configuration from parsed global flags
    ///
    /// `--log-json` wins over `--verbose` when both are given.
    pub fn resolve(db_path: PathBuf, verbose: bool, log_json: bool) -> Self {
        let log_profile = if log_json {
            Profile::Production
        } else if verbose {
            Profile::Development
        } else {
            Profile::Cli
        };

        Self {
            db_path,
            log_profile,
        }
    }

    /// Create the database's parent directory if it does not exist yet
    ///
    /// ## Errors
    ///
    /// `MazuriError::Io` when the directory cannot be created.
    pub fn ensure_parent_dir(&self) -> Result<()> {
        match self.db_path.parent() {
            Some(parent) if parent != Path::new("") => Ok(std::fs::create_dir_all(parent)?),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazuri_core::{ExErrorKind, MazuriError};
    use tempfile::TempDir;

    #[test]
    fn test_resolve_picks_log_profile() {
        let path = PathBuf::from("bar.db");

        assert_eq!(
            CliConfig::resolve(path.clone(), false, false).log_profile,
            Profile::Cli
        );
        assert_eq!(
            CliConfig::resolve(path.clone(), true, false).log_profile,
            Profile::Development
        );
        assert_eq!(
            CliConfig::resolve(path, true, true).log_profile,
            Profile::Production
        );
    }

    #[test]
    fn test_default_uses_working_directory_file() {
        let config = CliConfig::default();

        assert_eq!(config.db_path, PathBuf::from("maji_mazuri.db"));
        assert!(config.ensure_parent_dir().is_ok());
    }

    #[test]
    fn test_ensure_parent_dir_creates_missing_directories() {
        let tmp = TempDir::new().unwrap();
        let db_path = tmp.path().join("nested").join("deeper").join("bar.db");
        let config = CliConfig::resolve(db_path.clone(), false, false);

        config.ensure_parent_dir().unwrap();

        assert!(db_path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_reports_io_error() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("occupied");
        std::fs::write(&blocker, "not a directory").unwrap();
        let config = CliConfig::resolve(blocker.join("bar.db"), false, false);

        let err = config.ensure_parent_dir().unwrap_err();

        assert!(matches!(err, MazuriError::Io { .. }));
        assert_eq!(err.kind(), ExErrorKind::Io);
    }
}
