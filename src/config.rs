use crate::core::db::ConnectionProfile;
use crate::core::{DaliteError, Result};
use chrono::FixedOffset;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub database: ConnectionProfile,
}

/// Loads a connection profile from a TOML file at the given path.
///
/// The `[database]` table maps onto `ConnectionProfile`; `host` defaults to
/// `localhost`, `password` to empty, and `tz_offset` to the fixed default
/// session offset. A configured offset must parse as a fixed UTC offset
/// such as `+05:30`.
///
/// # Example
///
/// ```toml
/// [database]
/// user = "app"
/// database = "app.db"
/// tz_offset = "+05:30"
/// ```
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<ConnectionProfile> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|e| DaliteError::Config(e.to_string()))?;
    validate_tz_offset(&config.database.tz_offset)?;
    Ok(config.database)
}

fn validate_tz_offset(offset: &str) -> Result<()> {
    offset
        .parse::<FixedOffset>()
        .map(|_| ())
        .map_err(|e| DaliteError::Config(format!("invalid time-zone offset {offset:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::db::DEFAULT_TZ_OFFSET;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_profile() {
        let file = write_config(
            r#"
            [database]
            host = "db.internal"
            user = "app"
            password = "secret"
            database = "app.db"
            tz_offset = "+00:00"
            "#,
        );

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.host, "db.internal");
        assert_eq!(profile.user, "app");
        assert_eq!(profile.password, "secret");
        assert_eq!(profile.database, "app.db");
        assert_eq!(profile.tz_offset, "+00:00");
    }

    #[test]
    fn test_defaults_applied() {
        let file = write_config(
            r#"
            [database]
            user = "app"
            database = "app.db"
            "#,
        );

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.host, "localhost");
        assert_eq!(profile.password, "");
        assert_eq!(profile.tz_offset, DEFAULT_TZ_OFFSET);
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let file = write_config(
            r#"
            [database]
            user = "app"
            database = "app.db"
            tz_offset = "sometime"
            "#,
        );

        match load_profile(file.path()) {
            Err(DaliteError::Config(msg)) => assert!(msg.contains("sometime")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        match load_profile("/nonexistent/dalite.toml") {
            Err(DaliteError::Io(_)) => {}
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let file = write_config("[database\nuser=");
        assert!(matches!(
            load_profile(file.path()),
            Err(DaliteError::Config(_))
        ));
    }
}
