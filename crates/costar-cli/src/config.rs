//! Run configuration: individual flags merged over an optional JSON
//! manifest.
//!
//! The manifest names the three dataset tables and the initial center:
//!
//! ```json
//! {
//!   "performers": "data/performers.txt",
//!   "productions": "data/productions.txt",
//!   "credits": "data/credits.txt",
//!   "center": "Kevin Bacon"
//! }
//! ```
//!
//! Explicit flags always win over manifest values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// The optional on-disk manifest. Every field is optional so a manifest
/// can carry just the paths while the center comes from a flag.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub performers: Option<PathBuf>,
    pub productions: Option<PathBuf>,
    pub credits: Option<PathBuf>,
    pub center: Option<String>,
}

impl Manifest {
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::Manifest {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Fully resolved configuration for one game run.
#[derive(Debug)]
pub struct GameConfig {
    pub performers: PathBuf,
    pub productions: PathBuf,
    pub credits: PathBuf,
    pub center: String,
}

impl GameConfig {
    /// Merge explicit flags over the manifest; every input must end up
    /// present exactly once.
    pub fn resolve(
        manifest: Manifest,
        performers: Option<PathBuf>,
        productions: Option<PathBuf>,
        credits: Option<PathBuf>,
        center: Option<String>,
    ) -> CliResult<Self> {
        Ok(Self {
            performers: performers
                .or(manifest.performers)
                .ok_or(CliError::MissingInput("performers"))?,
            productions: productions
                .or(manifest.productions)
                .ok_or(CliError::MissingInput("productions"))?,
            credits: credits
                .or(manifest.credits)
                .ok_or(CliError::MissingInput("credits"))?,
            center: center
                .or(manifest.center)
                .ok_or(CliError::MissingInput("center"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn flags_override_manifest() {
        let manifest = Manifest {
            performers: Some(PathBuf::from("m/performers.txt")),
            productions: Some(PathBuf::from("m/productions.txt")),
            credits: Some(PathBuf::from("m/credits.txt")),
            center: Some("Manifest Center".into()),
        };
        let config = GameConfig::resolve(
            manifest,
            Some(PathBuf::from("flag/performers.txt")),
            None,
            None,
            Some("Flag Center".into()),
        )
        .unwrap();
        assert_eq!(config.performers, PathBuf::from("flag/performers.txt"));
        assert_eq!(config.productions, PathBuf::from("m/productions.txt"));
        assert_eq!(config.center, "Flag Center");
    }

    #[test]
    fn missing_input_is_named() {
        let err = GameConfig::resolve(Manifest::default(), None, None, None, None).unwrap_err();
        assert!(err.to_string().contains("performers"));
    }

    #[test]
    fn manifest_round_trips_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"performers": "p.txt", "productions": "t.txt", "credits": "c.txt"}}"#
        )
        .unwrap();
        let manifest = Manifest::load(file.path()).unwrap();
        assert_eq!(manifest.performers, Some(PathBuf::from("p.txt")));
        assert_eq!(manifest.center, None);
    }

    #[test]
    fn unknown_manifest_fields_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"actors": "a.txt"}}"#).unwrap();
        assert!(matches!(
            Manifest::load(file.path()),
            Err(CliError::Manifest { .. })
        ));
    }
}
