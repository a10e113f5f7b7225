use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use catdiff_diff::ComparePolicy;
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "catdiff.toml";

pub const DEFAULT_REFERENCE: &str = "messages/en.json";
pub const DEFAULT_CANDIDATE: &str = "messages/pl.json";
pub const DEFAULT_MESSAGES_DIR: &str = "messages";
pub const DEFAULT_REFERENCE_LOCALE: &str = "en";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Settings read from `catdiff.toml`. Command-line flags take precedence.
///
/// ```toml
/// reference = "messages/en.json"
/// candidate = "messages/pl.json"
///
/// [policy]
/// leaf_policy = "strict_kinds"
/// max_depth = 16
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub policy: ComparePolicy,
    pub reference: Option<PathBuf>,
    pub candidate: Option<PathBuf>,
    pub messages_dir: Option<PathBuf>,
    pub reference_locale: Option<String>,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `explicit` if given, else `catdiff.toml` in the working
    /// directory if it exists, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::load(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catdiff_diff::LeafPolicy;

    #[test]
    fn full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catdiff.toml");
        fs::write(
            &path,
            r#"
reference = "locales/en.json"
candidate = "locales/de.json"
reference_locale = "en"

[policy]
root_label = "messages"
max_depth = 16
leaf_policy = "strict_kinds"
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.reference, Some(PathBuf::from("locales/en.json")));
        assert_eq!(config.candidate, Some(PathBuf::from("locales/de.json")));
        assert_eq!(config.policy.root_label, "messages");
        assert_eq!(config.policy.max_depth, 16);
        assert_eq!(config.policy.leaf_policy, LeafPolicy::StrictKinds);
        assert!(config.messages_dir.is_none());
    }

    #[test]
    fn empty_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catdiff.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catdiff.toml");
        fs::write(&path, "refrence = \"en.json\"\n").unwrap();
        assert!(matches!(CliConfig::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = CliConfig::discover(Some(&path)).unwrap_err();
        assert_eq!(err.to_string(), format!("failed to read config {}", path.display()));
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
