// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and loading.

use crate::error::{ConfigError, GczError, Result};
use std::path::{Path, PathBuf};

use super::schema::GczConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["gcz.toml", ".gcz.toml", ".config/gcz.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    let xdg = dirs::config_dir()?.join("gcz").join("config.toml");
    xdg.exists().then_some(xdg)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<GczConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(GczConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<GczConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(GczError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GczError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<GczConfig> {
    toml::from_str(content).map_err(|e| {
        GczError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuestionKindConfig;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.commit.convention, "conventional_commits");
        assert_eq!(config.conventional.max_subject_length, 72);
    }

    #[test]
    fn test_parse_commit_section() {
        let toml = r#"
[commit]
signoff = true
retry_after_failure = true
extra_args = ["--no-verify"]
"#;
        let config = parse_config(toml).unwrap();
        assert!(config.commit.signoff);
        assert!(config.commit.retry_after_failure);
        assert_eq!(config.commit.extra_args, vec!["--no-verify"]);
        assert_eq!(config.commit.convention, "conventional_commits");
    }

    #[test]
    fn test_parse_conventional_types() {
        let toml = r#"
[conventional]
max_subject_length = 50
types = [
    { value = "feat", description = "A new feature" },
    { value = "chore" },
]
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.conventional.max_subject_length, 50);
        assert_eq!(config.conventional.types.len(), 2);
        assert_eq!(config.conventional.types[1].value, "chore");
        assert!(config.conventional.types[1].description.is_empty());
    }

    #[test]
    fn test_parse_customize_questions() {
        let toml = r#"
[commit]
convention = "customize"

[customize]
message_template = "{{kind}}: {{summary}}{{#if urgent}} [urgent]{{/if}}"

[[customize.questions]]
type = "list"
name = "kind"
message = "Kind of change"
choices = [{ value = "add", name = "add: something new" }, { value = "remove" }]

[[customize.questions]]
type = "input"
name = "summary"
message = "Summary"
required = true

[[customize.questions]]
type = "confirm"
name = "urgent"
message = "Urgent?"
default = false
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.commit.convention, "customize");
        assert_eq!(config.customize.questions.len(), 3);
        assert_eq!(config.customize.questions[0].kind, QuestionKindConfig::List);
        assert_eq!(config.customize.questions[0].choices.len(), 2);
        assert!(config.customize.questions[1].required);
        assert_eq!(
            config.customize.questions[2].default,
            Some(toml::Value::Boolean(false))
        );
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config("[commit\nsignoff = true");
        assert!(matches!(
            result,
            Err(GczError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_find_config_file_in_parent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".gcz.toml"), "[ui]\ncolor = false\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".gcz.toml"));

        let config = load_config_from(&found).unwrap();
        assert!(!config.ui.color);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("gcz.toml"));
        assert!(matches!(
            result,
            Err(GczError::Config(ConfigError::NotFound { .. }))
        ));
    }
}
