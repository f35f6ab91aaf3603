// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from gcz.toml.

use serde::{Deserialize, Serialize};

/// Name of the built-in Conventional Commits convention.
pub const CONVENTIONAL_COMMITS: &str = "conventional_commits";

/// Name of the config-driven template convention.
pub const CUSTOMIZE: &str = "customize";

/// The main configuration structure for gcz.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GczConfig {
    /// Commit invocation settings.
    pub commit: CommitConfig,

    /// Conventional Commits convention settings.
    pub conventional: ConventionalConfig,

    /// Template convention settings.
    pub customize: CustomizeConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl GczConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Commit invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Convention used to build the message.
    pub convention: String,

    /// Add a Signed-off-by trailer to every commit.
    pub signoff: bool,

    /// Reuse the backed-up message automatically when one exists.
    pub retry_after_failure: bool,

    /// Arguments always appended to `git commit`.
    pub extra_args: Vec<String>,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            convention: CONVENTIONAL_COMMITS.to_string(),
            signoff: false,
            retry_after_failure: false,
            extra_args: Vec::new(),
        }
    }
}

/// Conventional Commits settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConventionalConfig {
    /// Maximum length of the header line.
    pub max_subject_length: usize,

    /// Commit types offered in the type question, in display order.
    pub types: Vec<TypeChoice>,
}

impl Default for ConventionalConfig {
    fn default() -> Self {
        Self {
            max_subject_length: 72,
            types: CommitType::all()
                .iter()
                .map(|t| TypeChoice {
                    value: t.as_str().to_string(),
                    description: t.description().to_string(),
                })
                .collect(),
        }
    }
}

/// One selectable commit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeChoice {
    /// Value written into the header.
    pub value: String,

    /// Text shown next to the value.
    #[serde(default)]
    pub description: String,
}

/// Template convention settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizeConfig {
    /// Handlebars template rendered with the answers.
    pub message_template: String,

    /// Questions asked, in order.
    pub questions: Vec<QuestionConfig>,
}

impl Default for CustomizeConfig {
    fn default() -> Self {
        Self {
            message_template: "{{change_type}}: {{message}}".to_string(),
            questions: vec![
                QuestionConfig {
                    kind: QuestionKindConfig::List,
                    name: "change_type".to_string(),
                    message: "Select the type of change you are committing".to_string(),
                    choices: vec![
                        ChoiceConfig {
                            value: "feature".to_string(),
                            name: Some("feature: A new feature.".to_string()),
                        },
                        ChoiceConfig {
                            value: "bug fix".to_string(),
                            name: Some("bug fix: A bug fix.".to_string()),
                        },
                    ],
                    default: None,
                    required: false,
                },
                QuestionConfig {
                    kind: QuestionKindConfig::Input,
                    name: "message".to_string(),
                    message: "Body.".to_string(),
                    choices: Vec::new(),
                    default: None,
                    required: true,
                },
            ],
        }
    }
}

/// A question declared in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionConfig {
    /// Question type.
    #[serde(rename = "type")]
    pub kind: QuestionKindConfig,

    /// Answer key, referenced from the message template.
    pub name: String,

    /// Prompt text.
    pub message: String,

    /// Choices for `list` questions.
    #[serde(default)]
    pub choices: Vec<ChoiceConfig>,

    /// Default answer.
    #[serde(default)]
    pub default: Option<toml::Value>,

    /// Reject empty input.
    #[serde(default)]
    pub required: bool,
}

/// Question types available to the template convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKindConfig {
    List,
    Input,
    Confirm,
}

/// A choice for a `list` question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceConfig {
    /// Value stored in the answers.
    pub value: String,

    /// Text shown in the list; defaults to the value.
    #[serde(default)]
    pub name: Option<String>,
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Commit types of the Conventional Commits convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Fix,
    Feat,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Fix => "fix",
            CommitType::Feat => "feat",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
        }
    }

    /// Get a description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Fix => "A bug fix. Correlates with PATCH in SemVer",
            CommitType::Feat => "A new feature. Correlates with MINOR in SemVer",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => "Changes that do not affect the meaning of the code",
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Test => "Adding missing or correcting existing tests",
            CommitType::Build => "Changes that affect the build system or external dependencies",
            CommitType::Ci => "Changes to CI configuration files and scripts",
        }
    }

    /// Get all commit types.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Fix,
            CommitType::Feat,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Build,
            CommitType::Ci,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GczConfig::default();
        assert_eq!(config.commit.convention, CONVENTIONAL_COMMITS);
        assert!(!config.commit.signoff);
        assert_eq!(config.conventional.max_subject_length, 72);
        assert_eq!(config.conventional.types.len(), CommitType::all().len());
        assert_eq!(config.conventional.types[0].value, "fix");
    }

    #[test]
    fn test_commit_type_catalogue() {
        let values: Vec<&str> = CommitType::all().iter().map(|t| t.as_str()).collect();
        assert_eq!(
            values,
            vec!["fix", "feat", "docs", "style", "refactor", "perf", "test", "build", "ci"]
        );
        assert!(CommitType::all().iter().all(|t| !t.description().is_empty()));
    }

    #[test]
    fn test_config_serialization() {
        let config = GczConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("convention"));
        assert!(toml_str.contains("message_template"));
    }
}
