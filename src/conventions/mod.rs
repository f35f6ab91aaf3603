// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message conventions.
//!
//! A convention owns a question set, the prompt style, and the formatter
//! that turns answers into the final message.

mod conventional;
mod customize;

pub use conventional::{ConventionalCommits, ConventionalMessage};
pub use customize::Customize;

use crate::config::{GczConfig, CONVENTIONAL_COMMITS, CUSTOMIZE};
use crate::error::{ConfigError, GczError, Result};
use crate::prompt::{Answers, PromptStyle, Question};
use thiserror::Error;

/// An answer or answer set rejected by a convention.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ConventionError(String);

impl ConventionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The message shown to the user.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<ConventionError> for GczError {
    fn from(err: ConventionError) -> Self {
        GczError::Custom(err.0)
    }
}

/// A commit message convention.
pub trait Convention {
    /// Name used in configuration.
    fn name(&self) -> &str;

    /// Questions asked to compose a message.
    fn questions(&self) -> Vec<Question>;

    /// Prompt style for the session.
    fn style(&self) -> PromptStyle {
        PromptStyle::Colorful
    }

    /// Build the message from a complete answer set.
    fn message(&self, answers: &Answers) -> std::result::Result<String, ConventionError>;
}

/// Build the convention selected by `commit.convention`.
pub fn from_config(config: &GczConfig) -> Result<Box<dyn Convention>> {
    let style = if config.ui.color {
        PromptStyle::Colorful
    } else {
        PromptStyle::Plain
    };

    match config.commit.convention.as_str() {
        CONVENTIONAL_COMMITS | "cz_conventional_commits" => Ok(Box::new(
            ConventionalCommits::new(config.conventional.clone()).with_style(style),
        )),
        CUSTOMIZE | "cz_customize" => {
            Ok(Box::new(Customize::new(&config.customize)?.with_style(style)))
        }
        other => Err(GczError::Config(ConfigError::InvalidValue {
            key: "commit.convention".to_string(),
            message: format!(
                "unknown convention '{}', expected '{}' or '{}'",
                other, CONVENTIONAL_COMMITS, CUSTOMIZE
            ),
        })),
    }
}
