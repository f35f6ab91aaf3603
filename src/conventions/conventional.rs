// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional Commits.

use crate::config::ConventionalConfig;
use crate::prompt::{Answers, Choice, PromptStyle, Question};

use super::{Convention, ConventionError};

/// Structured Conventional Commits message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalMessage {
    /// Commit type (feat, fix, etc.).
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Optional body.
    pub body: Option<String>,
    /// Optional footer (references, breaking change description).
    pub footer: Option<String>,
    /// Whether this is a breaking change.
    pub is_breaking: bool,
}

impl ConventionalMessage {
    /// Create a new commit message.
    pub fn new(commit_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            scope: None,
            subject: subject.into(),
            body: None,
            footer: None,
            is_breaking: false,
        }
    }

    /// Set the scope; empty text clears it.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = non_empty(scope.into());
        self
    }

    /// Set the body; empty text clears it.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = non_empty(body.into());
        self
    }

    /// Set the footer; empty text clears it.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = non_empty(footer.into());
        self
    }

    /// Set the breaking flag.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.is_breaking = breaking;
        self
    }

    /// Build a message from the answers of [`ConventionalCommits::questions`].
    pub fn from_answers(answers: &Answers) -> Self {
        Self::new(answers.text("prefix"), answers.text("subject"))
            .with_scope(answers.text("scope"))
            .with_body(answers.text("body"))
            .with_footer(answers.text("footer"))
            .with_breaking(answers.flag("is_breaking_change"))
    }

    /// First line of the message.
    pub fn header(&self) -> String {
        let mut result = String::new();
        result.push_str(&self.commit_type);

        if let Some(ref scope) = self.scope {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        if self.is_breaking {
            result.push('!');
        }

        result.push_str(": ");
        result.push_str(&self.subject);

        result
    }

    /// Full message text.
    pub fn format(&self) -> String {
        let mut result = self.header();

        if let Some(ref body) = self.body {
            result.push_str("\n\n");
            result.push_str(body);
        }

        if let Some(ref footer) = self.footer {
            result.push_str("\n\n");
            if self.is_breaking {
                result.push_str("BREAKING CHANGE: ");
            }
            result.push_str(footer);
        }

        result
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Collapse whitespace inside a scope into dashes.
pub fn parse_scope(text: &str) -> Result<String, ConventionError> {
    Ok(text.split_whitespace().collect::<Vec<_>>().join("-"))
}

/// Trim a subject and drop surrounding periods; the result must not be empty.
pub fn parse_subject(text: &str) -> Result<String, ConventionError> {
    let subject = text.trim().trim_matches('.').trim();
    if subject.is_empty() {
        Err(ConventionError::new("Subject is required."))
    } else {
        Ok(subject.to_string())
    }
}

/// Turn `|` separators into line breaks.
pub fn break_lines(text: &str) -> Result<String, ConventionError> {
    Ok(text
        .split('|')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string())
}

/// The Conventional Commits convention.
#[derive(Debug, Clone)]
pub struct ConventionalCommits {
    config: ConventionalConfig,
    style: PromptStyle,
}

impl ConventionalCommits {
    pub fn new(config: ConventionalConfig) -> Self {
        Self {
            config,
            style: PromptStyle::Colorful,
        }
    }

    pub fn with_style(mut self, style: PromptStyle) -> Self {
        self.style = style;
        self
    }
}

impl Convention for ConventionalCommits {
    fn name(&self) -> &str {
        crate::config::CONVENTIONAL_COMMITS
    }

    fn questions(&self) -> Vec<Question> {
        let width = self
            .config
            .types
            .iter()
            .map(|t| t.value.len())
            .max()
            .unwrap_or(0);
        let choices = self
            .config
            .types
            .iter()
            .map(|t| {
                let label = if t.description.is_empty() {
                    t.value.clone()
                } else {
                    format!("{:width$}  {}", t.value, t.description, width = width)
                };
                Choice::new(t.value.clone(), label)
            })
            .collect();

        vec![
            Question::select(
                "prefix",
                "Select the type of change you are committing",
                choices,
            ),
            Question::input(
                "scope",
                "What is the scope of this change? (class or file name) (press [enter] to skip)",
            )
            .with_filter(parse_scope),
            Question::input(
                "subject",
                "Write a short and imperative summary of the code changes (lower case and no period)",
            )
            .with_filter(parse_subject),
            Question::confirm(
                "is_breaking_change",
                "Is this a BREAKING CHANGE? Correlates with MAJOR in SemVer",
                false,
            ),
            Question::input(
                "body",
                "Provide additional contextual information about the code changes, use '|' for new lines (press [enter] to skip)",
            )
            .with_filter(break_lines),
            Question::input(
                "footer",
                "Footer. Information about breaking changes and issues this commit closes (press [enter] to skip)",
            ),
        ]
    }

    fn style(&self) -> PromptStyle {
        self.style
    }

    fn message(&self, answers: &Answers) -> Result<String, ConventionError> {
        let message = ConventionalMessage::from_answers(answers);

        if message.commit_type.is_empty() {
            return Err(ConventionError::new("Commit type is required."));
        }
        parse_subject(&message.subject)?;

        let max = self.config.max_subject_length;
        let header_len = message.header().chars().count();
        if max > 0 && header_len > max {
            return Err(ConventionError::new(format!(
                "Length of commit header exceeds the limit ({}/{})",
                header_len, max
            )));
        }

        Ok(message.format())
    }
}
