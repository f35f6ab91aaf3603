// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Question and answer types shared by conventions and the prompt engine.

use crate::conventions::ConventionError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Post-processing applied to a text answer; an error aborts the session.
pub type Filter = Box<dyn Fn(&str) -> Result<String, ConventionError>>;

/// One question of a convention's question set.
pub struct Question {
    /// Key the answer is stored under.
    pub name: String,
    /// Prompt text.
    pub message: String,
    /// How the question is asked.
    pub kind: QuestionKind,
    /// Applied to text answers before they are stored.
    pub filter: Option<Filter>,
}

/// Question flavours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick one of several values.
    Select { choices: Vec<Choice>, default: usize },
    /// Free text.
    Input { default: String },
    /// Yes or no.
    Confirm { default: bool },
}

/// A selectable value and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl Question {
    /// A single-choice question.
    pub fn select(name: impl Into<String>, message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self::new(name, message, QuestionKind::Select { choices, default: 0 })
    }

    /// A free-text question with an empty default.
    pub fn input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            name,
            message,
            QuestionKind::Input {
                default: String::new(),
            },
        )
    }

    /// A yes/no question.
    pub fn confirm(name: impl Into<String>, message: impl Into<String>, default: bool) -> Self {
        Self::new(name, message, QuestionKind::Confirm { default })
    }

    fn new(name: impl Into<String>, message: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind,
            filter: None,
        }
    }

    /// Set the default text of an input question, or the preselected value
    /// of a select question. Ignored for confirmations.
    pub fn with_default_text(mut self, text: &str) -> Self {
        match &mut self.kind {
            QuestionKind::Input { default } => *default = text.to_string(),
            QuestionKind::Select { choices, default } => {
                if let Some(idx) = choices.iter().position(|c| c.value == text) {
                    *default = idx;
                }
            }
            QuestionKind::Confirm { .. } => {}
        }
        self
    }

    /// Attach a filter run on the raw text answer.
    pub fn with_filter(
        mut self,
        filter: impl Fn(&str) -> Result<String, ConventionError> + 'static,
    ) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Run the filter, if any, over a raw answer.
    pub fn apply_filter(&self, answer: Answer) -> Result<Answer, ConventionError> {
        match (answer, &self.filter) {
            (Answer::Text(text), Some(filter)) => filter(&text).map(Answer::Text),
            (answer, _) => Ok(answer),
        }
    }
}

impl std::fmt::Debug for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

/// A single answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Bool(bool),
}

/// Answers keyed by question name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, answer: Answer) {
        self.0.insert(name.into(), answer);
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, answer: Answer) -> Self {
        self.insert(name, answer);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.0.get(name)
    }

    /// Text answer, empty when missing or not text.
    pub fn text(&self, name: &str) -> &str {
        match self.0.get(name) {
            Some(Answer::Text(text)) => text,
            _ => "",
        }
    }

    /// Boolean answer, false when missing or not boolean.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(Answer::Bool(true)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_default_by_value() {
        let question = Question::select(
            "prefix",
            "Type",
            vec![Choice::new("fix", "fix"), Choice::new("feat", "feat")],
        )
        .with_default_text("feat");
        assert!(matches!(question.kind, QuestionKind::Select { default: 1, .. }));

        let question = Question::select("prefix", "Type", vec![Choice::new("fix", "fix")])
            .with_default_text("missing");
        assert!(matches!(question.kind, QuestionKind::Select { default: 0, .. }));
    }

    #[test]
    fn test_filter_applies_to_text_only() {
        let question =
            Question::input("scope", "Scope").with_filter(|s| Ok(s.trim().to_uppercase()));
        assert_eq!(
            question.apply_filter(Answer::Text(" api ".to_string())).unwrap(),
            Answer::Text("API".to_string())
        );
        assert_eq!(
            question.apply_filter(Answer::Bool(true)).unwrap(),
            Answer::Bool(true)
        );
    }

    #[test]
    fn test_filter_error_propagates() {
        let question = Question::input("subject", "Subject")
            .with_filter(|_| Err(ConventionError::new("Subject is required.")));
        let err = question
            .apply_filter(Answer::Text(String::new()))
            .unwrap_err();
        assert_eq!(err.to_string(), "Subject is required.");
    }

    #[test]
    fn test_answers_accessors() {
        let answers = Answers::new()
            .with("prefix", Answer::Text("fix".to_string()))
            .with("is_breaking_change", Answer::Bool(true));
        assert_eq!(answers.text("prefix"), "fix");
        assert_eq!(answers.text("missing"), "");
        assert!(answers.flag("is_breaking_change"));
        assert!(!answers.flag("prefix"));
        assert_eq!(answers.len(), 2);
    }
}
