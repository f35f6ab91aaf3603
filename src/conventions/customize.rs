// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Convention defined entirely in configuration.
//!
//! Questions come from `[[customize.questions]]` and the message is the
//! `customize.message_template` Handlebars template rendered over the answers.

use crate::config::{CustomizeConfig, QuestionConfig, QuestionKindConfig, CUSTOMIZE};
use crate::error::{ConfigError, GczError, Result};
use crate::prompt::{Answers, Choice, PromptStyle, Question};
use handlebars::Handlebars;
use lazy_static::lazy_static;
use regex::Regex;

use super::{Convention, ConventionError};

const TEMPLATE_NAME: &str = "message";

lazy_static! {
    /// Answer names must be usable as template identifiers.
    static ref QUESTION_NAME: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Template-driven convention.
pub struct Customize {
    questions: Vec<QuestionConfig>,
    registry: Handlebars<'static>,
    style: PromptStyle,
}

impl Customize {
    /// Validate the configuration and compile the template.
    pub fn new(config: &CustomizeConfig) -> Result<Self> {
        if config.questions.is_empty() {
            return Err(invalid("customize.questions", "at least one question is required"));
        }

        for question in &config.questions {
            if !QUESTION_NAME.is_match(&question.name) {
                return Err(invalid(
                    "customize.questions.name",
                    format!("'{}' is not a valid answer name", question.name),
                ));
            }
            if question.kind == QuestionKindConfig::List && question.choices.is_empty() {
                return Err(invalid(
                    "customize.questions.choices",
                    format!("list question '{}' has no choices", question.name),
                ));
            }
        }

        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string(TEMPLATE_NAME, &config.message_template)
            .map_err(|e| invalid("customize.message_template", e.to_string()))?;

        Ok(Self {
            questions: config.questions.clone(),
            registry,
            style: PromptStyle::Colorful,
        })
    }

    pub fn with_style(mut self, style: PromptStyle) -> Self {
        self.style = style;
        self
    }
}

fn invalid(key: &str, message: impl Into<String>) -> GczError {
    GczError::Config(ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    })
}

fn build_question(config: &QuestionConfig) -> Question {
    let default_text = config.default.as_ref().and_then(|v| v.as_str());

    let question = match config.kind {
        QuestionKindConfig::List => {
            let choices = config
                .choices
                .iter()
                .map(|c| Choice::new(c.value.clone(), c.name.clone().unwrap_or_else(|| c.value.clone())))
                .collect();
            Question::select(config.name.clone(), config.message.clone(), choices)
        }
        QuestionKindConfig::Input => Question::input(config.name.clone(), config.message.clone()),
        QuestionKindConfig::Confirm => {
            let default = config
                .default
                .as_ref()
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            Question::confirm(config.name.clone(), config.message.clone(), default)
        }
    };

    let question = match default_text {
        Some(text) => question.with_default_text(text),
        None => question,
    };

    if config.required && config.kind == QuestionKindConfig::Input {
        let name = config.name.clone();
        question.with_filter(move |text| {
            let text = text.trim();
            if text.is_empty() {
                Err(ConventionError::new(format!("{} is required.", name)))
            } else {
                Ok(text.to_string())
            }
        })
    } else {
        question
    }
}

impl Convention for Customize {
    fn name(&self) -> &str {
        CUSTOMIZE
    }

    fn questions(&self) -> Vec<Question> {
        self.questions.iter().map(build_question).collect()
    }

    fn style(&self) -> PromptStyle {
        self.style
    }

    fn message(&self, answers: &Answers) -> std::result::Result<String, ConventionError> {
        self.registry
            .render(TEMPLATE_NAME, answers)
            .map_err(|e| ConventionError::new(format!("Failed to render commit message: {}", e)))
    }
}
