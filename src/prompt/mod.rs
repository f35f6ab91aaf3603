// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Question/answer engine.
//!
//! A [`Prompter`] runs a convention's question set against an explicit
//! terminal and reports one of three things: the answers, a cancelled
//! session (`Ok(None)`), or a typed failure.

mod question;

pub use question::{Answer, Answers, Choice, Filter, Question, QuestionKind};

use crate::conventions::ConventionError;
use console::Term;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input, Select};
use std::io::ErrorKind;
use thiserror::Error;

/// Visual style of a prompt session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStyle {
    #[default]
    Colorful,
    Plain,
}

/// Failure of a prompt session.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The convention rejected an answer.
    #[error(transparent)]
    Convention(#[from] ConventionError),

    /// The terminal could not be driven.
    #[error(transparent)]
    Ui(#[from] dialoguer::Error),
}

/// Runs a question set.
pub trait Prompter {
    /// Ask every question in order. `Ok(None)` means the user cancelled.
    fn prompt(
        &mut self,
        questions: &[Question],
        style: PromptStyle,
        term: &Term,
    ) -> Result<Option<Answers>, PromptError>;
}

/// Interactive prompter built on dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn prompt(
        &mut self,
        questions: &[Question],
        style: PromptStyle,
        term: &Term,
    ) -> Result<Option<Answers>, PromptError> {
        let theme: Box<dyn Theme> = match style {
            PromptStyle::Colorful => Box::new(ColorfulTheme::default()),
            PromptStyle::Plain => Box::new(SimpleTheme),
        };

        let mut answers = Answers::new();
        for question in questions {
            let raw = match ask(question, theme.as_ref(), term) {
                Ok(Some(raw)) => raw,
                Ok(None) => return Ok(None),
                Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => {
                    return Ok(None)
                }
                Err(e) => return Err(e.into()),
            };
            answers.insert(question.name.clone(), question.apply_filter(raw)?);
        }

        Ok(Some(answers))
    }
}

/// Ask one question; `None` when the user backs out of it.
fn ask(question: &Question, theme: &dyn Theme, term: &Term) -> dialoguer::Result<Option<Answer>> {
    match &question.kind {
        QuestionKind::Select { choices, default } => {
            let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
            let selection = Select::with_theme(theme)
                .with_prompt(&question.message)
                .items(&labels)
                .default(*default)
                .interact_on_opt(term)?;
            Ok(selection.map(|idx| Answer::Text(choices[idx].value.clone())))
        }
        QuestionKind::Input { default } => {
            let mut input = Input::<String>::with_theme(theme)
                .with_prompt(&question.message)
                .allow_empty(true);
            if !default.is_empty() {
                input = input.default(default.clone());
            }
            Ok(Some(Answer::Text(input.interact_text_on(term)?)))
        }
        QuestionKind::Confirm { default } => {
            let confirmed = Confirm::with_theme(theme)
                .with_prompt(&question.message)
                .default(*default)
                .interact_on_opt(term)?;
            Ok(confirmed.map(Answer::Bool))
        }
    }
}
