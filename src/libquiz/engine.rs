use crate::libquiz::question::{Question, QuestionBank};
use crate::libquiz::settings::QuizSettings;
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("the quiz is already finished, restart it first")]
    AlreadyFinished,
    #[error("option {index} does not exist, the question only has {available}")]
    NoSuchOption { index: usize, available: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    InProgress,
    Finished,
}

/// Everything a run of the quiz records. Replaced wholesale on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    pub current_index: usize,
    pub score: usize,
    pub answers_given: HashMap<usize, String>,
    pub correct_indices: HashSet<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UserAnswer {
    Given(String),
    NotAnswered,
}

impl fmt::Display for UserAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAnswer::Given(text) => f.write_str(text),
            UserAnswer::NotAnswered => f.write_str("Not Answered"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissedQuestion {
    /// Position in the bank, zero based.
    pub index: usize,
    pub question_text: String,
    pub user_answer: UserAnswer,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// `passed` is only a verdict once this is `Finished`.
    pub phase: Phase,
    pub score: usize,
    pub total_questions: usize,
    pub score_percentage: f64,
    pub passed: bool,
    pub missed_questions: Vec<MissedQuestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentState<'a> {
    pub phase: Phase,
    pub current_question: Option<&'a Question>,
    /// One based, as shown to the player. Equals the total once finished.
    pub current_index_display: usize,
    pub total_questions: usize,
}

pub struct QuizEngine {
    bank: QuestionBank,
    settings: QuizSettings,
    state: QuizState,
}

impl QuizEngine {
    pub fn new(bank: QuestionBank, settings: QuizSettings) -> Self {
        debug!(
            "[Quiz] New engine with {} questions, pass threshold {}%",
            bank.len(),
            settings.pass_threshold
        );
        Self {
            bank,
            settings,
            state: QuizState::default(),
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    pub fn phase(&self) -> Phase {
        if self.state.current_index < self.bank.len() {
            Phase::InProgress
        } else {
            Phase::Finished
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.state.current_index)
    }

    /// Records the selected option for the current question and moves on.
    ///
    /// Must only be called while the quiz is in progress: once finished this
    /// returns [`EngineError::AlreadyFinished`] and nothing is recorded.
    pub fn submit_answer(&mut self, option_text: &str, is_correct: bool) -> Result<(), EngineError> {
        if self.is_finished() {
            warn!("[Quiz] Answer {:?} submitted after the quiz finished", option_text);
            return Err(EngineError::AlreadyFinished);
        }

        let idx = self.state.current_index;
        self.state
            .answers_given
            .insert(idx, option_text.to_owned());
        if is_correct {
            self.state.score += 1;
            self.state.correct_indices.insert(idx);
        }
        self.state.current_index += 1;
        debug!(
            "[Quiz] Question {} answered {:?} (correct: {}), score {}",
            idx + 1,
            option_text,
            is_correct,
            self.state.score
        );

        if self.is_finished() {
            info!(
                "[Quiz] Finished with {}/{}",
                self.state.score,
                self.bank.len()
            );
        }
        Ok(())
    }

    /// Picks the option at `option_index` (zero based) of the current question.
    pub fn answer(&mut self, option_index: usize) -> Result<(), EngineError> {
        let question = self.current_question().ok_or(EngineError::AlreadyFinished)?;
        let option = question
            .options
            .get(option_index)
            .ok_or(EngineError::NoSuchOption {
                index: option_index,
                available: question.options.len(),
            })?;
        let (text, is_correct) = (option.text.clone(), option.is_correct);
        self.submit_answer(&text, is_correct)
    }

    pub fn restart(&mut self) {
        info!("[Quiz] Restarting");
        self.state = QuizState::default();
    }

    pub fn score_percentage(&self) -> f64 {
        100.0 * self.state.score as f64 / self.bank.len() as f64
    }

    pub fn passed(&self) -> bool {
        self.score_percentage() >= self.settings.pass_threshold
    }

    pub fn missed_questions(&self) -> Vec<MissedQuestion> {
        self.bank
            .questions()
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.state.correct_indices.contains(idx))
            .map(|(idx, question)| MissedQuestion {
                index: idx,
                question_text: question.text.clone(),
                user_answer: match self.state.answers_given.get(&idx) {
                    Some(text) => UserAnswer::Given(text.clone()),
                    None => UserAnswer::NotAnswered,
                },
                correct_answer: question
                    .correct_option()
                    .map(|opt| opt.text.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }

    pub fn current_state(&self) -> CurrentState<'_> {
        let total = self.bank.len();
        CurrentState {
            phase: self.phase(),
            current_question: self.current_question(),
            current_index_display: (self.state.current_index + 1).min(total),
            total_questions: total,
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            phase: self.phase(),
            score: self.state.score,
            total_questions: self.bank.len(),
            score_percentage: self.score_percentage(),
            passed: self.passed(),
            missed_questions: self.missed_questions(),
        }
    }
}
