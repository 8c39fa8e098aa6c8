use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn correct(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            is_correct: true,
        }
    }

    pub fn incorrect(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            is_correct: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(text: &str, options: Vec<AnswerOption>) -> Self {
        Self {
            text: text.to_owned(),
            options,
        }
    }

    /// The single correct option. Only guaranteed to be `Some` once the
    /// question went through [`QuestionBank::new`].
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|opt| opt.is_correct)
    }

    fn validate(&self, index: usize) -> Result<(), BankError> {
        if self.options.is_empty() {
            return Err(BankError::NoOptions { question: index });
        }
        match self.options.iter().filter(|opt| opt.is_correct).count() {
            0 => Err(BankError::NoCorrectOption { question: index }),
            1 => Ok(()),
            count => Err(BankError::MultipleCorrectOptions {
                question: index,
                count,
            }),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("the question bank is empty")]
    Empty,
    #[error("question {question} has no options")]
    NoOptions { question: usize },
    #[error("question {question} has no correct option")]
    NoCorrectOption { question: usize },
    #[error("question {question} has {count} correct options, expected exactly one")]
    MultipleCorrectOptions { question: usize, count: usize },
}

/// An ordered, non-empty list of questions, each with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        for (idx, question) in questions.iter().enumerate() {
            question.validate(idx)?;
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
