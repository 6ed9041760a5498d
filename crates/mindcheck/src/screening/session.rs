use super::answers::AnswerSet;
use super::assessment::Assessment;
use super::questionnaire::{
    Category, CategorySection, QuestionId, Questionnaire, UnknownQuestion, OPTIONS_PER_QUESTION,
};
use super::scoring::ScoringEngine;

/// Errors raised while collecting answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    UnknownQuestion(#[from] UnknownQuestion),
    #[error("'{question}' has no option {value}")]
    InvalidOption { question: QuestionId, value: i64 },
    #[error("'{question}' belongs to {expected:?}, current section is {current:?}")]
    OutsideCurrentSection {
        question: QuestionId,
        expected: Category,
        current: Category,
    },
    #[error("cannot submit with {remaining} section(s) still ahead")]
    Unfinished { remaining: usize },
}

/// Outcome of moving forward through the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    Section(Category),
    ReadyToSubmit,
}

/// Sequential walk through the questionnaire sections for a single respondent.
///
/// Answers are only accepted for the section on screen. Submission consumes the
/// session so the collected answer set is scored exactly once.
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    questionnaire: Questionnaire,
    engine: ScoringEngine,
    answers: AnswerSet,
    current: usize,
}

impl Default for QuestionnaireSession {
    fn default() -> Self {
        Self::new(Questionnaire::standard(), ScoringEngine::standard())
    }
}

impl QuestionnaireSession {
    pub fn new(questionnaire: Questionnaire, engine: ScoringEngine) -> Self {
        Self {
            questionnaire,
            engine,
            answers: AnswerSet::new(),
            current: 0,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_section(&self) -> Option<&CategorySection> {
        self.questionnaire.section(self.current)
    }

    fn current_category(&self) -> Option<Category> {
        self.current_section().map(|section| section.category)
    }

    pub fn is_last_section(&self) -> bool {
        self.current + 1 >= self.questionnaire.len()
    }

    /// Share of sections reached, counting the current one.
    pub fn progress_pct(&self) -> f64 {
        if self.questionnaire.is_empty() {
            return 100.0;
        }
        (self.current + 1) as f64 / self.questionnaire.len() as f64 * 100.0
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Record an answer for the current section, returning the value it replaced.
    pub fn answer(&mut self, question_id: &str, value: i64) -> Result<Option<i64>, SessionError> {
        let question: QuestionId = question_id.parse()?;

        if !(0..OPTIONS_PER_QUESTION as i64).contains(&value) {
            return Err(SessionError::InvalidOption { question, value });
        }

        if let Some(current) = self.current_category() {
            if question.category() != current {
                return Err(SessionError::OutsideCurrentSection {
                    question,
                    expected: question.category(),
                    current,
                });
            }
        }

        Ok(self.answers.record(question.as_str(), value))
    }

    pub fn advance(&mut self) -> SessionStep {
        if self.is_last_section() {
            return SessionStep::ReadyToSubmit;
        }

        self.current += 1;
        match self.current_category() {
            Some(category) => SessionStep::Section(category),
            None => SessionStep::ReadyToSubmit,
        }
    }

    /// Step back one section; stays put on the first.
    pub fn back(&mut self) -> Option<Category> {
        self.current = self.current.saturating_sub(1);
        self.current_category()
    }

    /// Score the collected answers. Unanswered questions are allowed and score zero.
    pub fn submit(self) -> Result<Assessment, SessionError> {
        if !self.is_last_section() {
            let remaining = self.questionnaire.len() - self.current - 1;
            return Err(SessionError::Unfinished { remaining });
        }

        Ok(Assessment::from_answers(&self.engine, &self.answers))
    }
}
