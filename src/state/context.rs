//! Conversation context management
//!
//! A user has at most one pending session: a quiz in progress or a feedback
//! prompt waiting for text. Starting one replaces the other.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc, Duration};

use crate::models::{Answer, CategoryScores};
use crate::utils::errors::{StepupError, Result};

/// Progress through the quiz
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProgress {
    /// Zero-based index of the question currently shown
    pub question_index: i64,
    pub scores: CategoryScores,
}

impl QuizProgress {
    /// Add the answer's weights and move to the next question
    pub fn apply_answer(&mut self, answer: &Answer) {
        self.scores.add(&answer.weights());
        self.question_index += 1;
    }
}

/// What the bot is waiting for from the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Session {
    Quiz(QuizProgress),
    AwaitingFeedback,
}

impl Session {
    /// Scenario name stored next to the payload
    pub fn name(&self) -> &'static str {
        match self {
            Session::Quiz(_) => "quiz",
            Session::AwaitingFeedback => "feedback",
        }
    }
}

/// User conversation context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Telegram user ID this context belongs to
    pub user_id: i64,
    pub session: Session,
    /// When this context expires (for cleanup)
    pub expires_at: DateTime<Utc>,
    /// When this context was last updated
    pub updated_at: DateTime<Utc>,
}

impl ConversationContext {
    pub fn new(user_id: i64, session: Session, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            session,
            expires_at: now + ttl,
            updated_at: now,
        }
    }

    pub fn quiz_progress(&self) -> Option<&QuizProgress> {
        match &self.session {
            Session::Quiz(progress) => Some(progress),
            Session::AwaitingFeedback => None,
        }
    }

    /// Record an answer for the current question
    pub fn record_answer(&mut self, answer: &Answer) -> Result<&QuizProgress> {
        match &mut self.session {
            Session::Quiz(progress) => {
                progress.apply_answer(answer);
                self.updated_at = Utc::now();
                Ok(progress)
            }
            Session::AwaitingFeedback => Err(StepupError::InvalidStateTransition {
                from: "feedback".to_string(),
                to: "quiz_answer".to_string(),
            }),
        }
    }

    pub fn is_awaiting_feedback(&self) -> bool {
        matches!(self.session, Session::AwaitingFeedback)
    }

    /// Check if context has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Push the expiry forward from now
    pub fn touch(&mut self, ttl: Duration) {
        self.updated_at = Utc::now();
        self.expires_at = self.updated_at + ttl;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_id: i64, tech: i64, green: i64) -> Answer {
        Answer {
            id: 1,
            question_id,
            text: "ответ".to_string(),
            text_en: None,
            text_az: None,
            weight_creative: 0,
            weight_tech: tech,
            weight_social: 0,
            weight_business: 0,
            weight_green: green,
        }
    }

    #[test]
    fn test_start_quiz() {
        let context = ConversationContext::new(123, Session::Quiz(QuizProgress::default()), Duration::hours(1));
        assert_eq!(context.user_id, 123);
        assert_eq!(context.quiz_progress(), Some(&QuizProgress::default()));
        assert!(!context.is_expired());
    }

    #[test]
    fn test_record_answer_advances() {
        let mut context = ConversationContext::new(1, Session::Quiz(QuizProgress::default()), Duration::hours(1));
        context.record_answer(&answer(1, 2, 0)).unwrap();
        let progress = context.record_answer(&answer(2, 1, 2)).unwrap();

        assert_eq!(progress.question_index, 2);
        assert_eq!(progress.scores, CategoryScores::new(0, 3, 0, 0, 2));
    }

    #[test]
    fn test_answer_rejected_while_awaiting_feedback() {
        let mut context = ConversationContext::new(1, Session::AwaitingFeedback, Duration::hours(1));
        assert!(context.is_awaiting_feedback());
        assert!(context.record_answer(&answer(1, 1, 0)).is_err());
    }

    #[test]
    fn test_expiry() {
        let mut context = ConversationContext::new(1, Session::AwaitingFeedback, Duration::seconds(-5));
        assert!(context.is_expired());
        context.touch(Duration::minutes(5));
        assert!(!context.is_expired());
    }

    #[test]
    fn test_session_serialization() {
        let session = Session::Quiz(QuizProgress {
            question_index: 3,
            scores: CategoryScores::new(1, 0, 0, 0, 0),
        });
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["kind"], "quiz");
        assert_eq!(json["question_index"], 3);

        let feedback: Session = serde_json::from_str(r#"{"kind":"awaiting_feedback"}"#).unwrap();
        assert_eq!(feedback, Session::AwaitingFeedback);
        assert_eq!(feedback.name(), "feedback");
    }
}
