//! Quiz engine
//!
//! Drives a user through the questions, accumulates category scores in the
//! session and stores the final scores on the user.

use tracing::{debug, info};
use crate::database::DatabaseService;
use crate::i18n::{params, I18n};
use crate::models::{Answer, CategoryScores, Question};
use crate::state::{ConversationContext, Session, QuizProgress, StateStorage};
use crate::utils::errors::Result;
use crate::utils::helpers::{percentage, score_bar};
use crate::utils::logging::log_quiz_event;

const BAR_LENGTH: usize = 10;

/// A question ready to be shown
#[derive(Debug, Clone)]
pub struct QuestionView {
    pub question: Question,
    pub answers: Vec<Answer>,
    /// Zero-based position of the question
    pub index: i64,
    pub total: i64,
}

/// Outcome of a quiz action
#[derive(Debug, Clone)]
pub enum QuizStep {
    /// No questions are configured
    Unavailable,
    Question(QuestionView),
    Finished(CategoryScores),
    /// The user has no quiz in progress
    Expired,
    /// The answer does not belong to the current question
    Ignored,
    /// No answer with that id exists
    UnknownAnswer,
}

#[derive(Debug, Clone)]
pub struct QuizService {
    db: DatabaseService,
    storage: StateStorage,
}

impl QuizService {
    pub fn new(db: DatabaseService, storage: StateStorage) -> Self {
        Self { db, storage }
    }

    /// Start a fresh quiz, replacing any pending session
    pub async fn start(&self, user_id: i64) -> Result<QuizStep> {
        if self.db.quiz.question_count().await? == 0 {
            return Ok(QuizStep::Unavailable);
        }

        let context = self
            .storage
            .start_session(user_id, Session::Quiz(QuizProgress::default()))
            .await?;
        log_quiz_event(user_id, "started", Some(0));

        self.advance(context).await
    }

    /// Apply an answer and return what to show next
    pub async fn answer(&self, user_id: i64, answer_id: i64) -> Result<QuizStep> {
        let answer = match self.db.quiz.find_answer(answer_id).await? {
            Some(answer) => answer,
            None => return Ok(QuizStep::UnknownAnswer),
        };

        let mut context = match self.storage.load_context(user_id).await? {
            Some(context) if context.quiz_progress().is_some() => context,
            _ => return Ok(QuizStep::Expired),
        };

        let index = context.quiz_progress().map(|p| p.question_index).unwrap_or_default();
        if let Some(current) = self.db.quiz.question_by_index(index).await? {
            if current.id != answer.question_id {
                debug!(user_id = user_id, answer_id = answer_id, index = index, "Answer for another question ignored");
                return Ok(QuizStep::Ignored);
            }
            context.record_answer(&answer)?;
            context.touch(self.storage.ttl());
            self.storage.save_context(&context).await?;
            log_quiz_event(user_id, "answered", Some(index));
        }

        self.advance(context).await
    }

    /// Show the question at the session's index, or finish when there is none
    async fn advance(&self, context: ConversationContext) -> Result<QuizStep> {
        let progress = match context.quiz_progress() {
            Some(progress) => progress.clone(),
            None => return Ok(QuizStep::Expired),
        };

        match self.db.quiz.question_by_index(progress.question_index).await? {
            Some(question) => {
                let answers = self.db.quiz.answers_for_question(question.id).await?;
                let total = self.db.quiz.question_count().await?;
                Ok(QuizStep::Question(QuestionView {
                    question,
                    answers,
                    index: progress.question_index,
                    total,
                }))
            }
            None => self.finish(context.user_id, progress.scores).await,
        }
    }

    async fn finish(&self, user_id: i64, scores: CategoryScores) -> Result<QuizStep> {
        self.db.users.save_test_scores(user_id, &scores).await?;
        self.storage.delete_context(user_id).await?;
        info!(user_id = user_id, top = %scores.top(), total = scores.total(), "Quiz finished");
        Ok(QuizStep::Finished(scores))
    }
}

/// Render quiz results as Telegram HTML.
///
/// Categories are listed by score with a bar scaled to the leader. The
/// runner-up is mentioned when it trails the leader by at most one point.
pub fn format_results(scores: &CategoryScores, lang: &str, i18n: &I18n) -> String {
    let ranked = scores.ranked();
    let max_value = ranked[0].1.max(1);
    let total = scores.total();

    let mut parts = vec![format!("<b>{}</b>\n", i18n.t("quiz.results_title", lang, None))];
    for (category, value) in &ranked {
        parts.push(format!(
            "{}: {}  <i>({}%)</i>\n{}",
            i18n.category_title(*category, lang),
            value,
            percentage(*value, total),
            score_bar(*value, max_value, BAR_LENGTH)
        ));
    }

    let (leader, leader_score) = ranked[0];
    let mut resume = vec![format!(
        "{} <b>{}</b>.",
        i18n.t("quiz.closest", lang, None),
        i18n.category_title(leader, lang)
    )];
    let (runner_up, runner_up_score) = ranked[1];
    if leader_score - runner_up_score <= 1 {
        resume.push(format!(
            "{} <b>{}</b>.",
            i18n.t("quiz.also_close", lang, None),
            i18n.category_title(runner_up, lang)
        ));
    }
    parts.push(resume.join("\n"));

    parts.join("\n\n")
}

/// Header line shown above a question
pub fn question_header(view: &QuestionView, lang: &str, i18n: &I18n) -> String {
    let current = (view.index + 1).to_string();
    let total = view.total.to_string();
    i18n.t("quiz.question", lang, Some(&params(&[("current", &current), ("total", &total)])))
}
