//! Quiz repository: questions and answers

use crate::database::DatabasePool;
use crate::models::{Answer, Question};
use crate::utils::errors::StepupError;

const ANSWER_COLUMNS: &str = "id, question_id, text, text_en, text_az, \
    weight_creative, weight_tech, weight_social, weight_business, weight_green";

#[derive(Clone)]
#[derive(Debug)]
pub struct QuizRepository {
    pool: DatabasePool,
}

impl QuizRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    pub async fn question_count(&self) -> Result<i64, StepupError> {
        super::content::count(&self.pool, "questions").await
    }

    /// Question at a zero-based position in the quiz
    pub async fn question_by_index(&self, order_idx: i64) -> Result<Option<Question>, StepupError> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, order_idx, text, text_en, text_az FROM questions WHERE order_idx = $1"
        )
        .bind(order_idx)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// Answers of a question in insertion order
    pub async fn answers_for_question(&self, question_id: i64) -> Result<Vec<Answer>, StepupError> {
        let answers = sqlx::query_as::<_, Answer>(&format!(
            "SELECT {ANSWER_COLUMNS} FROM answers WHERE question_id = $1 ORDER BY id"
        ))
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }

    pub async fn find_answer(&self, answer_id: i64) -> Result<Option<Answer>, StepupError> {
        let answer = sqlx::query_as::<_, Answer>(&format!(
            "SELECT {ANSWER_COLUMNS} FROM answers WHERE id = $1"
        ))
        .bind(answer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(answer)
    }

    pub async fn answer_count(&self) -> Result<i64, StepupError> {
        super::content::count(&self.pool, "answers").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::test_pool;

    #[tokio::test]
    async fn test_question_and_answers_lookup() {
        let pool = test_pool().await;
        let qid: (i64,) = sqlx::query_as(
            "INSERT INTO questions (order_idx, text, text_en) VALUES (0, 'Вопрос', 'Question') RETURNING id"
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO answers (question_id, text, weight_tech) VALUES ($1, 'Код', 2)")
            .bind(qid.0)
            .execute(&pool)
            .await
            .unwrap();

        let repo = QuizRepository::new(pool);
        assert_eq!(repo.question_count().await.unwrap(), 1);

        let question = repo.question_by_index(0).await.unwrap().unwrap();
        assert_eq!(question.text_for("en"), "Question");
        assert!(repo.question_by_index(1).await.unwrap().is_none());

        let answers = repo.answers_for_question(question.id).await.unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].weights().tech, 2);
        assert_eq!(answers[0].text_for("az"), "Код");

        let found = repo.find_answer(answers[0].id).await.unwrap().unwrap();
        assert_eq!(found.question_id, question.id);
        assert!(repo.find_answer(12345).await.unwrap().is_none());
    }
}
