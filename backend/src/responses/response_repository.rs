use super::self_assessment::SelfAssessment;
use crate::roster::mark_submitted;
use sqlx::SqlitePool;
use tracing::info;

#[derive(Clone)]
pub struct ResponseRepository {
    pool: SqlitePool,
}

impl ResponseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn for_person(&self, person_id: i64) -> Result<Option<SelfAssessment>, sqlx::Error> {
        sqlx::query_as(
            "SELECT hard_skills, soft_skills, areas_to_grow, in_5_years, fun_fact, superpower
             FROM responses WHERE person_id = ?",
        )
        .bind(person_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Store (or overwrite) a person's answers and mark them as submitted
    pub async fn upsert(&self, person_id: i64, answers: &SelfAssessment) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO responses
                (person_id, hard_skills, soft_skills, areas_to_grow, in_5_years, fun_fact, superpower)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(person_id) DO UPDATE SET
                hard_skills = excluded.hard_skills,
                soft_skills = excluded.soft_skills,
                areas_to_grow = excluded.areas_to_grow,
                in_5_years = excluded.in_5_years,
                fun_fact = excluded.fun_fact,
                superpower = excluded.superpower",
        )
        .bind(person_id)
        .bind(&answers.hard_skills)
        .bind(&answers.soft_skills)
        .bind(&answers.areas_to_grow)
        .bind(&answers.in_5_years)
        .bind(&answers.fun_fact)
        .bind(&answers.superpower)
        .execute(&mut *tx)
        .await?;

        mark_submitted(&mut *tx, person_id).await?;

        tx.commit().await?;
        info!(person_id, "Response saved");
        Ok(())
    }
}
