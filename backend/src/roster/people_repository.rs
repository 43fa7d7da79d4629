use super::person::Person;
use sqlx::{SqliteConnection, SqlitePool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionCounts {
    pub submitted: i64,
    pub total: i64,
}

#[derive(Clone)]
pub struct PeopleRepository {
    pool: SqlitePool,
}

impl PeopleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn by_slug(&self, slug: &str) -> Result<Option<Person>, sqlx::Error> {
        sqlx::query_as("SELECT id, name, slug, submitted FROM people WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn by_id(&self, id: i64) -> Result<Option<Person>, sqlx::Error> {
        sqlx::query_as("SELECT id, name, slug, submitted FROM people WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn all_by_name(&self) -> Result<Vec<Person>, sqlx::Error> {
        sqlx::query_as("SELECT id, name, slug, submitted FROM people ORDER BY name")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn counts(&self) -> Result<SubmissionCounts, sqlx::Error> {
        let (submitted, total): (i64, i64) = sqlx::query_as(
            "SELECT COALESCE(SUM(submitted), 0), COUNT(*) FROM people",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(SubmissionCounts { submitted, total })
    }
}

/// Ids of everyone who has submitted, in id order
pub async fn submitted_ids(conn: &mut SqliteConnection) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM people WHERE submitted = 1 ORDER BY id")
        .fetch_all(conn)
        .await
}

pub async fn mark_submitted(conn: &mut SqliteConnection, person_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE people SET submitted = 1 WHERE id = ?")
        .bind(person_id)
        .execute(conn)
        .await?;
    Ok(())
}
