use super::derangement::Assignment;
use sqlx::{SqliteConnection, SqlitePool};

/// One row of the admin view of the current swap
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Pairing {
    pub from_name: String,
    pub to_name: String,
}

#[derive(Clone)]
pub struct AssignmentRepository {
    pool: SqlitePool,
}

impl AssignmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The person whose response `person_id` was assigned, if any
    pub async fn for_person(&self, person_id: i64) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT assigned_person_id FROM mapping WHERE person_id = ?")
            .bind(person_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn listing(&self) -> Result<Vec<Pairing>, sqlx::Error> {
        sqlx::query_as(
            "SELECT p.name AS from_name, q.name AS to_name
             FROM mapping m
             JOIN people p ON p.id = m.person_id
             JOIN people q ON q.id = m.assigned_person_id
             ORDER BY p.name",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn clear(&self) -> Result<u64, sqlx::Error> {
        clear(&mut *self.pool.acquire().await?).await
    }
}

pub async fn clear(conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM mapping").execute(conn).await?;
    Ok(result.rows_affected())
}

/// Drop the stored mapping and write `assignment` in its place.
/// Run inside a transaction so readers never see a half-written swap.
pub async fn replace(
    conn: &mut SqliteConnection,
    assignment: &Assignment<i64>,
) -> Result<(), sqlx::Error> {
    clear(&mut *conn).await?;

    for (from, to) in assignment.pairs() {
        sqlx::query("INSERT INTO mapping (person_id, assigned_person_id) VALUES (?, ?)")
            .bind(*from)
            .bind(*to)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}
