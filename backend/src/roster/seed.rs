use super::slug::{disambiguate, slugify};
use sqlx::SqlitePool;
use std::collections::HashSet;
use tracing::{debug, info};

pub const DEFAULT_ROSTER: &[&str] = &[
    "Adithya Manivannan",
    "Sarah Kassim",
    "Nisha Cyril",
    "Joshua Chand",
    "Kaustubh Rajimwale",
    "Ling Lin",
    "Sai Krishna Saravanan Nannapaneni",
    "Ethan Teoh",
    "Smriti Singh",
    "Elsa Mathew Samuel",
    "Harsha Munipalle",
    "Yigit Uyan",
    "Maedeh Khodaei",
    "Jared Brown",
    "James Hall",
    "Akshay Bharadwaj",
    "Brandon Hernacki",
    "Beau Babst",
    "Daniel Duck",
    "Fatimah Ali",
    "Gisselle Williams",
    "Sunanda Seshan",
];

/// Insert `names` into an empty roster. Returns how many people were added;
/// an already populated roster is left alone and yields 0.
pub async fn seed<S: AsRef<str>>(pool: &SqlitePool, names: &[S]) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM people")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        debug!(existing, "Roster already seeded");
        return Ok(0);
    }

    let mut slugs = HashSet::new();
    let mut inserted = 0;

    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }

        let slug = disambiguate(&slugify(name), |s| slugs.contains(s));
        let result = sqlx::query("INSERT OR IGNORE INTO people (name, slug) VALUES (?, ?)")
            .bind(name)
            .bind(&slug)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
            slugs.insert(slug);
        }
    }

    tx.commit().await?;
    info!(inserted, "Seeded roster");
    Ok(inserted)
}
