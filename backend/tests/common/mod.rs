#![allow(dead_code)]

use skillswap::responses::{ResponseRepository, SelfAssessment};
use skillswap::roster::{PeopleRepository, Person, seed};
use sqlx::SqlitePool;
use tokio::net::TcpListener;

pub const ROSTER: &[&str] = &["Ann Lee", "Bo Chen", "Cy Diaz", "Di Evans"];

pub struct TestServer {
    pub pool: SqlitePool,
    base_url: String,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn person(&self, slug: &str) -> Person {
        PeopleRepository::new(self.pool.clone())
            .by_slug(slug)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("no person with slug {slug}"))
    }

    /// Store answers for `slug` directly, bypassing the form
    pub async fn submit_directly(&self, slug: &str) {
        let person = self.person(slug).await;
        ResponseRepository::new(self.pool.clone())
            .upsert(person.id, &answers_for(&person.name))
            .await
            .unwrap();
    }
}

pub async fn spawn_test_server() -> TestServer {
    spawn_test_server_with_public_url(None).await
}

pub async fn spawn_test_server_with_public_url(public_url: Option<&str>) -> TestServer {
    let pool = skillswap::db::memory_pool().await.unwrap();
    seed(&pool, ROSTER).await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = skillswap::app_with_config(pool.clone(), public_url.map(str::to_string));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        pool,
        base_url: format!("http://{}", addr),
    }
}

pub fn answers_for(name: &str) -> SelfAssessment {
    SelfAssessment {
        hard_skills: format!("{name} writes SQL"),
        soft_skills: format!("{name} listens well"),
        areas_to_grow: format!("{name} wants to present more"),
        in_5_years: String::new(),
        fun_fact: format!("{name} keeps bees"),
        superpower: String::new(),
    }
}

pub fn form_fields(answers: &SelfAssessment) -> Vec<(&'static str, String)> {
    vec![
        ("hard_skills", answers.hard_skills.clone()),
        ("soft_skills", answers.soft_skills.clone()),
        ("areas_to_grow", answers.areas_to_grow.clone()),
        ("in_5_years", answers.in_5_years.clone()),
        ("fun_fact", answers.fun_fact.clone()),
        ("superpower", answers.superpower.clone()),
    ]
}

pub async fn get_text(url: &str) -> (reqwest::StatusCode, String) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

pub async fn post_form(url: &str, fields: &[(&str, String)]) -> (reqwest::StatusCode, String) {
    let response = reqwest::Client::new()
        .post(url)
        .form(fields)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

pub async fn mapping(pool: &SqlitePool) -> Vec<(i64, i64)> {
    sqlx::query_as("SELECT person_id, assigned_person_id FROM mapping ORDER BY person_id")
        .fetch_all(pool)
        .await
        .unwrap()
}
