pub mod config;
pub mod db;
mod error;
pub mod responses;
pub mod roster;
pub mod swap;
mod web;

pub use error::AppError;

use axum::Router;
use responses::ResponseRepository;
use roster::PeopleRepository;
use sqlx::SqlitePool;
use std::sync::Arc;
use swap::{AssignmentRepository, SwapService};

#[derive(Clone)]
pub struct AppState {
    pub people: PeopleRepository,
    pub responses: ResponseRepository,
    pub assignments: AssignmentRepository,
    pub swap: Arc<SwapService>,
    pub public_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(pool: SqlitePool, public_url: Option<String>) -> Self {
        Self {
            people: PeopleRepository::new(pool.clone()),
            responses: ResponseRepository::new(pool.clone()),
            assignments: AssignmentRepository::new(pool.clone()),
            swap: Arc::new(SwapService::new(pool)),
            public_url: public_url.map(Arc::from),
        }
    }
}

pub fn app(pool: SqlitePool) -> Router {
    app_with_config(pool, None)
}

pub fn app_with_config(pool: SqlitePool, public_url: Option<String>) -> Router {
    web::router(AppState::new(pool, public_url))
}
