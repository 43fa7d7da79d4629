mod admin;
mod form;
mod notice;
mod pages;
mod templates;

use crate::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(pages::health))
        .route("/links", get(pages::links))
        .route("/links.csv", get(pages::links_csv))
        .route("/admin", get(admin::dashboard))
        .route("/admin/generate_mapping", post(admin::generate_mapping))
        .route("/admin/reset", post(admin::reset))
        .route("/:slug", get(form::show).post(form::submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
