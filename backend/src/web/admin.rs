use super::notice::Notice;
use super::templates::{AdminPage, render};
use crate::AppState;
use crate::error::Result;
use crate::swap::SwapError;
use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    notice: Option<String>,
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Html<String>> {
    let people = state.people.all_by_name().await?;
    let counts = state.people.counts().await?;
    let mapping = state.assignments.listing().await?;
    let notice = query
        .notice
        .as_deref()
        .and_then(Notice::from_code)
        .map(Notice::message);

    render(&AdminPage {
        people,
        counts,
        mapping,
        notice,
    })
}

pub async fn generate_mapping(State(state): State<AppState>) -> Result<Redirect> {
    info!("Admin requested mapping generation");

    let notice = match state.swap.generate().await {
        Ok(_) => Notice::Generated,
        Err(SwapError::NotEnoughSubmissions { .. }) => Notice::NotEnough,
        Err(SwapError::Generation(_)) => Notice::Failed,
        Err(SwapError::Db(err)) => return Err(err.into()),
    };

    Ok(Redirect::to(&notice.redirect_target()))
}

pub async fn reset(State(state): State<AppState>) -> Result<Redirect> {
    info!("Admin requested mapping reset");

    state.swap.reset().await?;
    Ok(Redirect::to(&Notice::Cleared.redirect_target()))
}
