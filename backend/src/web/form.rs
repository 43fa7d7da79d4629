use super::templates::{FormPage, ThanksPage, ViewPage, render};
use crate::AppState;
use crate::error::{AppError, Result};
use crate::responses::{MISSING_SECTIONS_MESSAGE, SelfAssessment};
use crate::roster::Person;
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, info};

pub async fn show(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Response> {
    let person = find_person(&state, &slug).await?;

    if let Some(page) = swapped_view(&state, &person).await? {
        return Ok(page.into_response());
    }

    let page = match state.responses.for_person(person.id).await? {
        Some(answers) => render(&ViewPage {
            viewer: person.clone(),
            owner: person,
            answers,
            mapped: false,
        })?,
        None => render(&FormPage {
            person,
            answers: SelfAssessment::default(),
            error: None,
        })?,
    };

    Ok(page.into_response())
}

pub async fn submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(answers): Form<SelfAssessment>,
) -> Result<Response> {
    let person = find_person(&state, &slug).await?;

    if let Some(page) = swapped_view(&state, &person).await? {
        debug!(person_id = person.id, "Ignoring submission after swap");
        return Ok(page.into_response());
    }

    let answers = answers.trimmed();
    if !answers.is_complete() {
        info!(person_id = person.id, "Incomplete submission");
        let page = render(&FormPage {
            person,
            answers,
            error: Some(MISSING_SECTIONS_MESSAGE),
        })?;
        return Ok(page.into_response());
    }

    state.responses.upsert(person.id, &answers).await?;

    Ok(render(&ThanksPage { person })?.into_response())
}

async fn find_person(state: &AppState, slug: &str) -> Result<Person> {
    state.people.by_slug(slug).await?.ok_or(AppError::NotFound)
}

/// Once a swap exists, a person's link shows the response they were assigned
async fn swapped_view(state: &AppState, viewer: &Person) -> Result<Option<Html<String>>> {
    let Some(assigned_id) = state.assignments.for_person(viewer.id).await? else {
        return Ok(None);
    };
    let Some(owner) = state.people.by_id(assigned_id).await? else {
        return Ok(None);
    };
    let Some(answers) = state.responses.for_person(owner.id).await? else {
        return Ok(None);
    };

    let page = render(&ViewPage {
        viewer: viewer.clone(),
        owner,
        answers,
        mapped: true,
    })?;
    Ok(Some(page))
}
