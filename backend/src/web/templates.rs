use crate::AppError;
use crate::responses::SelfAssessment;
use crate::roster::{Person, SubmissionCounts};
use crate::swap::Pairing;
use askama::Template;
use axum::response::Html;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage;

pub struct LinkRow {
    pub name: String,
    pub link: String,
}

#[derive(Template)]
#[template(path = "links.html")]
pub struct LinksPage {
    pub rows: Vec<LinkRow>,
}

#[derive(Template)]
#[template(path = "form.html")]
pub struct FormPage {
    pub person: Person,
    pub answers: SelfAssessment,
    pub error: Option<&'static str>,
}

/// Read-only answers: the viewer's own before the swap, someone else's after
#[derive(Template)]
#[template(path = "view.html")]
pub struct ViewPage {
    pub viewer: Person,
    pub owner: Person,
    pub answers: SelfAssessment,
    pub mapped: bool,
}

#[derive(Template)]
#[template(path = "thanks.html")]
pub struct ThanksPage {
    pub person: Person,
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminPage {
    pub people: Vec<Person>,
    pub counts: SubmissionCounts,
    pub mapping: Vec<Pairing>,
    pub notice: Option<&'static str>,
}

pub fn render<T: Template>(page: &T) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}
