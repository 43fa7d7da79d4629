use super::templates::{IndexPage, LinkRow, LinksPage, render};
use crate::AppState;
use crate::error::Result;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse};

pub async fn health() -> &'static str {
    "ok"
}

pub async fn home() -> Result<Html<String>> {
    render(&IndexPage)
}

pub async fn links(State(state): State<AppState>, headers: HeaderMap) -> Result<Html<String>> {
    let rows = link_rows(&state, &headers).await?;
    render(&LinksPage { rows })
}

pub async fn links_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let rows = link_rows(&state, &headers).await?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Name", "Link"])?;
    for row in &rows {
        writer.write_record([&row.name, &row.link])?;
    }
    let body = writer
        .into_inner()
        .map_err(|err| crate::AppError::Internal(err.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=links.csv"),
        ],
        body,
    ))
}

async fn link_rows(state: &AppState, headers: &HeaderMap) -> Result<Vec<LinkRow>> {
    let base = base_url(state.public_url.as_deref(), headers);
    let people = state.people.all_by_name().await?;

    Ok(people
        .into_iter()
        .map(|person| LinkRow {
            link: format!("{base}/{}", person.slug),
            name: person.name,
        })
        .collect())
}

/// Public origin for generated links, without a trailing slash
fn base_url(public_url: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(url) = public_url {
        return url.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{host}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn public_url_wins_over_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("internal:3000"));

        assert_eq!(
            base_url(Some("https://swap.example.com/"), &headers),
            "https://swap.example.com"
        );
    }

    #[test]
    fn host_header_is_used_without_public_url() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("127.0.0.1:3000"));

        assert_eq!(base_url(None, &headers), "http://127.0.0.1:3000");
    }

    #[test]
    fn missing_host_falls_back_to_localhost() {
        assert_eq!(base_url(None, &HeaderMap::new()), "http://localhost");
    }
}
