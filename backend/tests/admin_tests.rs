mod common;

use common::*;

async fn post(server: &TestServer, path: &str) -> (reqwest::StatusCode, String) {
    let response = reqwest::Client::new()
        .post(server.url(path))
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn dashboard_lists_people_and_counts() {
    let server = spawn_test_server().await;
    server.submit_directly("ann_lee").await;

    let (status, body) = get_text(&server.url("/admin")).await;

    assert!(status.is_success());
    assert!(body.contains("1 of 4 submitted"));
    for name in ROSTER {
        assert!(body.contains(name), "missing {name}");
    }
    assert!(body.contains("No mapping yet."));
}

#[tokio::test]
async fn generate_without_submissions_reports_not_enough() {
    let server = spawn_test_server().await;
    server.submit_directly("ann_lee").await;

    let (status, body) = post(&server, "/admin/generate_mapping").await;

    assert!(status.is_success());
    assert!(body.contains("Need at least 2 submissions to generate a swap."));
    assert!(mapping(&server.pool).await.is_empty());
}

#[tokio::test]
async fn generate_redirects_to_admin() {
    let server = spawn_test_server().await;
    server.submit_directly("ann_lee").await;
    server.submit_directly("bo_chen").await;

    let response = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
        .post(server.url("/admin/generate_mapping"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[reqwest::header::LOCATION],
        "/admin?notice=generated"
    );
}

#[tokio::test]
async fn generate_stores_a_derangement_of_submitters() {
    let server = spawn_test_server().await;
    for slug in ["ann_lee", "bo_chen", "cy_diaz"] {
        server.submit_directly(slug).await;
    }

    let (_, body) = post(&server, "/admin/generate_mapping").await;
    assert!(body.contains("Mapping generated."));

    let pairs = mapping(&server.pool).await;
    assert_eq!(pairs.len(), 3);

    let not_submitted = server.person("di_evans").await.id;
    let mut targets: Vec<i64> = pairs.iter().map(|(_, to)| *to).collect();
    let mut sources: Vec<i64> = pairs.iter().map(|(from, _)| *from).collect();
    targets.sort();
    sources.sort();
    assert_eq!(sources, targets);
    assert!(!sources.contains(&not_submitted));
    for (from, to) in pairs {
        assert_ne!(from, to);
    }

    assert!(!body.contains("No mapping yet."));
}

#[tokio::test]
async fn reset_clears_mapping() {
    let server = spawn_test_server().await;
    server.submit_directly("ann_lee").await;
    server.submit_directly("bo_chen").await;
    post(&server, "/admin/generate_mapping").await;
    assert_eq!(mapping(&server.pool).await.len(), 2);

    let (_, body) = post(&server, "/admin/reset").await;

    assert!(body.contains("Mapping cleared."));
    assert!(mapping(&server.pool).await.is_empty());

    let (_, ann_page) = get_text(&server.url("/ann_lee")).await;
    assert!(ann_page.contains("your answers are in"));
}

#[tokio::test]
async fn unknown_notice_is_ignored() {
    let server = spawn_test_server().await;

    let (status, body) = get_text(&server.url("/admin?notice=bogus")).await;

    assert!(status.is_success());
    assert!(!body.contains(r#"class="notice""#));
}
