mod common;

use axum::http::StatusCode;
use link_registry::error::STACK_PLACEHOLDER;
use serde_json::json;

#[tokio::test]
async fn test_full_link_lifecycle() {
    let (server, _repo) = common::app_server(false);

    let created = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    created.assert_status_ok();

    let json = created.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com");
    let slug = json["slug"].as_str().unwrap().to_string();
    assert_eq!(slug.len(), 5);

    let redirect = server.get(&format!("/{slug}")).await;
    redirect.assert_status(StatusCode::FOUND);
    assert_eq!(redirect.header("location"), "https://example.com");

    let deleted = server.delete(&format!("/{slug}")).await;
    deleted.assert_status_ok();
    deleted.assert_json(&json!({ "message": "Delete successful" }));

    let gone = server.get(&format!("/{slug}")).await;
    gone.assert_status_not_found();
}

#[tokio::test]
async fn test_every_created_link_redirects() {
    let (server, _repo) = common::app_server(false);

    for url in [
        "https://example.com/über",
        "http://example.com/path?q=a%20b#frag",
        "https://sub.example.com:8443/",
    ] {
        let created = server.post("/url").json(&json!({ "url": url })).await;
        created.assert_status_ok();
        let slug = created.json::<serde_json::Value>()["slug"]
            .as_str()
            .unwrap()
            .to_string();

        let redirect = server.get(&format!("/{slug}")).await;
        redirect.assert_status(StatusCode::FOUND);
        assert_eq!(redirect.header("location"), url);
    }
}

#[tokio::test]
async fn test_static_index_is_served_at_root() {
    let (server, _repo) = common::app_server(false);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("<form"));
}

#[tokio::test]
async fn test_static_file_takes_priority_over_slug() {
    let (server, repo) = common::app_server(false);
    common::create_test_link(&repo, "index.html", "https://example.com").await;

    let response = server.get("/index.html").await;

    response.assert_status_ok();
    assert!(response.text().contains("<form"));
}

#[tokio::test]
async fn test_api_reachable_behind_static_files() {
    let (server, repo) = common::app_server(false);
    common::create_test_link(&repo, "abc", "https://example.com").await;

    server.get("/urls").await.assert_status_ok();
    server.get("/url/abc").await.assert_status_ok();
    server.delete("/abc").await.assert_status_ok();
    server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_error_stack_hidden_in_production() {
    let (server, _repo) = common::app_server(false);

    let response = server.get("/url/missing").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Slug not found");
    assert_eq!(json["stack"], STACK_PLACEHOLDER);
}

#[tokio::test]
async fn test_error_stack_exposed_outside_production() {
    let (server, _repo) = common::app_server(true);

    let response = server.get("/url/missing").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Slug not found");
    let stack = json["stack"].as_str().unwrap();
    assert_ne!(stack, STACK_PLACEHOLDER);
    assert!(stack.contains("NotFound"));
}

#[tokio::test]
async fn test_conflict_status_through_full_router() {
    let (server, repo) = common::app_server(true);
    common::create_test_link(&repo, "dup", "https://example.com").await;

    let response = server
        .post("/url")
        .json(&json!({ "slug": "dup", "url": "https://other.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Slug in use.");
    assert!(json["stack"].as_str().unwrap().contains("Conflict"));
}

#[tokio::test]
async fn test_security_headers_present() {
    let (server, _repo) = common::app_server(false);

    let response = server.get("/urls").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "SAMEORIGIN");
    assert_eq!(response.header("referrer-policy"), "no-referrer");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (server, _repo) = common::app_server(false);

    let response = server
        .get("/urls")
        .add_header("Origin", "https://elsewhere.example")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
