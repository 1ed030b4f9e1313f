//! Integration tests for favorites.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_favorite_lifecycle() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let empty = app.request("GET", "/api/favorites", None, Some(&token)).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body["data"], serde_json::json!([]));

    let check = app
        .request("GET", "/api/favorites/check/job-5", None, Some(&token))
        .await;
    assert_eq!(check.body["data"]["isFavorite"], false);

    let added = app
        .request("POST", "/api/favorites/job-5", None, Some(&token))
        .await;
    assert_eq!(added.status, StatusCode::OK);
    assert_eq!(added.body["data"]["jobId"], "job-5");

    let check = app
        .request("GET", "/api/favorites/check/job-5", None, Some(&token))
        .await;
    assert_eq!(check.body["data"]["isFavorite"], true);

    let list = app.request("GET", "/api/favorites", None, Some(&token)).await;
    let favorites = list.body["data"].as_array().expect("favorites array");
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["job"]["id"], "job-5");

    let removed = app
        .request("DELETE", "/api/favorites/job-5", None, Some(&token))
        .await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.body, serde_json::json!({ "success": true }));

    let removed_again = app
        .request("DELETE", "/api/favorites/job-5", None, Some(&token))
        .await;
    assert_eq!(removed_again.status, StatusCode::NOT_FOUND);
    assert_eq!(removed_again.body["error"], "お気に入りが見つかりません");
}

#[tokio::test]
async fn test_add_favorite_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let first = app
        .request("POST", "/api/favorites/job-2", None, Some(&token))
        .await;
    let second = app
        .request("POST", "/api/favorites/job-2", None, Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body["data"]["id"], second.body["data"]["id"]);

    let list = app.request("GET", "/api/favorites", None, Some(&token)).await;
    assert_eq!(list.body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_favorite_unknown_job() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request("POST", "/api/favorites/job-9999", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "求人が見つかりません");
}

#[tokio::test]
async fn test_favorites_require_auth() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/api/favorites/job-1", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
