//! HTTP endpoint tests using axum-test
//!
//! Each test gets its own data file in a temporary directory.

use axum::http::StatusCode;
use axum_test::TestServer;
use casebook_core::{Article, ArticleStore};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::api::ADDED_MESSAGE;
use crate::error::NOT_FOUND_BODY;
use crate::router;
use crate::state::AppState;

/// Create a test server backed by `articles.json` under a fresh directory
fn create_test_server() -> (TestServer, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = ArticleStore::at(dir.path().join("data").join("articles.json"));
    let server = TestServer::new(router(AppState::new(store))).unwrap();
    (server, dir)
}

fn store_in(dir: &TempDir) -> ArticleStore {
    ArticleStore::at(dir.path().join("data").join("articles.json"))
}

#[tokio::test]
async fn test_health_returns_200() {
    let (server, _dir) = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "casebook-server");
}

#[tokio::test]
async fn test_list_is_empty_without_data_file() {
    let (server, _dir) = create_test_server();
    let response = server.get("/").await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["count"], 0);
    assert_eq!(json["articles"], json!([]));
    assert_eq!(json["notice"], Value::Null);
}

#[tokio::test]
async fn test_add_form_describes_fields() {
    let (server, _dir) = create_test_server();
    let response = server.get("/add").await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    let scalars = json["scalar_fields"].as_array().unwrap();
    assert!(scalars.contains(&json!("title")));
    assert!(scalars.contains(&json!("ruling")));
    assert_eq!(json["groups"][0]["count_field"], "judge_count");
    assert_eq!(json["groups"][1]["count_field"], "timeline_count");
}

#[tokio::test]
async fn test_submission_with_blank_second_judge() {
    let (server, dir) = create_test_server();

    let response = server
        .post("/add")
        .form(&[
            ("title", "State v. Smith"),
            ("judge_count", "2"),
            ("judge_name_0", "A. Smith"),
            ("judge_initials_0", "AS"),
            ("judge_name_1", ""),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/?notice=added");

    let stored = store_in(&dir).load().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].judges.len(), 1);
    assert_eq!(stored[0].judges[0].name, "A. Smith");
    assert_eq!(stored[0].judges[0].initials, "AS");
    assert_eq!(stored[0].judges[0].opinion, "yes");

    let response = server.get("/article/0").await;
    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["id"], 0);
    assert_eq!(json["article"]["title"], "State v. Smith");
    assert_eq!(
        json["article"]["judges"],
        json!([{ "name": "A. Smith", "initials": "AS", "opinion": "yes" }])
    );

    let response = server.get("/article/1").await;
    response.assert_status_not_found();
    assert_eq!(response.text(), NOT_FOUND_BODY);
}

#[tokio::test]
async fn test_missing_ruling_persists_as_empty_string() {
    let (server, dir) = create_test_server();

    server
        .post("/add")
        .form(&[("title", "Untitled ruling")])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let text = std::fs::read_to_string(dir.path().join("data").join("articles.json")).unwrap();
    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json[0]["ruling"], "");
    assert_eq!(json[0]["verdict_points"], json!([]));
}

#[tokio::test]
async fn test_multiline_fields_are_split() {
    let (server, dir) = create_test_server();

    server
        .post("/add")
        .form(&[
            ("acts", "A\n\nB \n  \nC"),
            ("citations", "(1973) 4 SCC 225\r\n\r\nAIR 1973 SC 1461"),
        ])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let stored = store_in(&dir).load().unwrap();
    assert_eq!(stored[0].acts, vec!["A", "B", "C"]);
    assert_eq!(stored[0].citations, vec!["(1973) 4 SCC 225", "AIR 1973 SC 1461"]);
}

#[tokio::test]
async fn test_notice_shown_after_redirect() {
    let (server, _dir) = create_test_server();

    server
        .post("/add")
        .form(&[("title", "Noticed")])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let response = server.get("/?notice=added").await;
    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["notice"], ADDED_MESSAGE);
    assert_eq!(json["count"], 1);
    assert_eq!(json["articles"][0]["title"], "Noticed");
}

#[tokio::test]
async fn test_unknown_notice_is_ignored() {
    let (server, _dir) = create_test_server();
    let json = server.get("/?notice=bogus").await.json::<Value>();
    assert_eq!(json["notice"], Value::Null);
}

#[tokio::test]
async fn test_every_appended_article_is_addressable() {
    let (server, _dir) = create_test_server();
    let n = 3;

    for i in 0..n {
        server
            .post("/add")
            .form(&[("title", format!("Case {}", i))])
            .await
            .assert_status(StatusCode::SEE_OTHER);
    }

    for k in 0..n {
        let response = server.get(&format!("/article/{}", k)).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["article"]["title"], format!("Case {}", k));
    }

    server.get(&format!("/article/{}", n)).await.assert_status_not_found();
    server.get("/article/-1").await.assert_status_not_found();
    server.get("/article/abc").await.assert_status_not_found();
}

#[tokio::test]
async fn test_list_preserves_stored_order() {
    let (server, dir) = create_test_server();
    let articles: Vec<Article> = ["first", "second", "third"]
        .iter()
        .map(|t| Article {
            title: t.to_string(),
            ..Article::default()
        })
        .collect();
    store_in(&dir).save(&articles).unwrap();

    let json = server.get("/").await.json::<Value>();
    let titles: Vec<&str> = json["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_malformed_count_is_rejected_and_not_persisted() {
    let (server, dir) = create_test_server();

    let response = server
        .post("/add")
        .form(&[("title", "Bad count"), ("judge_count", "two")])
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "MALFORMED_SUBMISSION");

    assert!(store_in(&dir).load().unwrap().is_empty());
}

#[tokio::test]
async fn test_repeated_fields_keep_first_value() {
    let (server, dir) = create_test_server();

    server
        .post("/add")
        .form(&[
            ("title", "First"),
            ("title", "Second"),
            ("judge_count", "1"),
            ("judge_count", "zz"),
            ("judge_name_0", "A. Smith"),
        ])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let stored = store_in(&dir).load().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "First");
    assert_eq!(stored[0].judges.len(), 1);
    assert_eq!(stored[0].judges[0].name, "A. Smith");
}

#[tokio::test]
async fn test_corrupt_data_file_fails_loudly() {
    let (server, dir) = create_test_server();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("articles.json"), "{ not json").unwrap();

    let response = server.get("/").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["code"], "CORRUPT_DATA");

    let response = server.post("/add").form(&[("title", "Dropped")]).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let text = std::fs::read_to_string(data_dir.join("articles.json")).unwrap();
    assert_eq!(text, "{ not json");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions_are_all_kept() {
    let (server, dir) = create_test_server();

    let submit = |title: &'static str| {
        let request = server.post("/add").form(&[("title", title)]);
        async move { request.await.assert_status(StatusCode::SEE_OTHER) }
    };

    tokio::join!(
        submit("Concurrent 0"),
        submit("Concurrent 1"),
        submit("Concurrent 2"),
        submit("Concurrent 3"),
    );

    assert_eq!(store_in(&dir).load().unwrap().len(), 4);
}
