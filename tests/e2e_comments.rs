//! E2E tests for comment listing and submission

mod common;

use common::TestServer;

const VOLLEY: &str = "https://example.com/volley.jpg";

async fn message_of(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.unwrap();
    body["message"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_get_comments_without_source_returns_the_full_mapping() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(server.url("/api/getComments"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let mapping = body["results"].as_object().unwrap();
    assert_eq!(mapping[VOLLEY][1]["comment"], "unbelievable stuff");
}

#[tokio::test]
async fn test_get_comments_for_a_source_in_submission_order() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(server.url(&format!(
            "/api/getComments?source={}",
            urlencoding::encode(VOLLEY)
        )))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let thread = body["results"].as_array().unwrap();
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0]["comment"], "wonderful wonderful goal");
    assert_eq!(thread[1]["comment"], "unbelievable stuff");
}

#[tokio::test]
async fn test_get_comments_for_an_uncommented_source_returns_the_placeholder() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(server.url("/api/getComments?source=not_real.jpg"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["results"],
        "No comments have been submitted for this photo yet."
    );
}

#[tokio::test]
async fn test_submit_requires_a_source_link() {
    let server = TestServer::new().await;

    let response = server
        .client
        .post(server.url("/api/submitComment"))
        .json(&serde_json::json!({ "comment": "this is my comment" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    assert_eq!(message_of(response).await, "Image source link cannot be empty");
}

#[tokio::test]
async fn test_submit_requires_a_comment_before_the_session() {
    let server = TestServer::new().await;

    let response = server
        .client
        .post(server.url("/api/submitComment"))
        .json(&serde_json::json!({ "source_link": "random_src_link.png" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    assert_eq!(message_of(response).await, "Comment cannot be empty");
}

#[tokio::test]
async fn test_submit_requires_a_session() {
    let server = TestServer::new().await;

    let response = server
        .client
        .post(server.url("/api/submitComment"))
        .json(&serde_json::json!({
            "source_link": "random_src_link.png",
            "comment": "this is my comment",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 403);
    assert_eq!(
        message_of(response).await,
        "There is no valid cookie to determine authenticity"
    );
}

#[tokio::test]
async fn test_submit_appends_to_the_thread_in_order() {
    let server = TestServer::new().await;
    server.login("joe@bloggs.com", "pass").await;

    let response = server
        .client
        .post(server.url("/api/submitComment"))
        .json(&serde_json::json!({
            "source_link": VOLLEY,
            "comment": "still watching the replays",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(message_of(response).await, "Comment successfully uploaded");

    let comments = server.read_store("comments");
    let thread = comments[VOLLEY].as_array().unwrap();
    assert_eq!(thread.len(), 3);
    assert_eq!(thread[2]["email_address"], "joe@bloggs.com");
    assert_eq!(thread[2]["comment"], "still watching the replays");
}

// An encoded submission lands under the decoded key, sharing the
// existing thread.
#[tokio::test]
async fn test_submit_decodes_the_source_link() {
    let server = TestServer::new().await;
    server.login("f@f.com", "yu").await;

    let response = server
        .client
        .post(server.url("/api/submitComment"))
        .json(&serde_json::json!({
            "source_link": urlencoding::encode(VOLLEY),
            "comment": "came back for another look",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let comments = server.read_store("comments");
    let thread = comments[VOLLEY].as_array().unwrap();
    assert_eq!(thread.last().unwrap()["comment"], "came back for another look");
}

#[tokio::test]
async fn test_submit_creates_a_thread_lazily() {
    let server = TestServer::new().await;
    server.login("f@f.com", "yu").await;

    let response = server
        .client
        .post(server.url("/api/submitComment"))
        .json(&serde_json::json!({
            "source_link": "https://example.com/brand-new.jpg",
            "comment": "first!",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let comments = server.read_store("comments");
    let thread = comments["https://example.com/brand-new.jpg"].as_array().unwrap();
    assert_eq!(thread.len(), 1);
    assert_eq!(thread[0]["email_address"], "f@f.com");
}
