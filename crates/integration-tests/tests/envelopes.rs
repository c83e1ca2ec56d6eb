mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;
use herald_config::MultiErrorStatus;
use serde_json::json;

#[tokio::test]
async fn lesson_page_round_trip() {
    let server = TestServer::start_default().await.unwrap();

    let (status, body) = server.get_json("/lessons?page=2&page_size=4").await.unwrap();
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total"], 25);
    assert_eq!(body["data"]["page"], 2);
    assert_eq!(body["data"]["pageSize"], 4);

    let ids: Vec<_> = body["data"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|lesson| lesson["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, [5, 6, 7, 8]);
}

#[tokio::test]
async fn missing_lesson_is_404_in_both_shapes() {
    let server = TestServer::start_default().await.unwrap();

    let (status, body) = server.get_json("/lessons/77").await.unwrap();
    assert_eq!(status, 404);
    assert_eq!(body, json!({"success": false, "error": "lesson 77 not found"}));

    let (status, body) = server.get_json("/v2/lessons/77").await.unwrap();
    assert_eq!(status, 404);
    assert_eq!(body, json!({"error": {"code": 404, "message": "lesson 77 not found"}}));
}

#[tokio::test]
async fn create_lesson_rejects_blank_title() {
    let server = TestServer::start_default().await.unwrap();

    let (status, body) = server
        .post_json("/lessons", &json!({"title": "", "durationMinutes": 20}))
        .await
        .unwrap();
    assert_eq!(status, 422);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Validation failed",
            "fields": [{"field": "title", "message": "required"}]
        })
    );
}

#[tokio::test]
async fn malformed_requests_still_get_envelopes() {
    let server = TestServer::start_default().await.unwrap();

    let (status, body) = server
        .post_json("/lessons", &json!({"title": "Traits", "durationMinutes": "abc"}))
        .await
        .unwrap();
    assert_eq!(status, 422);
    assert_eq!(body["success"], false);

    let (status, body) = server.get_json("/lessons?page=abc").await.unwrap();
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);

    let (status, body) = server.get_json("/lessons/abc").await.unwrap();
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn delete_lesson_sends_empty_204() {
    let server = TestServer::start_default().await.unwrap();

    let resp = server.client().delete(server.url("/lessons/3")).send().await.unwrap();
    assert_eq!(resp.status(), 204);
    assert!(resp.headers().get("content-type").is_none());
    assert!(resp.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn batch_failures_default_to_400() {
    let server = TestServer::start_default().await.unwrap();

    let (status, body) = server
        .post_json("/v2/lessons/batch", &json!({"ids": [40, 41]}))
        .await
        .unwrap();
    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({"error": {"code": 400, "errors": ["lesson 40 not found", "lesson 41 not found"]}})
    );
}

#[tokio::test]
async fn batch_failures_with_classified_policy() {
    let config = ConfigBuilder::new()
        .with_multi_error_status(MultiErrorStatus::Classified)
        .build();
    let server = TestServer::start(config).await.unwrap();

    let (status, body) = server
        .post_json("/v2/lessons/batch", &json!({"ids": [40, 41]}))
        .await
        .unwrap();
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], 404);
    assert_eq!(body["error"]["errors"][0], "lesson 40 not found");
}

#[tokio::test]
async fn redaction_leaves_client_errors_readable() {
    let config = ConfigBuilder::new().with_redaction().build();
    let server = TestServer::start(config).await.unwrap();

    let (status, body) = server.post_json("/v2/lessons/batch", &json!({"ids": [40]})).await.unwrap();
    assert_eq!(status, 404);
    assert_eq!(body, json!({"error": {"code": 404, "message": "lesson 40 not found"}}));

    let (status, body) = server
        .post_json("/v2/lessons/batch", &json!({"ids": [40, 41]}))
        .await
        .unwrap();
    assert_eq!(status, 400);
    assert_eq!(body["error"]["errors"], json!(["lesson 40 not found", "lesson 41 not found"]));
}
