mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::{NEWS_KEY, client_for, fixture, mock_news, setup_server, unreachable_client};
use httpmock::Method::GET;
use stock_alert::news::UNTITLED;
use stock_alert::{AlertError, NewsBuilder, NewsService, SortBy};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[tokio::test]
async fn search_sends_keywords_as_title_or_query() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "Nu Holdings OR Nubank")
            .query_param("searchIn", "title")
            .query_param("from", "2024-01-05")
            .query_param("sortBy", "popularity")
            .query_param("apiKey", NEWS_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("everything_nu.json"));
    });
    let client = client_for(&server);

    let items = NewsBuilder::new(&client, d(2024, 1, 5))
        .keywords(["Nu Holdings", "Nubank"])
        .fetch()
        .await
        .unwrap();
    mock.assert();

    // Provider order is kept, including the blanked-out entry.
    assert_eq!(items.len(), 6);
    assert_eq!(items[0].title, "Nu Holdings shares jump after record customer growth");
    assert_eq!(items[0].source.as_deref(), Some("Reuters"));
    assert_eq!(
        items[0].published_at,
        Some(Utc.with_ymd_and_hms(2024, 1, 8, 14, 5, 0).unwrap())
    );
    assert_eq!(items[1].title, UNTITLED);
    assert_eq!(items[1].description, "");
    assert_eq!(items[2].title, "Nu Holdings expands lending in Mexico");
    assert_eq!(items[3].description, "");
    assert_eq!(items[5].title, "Nu Holdings options activity picks up");
}

#[tokio::test]
async fn builder_options_reach_the_query() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("sortBy", "publishedAt")
            .query_param("pageSize", "3");
        then.status(200).body(fixture("everything_empty.json"));
    });
    let client = client_for(&server);

    let items = NewsBuilder::new(&client, d(2024, 1, 5))
        .keywords(["Nu Holdings"])
        .sort_by(SortBy::PublishedAt)
        .page_size(3)
        .fetch()
        .await
        .unwrap();
    mock.assert();
    assert!(items.is_empty());
}

#[tokio::test]
async fn service_trait_uses_the_same_request() {
    let server = setup_server();
    let mock = mock_news(&server, "2024-01-05", "everything_nu.json");
    let client = client_for(&server);

    let keywords = vec!["Nu Holdings".to_string()];
    let items = client.search_news(&keywords, d(2024, 1, 5)).await.unwrap();
    mock.assert();
    assert_eq!(items.len(), 6);
}

#[tokio::test]
async fn error_payload_is_reported() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).json_body(serde_json::json!({
            "status": "error",
            "code": "parameterInvalid",
            "message": "You are trying to request results too far in the past."
        }));
    });
    let client = client_for(&server);

    let err = NewsBuilder::new(&client, d(2000, 1, 1))
        .keywords(["Nu Holdings"])
        .fetch()
        .await
        .unwrap_err();
    match err {
        AlertError::Api { service, message } => {
            assert_eq!(service, "news");
            assert!(message.contains("too far in the past"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_is_a_status_error() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(401).json_body(serde_json::json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        }));
    });
    let client = client_for(&server);

    let err = NewsBuilder::new(&client, d(2024, 1, 5))
        .keywords(["Nu Holdings"])
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, AlertError::Status { status: 401, .. }), "{err:?}");
}

#[tokio::test]
async fn empty_keywords_never_hit_the_network() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).body(fixture("everything_empty.json"));
    });
    let client = client_for(&server);

    let err = NewsBuilder::new(&client, d(2024, 1, 5)).fetch().await.unwrap_err();
    assert!(matches!(err, AlertError::Config(_)), "{err:?}");
    mock.assert_calls(0);
}

#[tokio::test]
async fn transport_error_does_not_leak_api_key() {
    let client = unreachable_client();

    let err = NewsBuilder::new(&client, d(2024, 1, 5))
        .keywords(["Nu Holdings"])
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, AlertError::Http(_)), "{err:?}");
    assert!(!err.to_string().contains(NEWS_KEY), "{err}");
    assert!(!format!("{err:?}").contains(NEWS_KEY), "{err:?}");
}

#[tokio::test]
async fn blank_titles_are_kept_in_place() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).json_body(serde_json::json!({
            "status": "ok",
            "totalResults": 4,
            "articles": [
                {"title": "   ", "description": "blank"},
                {"title": "A", "description": "a"},
                {"title": "B", "description": null},
                {"title": "C", "description": "c"}
            ]
        }));
    });
    let client = client_for(&server);

    let items = NewsBuilder::new(&client, d(2024, 1, 5))
        .keywords(["Nu Holdings"])
        .fetch()
        .await
        .unwrap();
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec![UNTITLED, "A", "B", "C"]);
    assert_eq!(items[0].description, "blank");
}
