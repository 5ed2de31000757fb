mod common;

use chrono::NaiveDate;
use common::{STOCK_KEY, client_for, mock_open_close, setup_server, unreachable_client};
use httpmock::Method::GET;
use stock_alert::{AlertError, ErrorKind, quote};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[tokio::test]
async fn offline_open_close_uses_recorded_fixture() {
    let server = setup_server();
    let mock = mock_open_close(&server, "NU", "2024-01-08");
    let client = client_for(&server);

    let q = quote::daily_quote(&client, "NU", d(2024, 1, 8)).await.unwrap();
    mock.assert();

    assert_eq!(q.symbol, "NU");
    assert_eq!(q.date, d(2024, 1, 8));
    assert!((q.close - 8.82).abs() < 1e-9);
    assert!((q.open - 8.41).abs() < 1e-9);
    assert_eq!(q.high, Some(8.9));
    assert_eq!(q.volume, Some(41_235_711.0));
}

#[tokio::test]
async fn quote_returns_status_error_on_non_2xx_without_leaking_key() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/open-close/NU/2024-01-06");
        then.status(404)
            .json_body(serde_json::json!({"status": "NOT_FOUND", "message": "Data not found."}));
    });
    let client = client_for(&server);

    let err = quote::daily_quote(&client, "NU", d(2024, 1, 6)).await.unwrap_err();
    mock.assert();

    assert_eq!(err.kind(), ErrorKind::RemoteCall);
    match err {
        AlertError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.contains("/v1/open-close/NU/2024-01-06"));
            assert!(!url.contains(STOCK_KEY));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_in_body_is_reported() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v1/open-close/NU/2024-01-08");
        then.status(200)
            .json_body(serde_json::json!({"status": "ERROR", "message": "Unknown API Key"}));
    });
    let client = client_for(&server);

    let err = quote::daily_quote(&client, "NU", d(2024, 1, 8)).await.unwrap_err();
    match err {
        AlertError::Api { service, message } => {
            assert_eq!(service, "quote");
            assert_eq!(message, "Unknown API Key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_close_is_a_data_error() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v1/open-close/NU/2024-01-08");
        then.status(200)
            .json_body(serde_json::json!({"status": "OK", "symbol": "NU", "open": 8.41}));
    });
    let client = client_for(&server);

    let err = quote::daily_quote(&client, "NU", d(2024, 1, 8)).await.unwrap_err();
    assert!(matches!(err, AlertError::Data(ref m) if m.contains("close")), "{err:?}");
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v1/open-close/NU/2024-01-08");
        then.status(200).body("<html>gateway</html>");
    });
    let client = client_for(&server);

    let err = quote::daily_quote(&client, "NU", d(2024, 1, 8)).await.unwrap_err();
    assert!(matches!(err, AlertError::Json(_)), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::RemoteCall);
}

#[tokio::test]
async fn transport_error_does_not_leak_api_key() {
    let client = unreachable_client();

    let err = quote::daily_quote(&client, "NU", d(2024, 1, 8)).await.unwrap_err();
    assert!(matches!(err, AlertError::Http(_)), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::RemoteCall);
    assert!(!err.to_string().contains(STOCK_KEY), "{err}");
    assert!(!format!("{err:?}").contains(STOCK_KEY), "{err:?}");
}
