#![allow(dead_code)]

use httpmock::{Method::GET, Method::POST, Mock, MockServer};
use std::{fs, path::Path};
use stock_alert::{AlertClient, Settings};
use url::Url;

pub const STOCK_KEY: &str = "stock-key";
pub const NEWS_KEY: &str = "news-key";
pub const BOT_TOKEN: &str = "123:abc";
pub const CHAT_ID: &str = "42";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn settings() -> Settings {
    Settings {
        stock_api_key: STOCK_KEY.into(),
        news_api_key: NEWS_KEY.into(),
        bot_token: BOT_TOKEN.into(),
        chat_id: CHAT_ID.into(),
    }
}

/// A client with every API base pointed at `server`.
pub fn client_for(server: &MockServer) -> AlertClient {
    let base = Url::parse(&server.base_url()).unwrap();
    AlertClient::builder()
        .settings(settings())
        .base_quote(base.clone())
        .base_news(base.clone())
        .base_telegram(base)
        .build()
        .unwrap()
}

pub fn mock_open_close<'a>(server: &'a MockServer, symbol: &'a str, date: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v1/open-close/{symbol}/{date}"))
            .query_param("apiKey", STOCK_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture(&format!("open_close_{symbol}_{date}.json")));
    })
}

pub fn mock_close<'a>(server: &'a MockServer, symbol: &'a str, date: &'a str, close: f64) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v1/open-close/{symbol}/{date}"));
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "from": date,
            "symbol": symbol,
            "open": close,
            "high": close,
            "low": close,
            "close": close,
            "volume": 1000
        }));
    })
}

pub fn mock_news<'a>(server: &'a MockServer, from: &'a str, fixture_name: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("from", from)
            .query_param("apiKey", NEWS_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture(fixture_name));
    })
}

pub fn mock_send_any(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path(format!("/bot{BOT_TOKEN}/sendMessage"))
            .query_param("chat_id", CHAT_ID);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("sendMessage_ok.json"));
    })
}

pub fn mock_send_text<'a>(server: &'a MockServer, text: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path(format!("/bot{BOT_TOKEN}/sendMessage"))
            .query_param("chat_id", CHAT_ID)
            .query_param("text", text)
            .query_param("parse_mode", "Markdown");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("sendMessage_ok.json"));
    })
}

/// A client whose every API base points at a closed local port.
pub fn unreachable_client() -> AlertClient {
    let base = Url::parse("http://127.0.0.1:1/").unwrap();
    AlertClient::builder()
        .settings(settings())
        .base_quote(base.clone())
        .base_news(base.clone())
        .base_telegram(base)
        .build()
        .unwrap()
}
