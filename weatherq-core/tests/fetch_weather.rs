use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weatherq_core::{Config, FetchError, FieldValue, WeatherClient};

fn test_client(base_url: &str) -> WeatherClient {
    let config = Config { api_key: "test-key".to_string() };
    WeatherClient::new(&config).with_base_url(base_url)
}

/// Mock server answering every GET with the given template.
async fn server_with(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(template).mount(&server).await;
    server
}

#[tokio::test]
async fn successful_lookup_returns_payload() {
    let server = server_with(ResponseTemplate::new(200).set_body_json(json!({
        "code": 0,
        "data": { "weather": "Sunny", "temperature": 22, "humidity": 60 }
    })))
    .await;

    let payload = test_client(&server.uri())
        .fetch("Beijing")
        .await
        .expect("lookup should succeed");

    assert_eq!(payload.weather, Some(FieldValue::Text("Sunny".to_string())));
    assert_eq!(payload.temperature, Some(FieldValue::Number(22.0)));
    assert_eq!(payload.humidity, Some(FieldValue::Number(60.0)));
    assert!(payload.date.is_none());
}

#[tokio::test]
async fn request_carries_key_and_city_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("key", "test-key"))
        .and(query_param("city", "Beijing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 0, "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = test_client(&server.uri())
        .fetch("Beijing")
        .await
        .expect("lookup should succeed");

    assert!(payload.is_empty());
}

#[tokio::test]
async fn missing_data_field_yields_empty_payload() {
    let server =
        server_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 0, "msg": "ok" })))
            .await;

    let payload = test_client(&server.uri())
        .fetch("Beijing")
        .await
        .expect("lookup should succeed");

    assert!(payload.is_empty());
}

#[tokio::test]
async fn nonzero_code_is_an_api_error_with_reason() {
    let server = server_with(
        ResponseTemplate::new(200).set_body_json(json!({ "code": 1, "msg": "invalid key" })),
    )
    .await;

    let err = test_client(&server.uri()).fetch("Beijing").await.unwrap_err();

    match err {
        FetchError::Api(reason) => assert_eq!(reason, "invalid key"),
        other => panic!("expected FetchError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn nonzero_code_without_msg_uses_default_reason() {
    let server =
        server_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 500 }))).await;

    let err = test_client(&server.uri()).fetch("Beijing").await.unwrap_err();

    match err {
        FetchError::Api(reason) => assert_eq!(reason, "unknown error"),
        other => panic!("expected FetchError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_format_error() {
    let server = server_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let err = test_client(&server.uri()).fetch("Beijing").await.unwrap_err();

    assert!(matches!(err, FetchError::Format(_)), "got {err:?}");
}

#[tokio::test]
async fn http_error_status_is_a_network_error() {
    let server = server_with(ResponseTemplate::new(500).set_body_string("upstream down")).await;

    let err = test_client(&server.uri()).fetch("Beijing").await.unwrap_err();

    match err {
        FetchError::Network(reason) => {
            assert!(reason.contains("500"), "reason should name the status: {reason}");
            assert!(reason.contains("upstream down"), "reason should carry the body: {reason}");
        }
        other => panic!("expected FetchError::Network, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_times_out_as_network_error() {
    let server = server_with(
        ResponseTemplate::new(200)
            .set_body_json(json!({ "code": 0, "data": {} }))
            .set_delay(Duration::from_millis(500)),
    )
    .await;

    let err = test_client(&server.uri())
        .with_timeout(Duration::from_millis(50))
        .fetch("Beijing")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn repeated_lookups_are_independent_and_identical() {
    let server = server_with(ResponseTemplate::new(200).set_body_json(json!({
        "code": 0,
        "data": { "weather": "Cloudy", "temperature": 18 }
    })))
    .await;

    let client = test_client(&server.uri());

    let first = client.fetch("Beijing").await.expect("first lookup should succeed");
    let second = client.fetch("Beijing").await.expect("second lookup should succeed");

    assert_eq!(first, second);
}
