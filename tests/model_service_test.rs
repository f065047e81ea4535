use httpmock::prelude::*;
use nue_models::utils::logger;
use nue_models::{FetchError, FetcherConfig, ModelService, Resource};

fn service_for(server: &MockServer) -> ModelService {
    let _ = logger::init_logger(true);
    ModelService::from_config(&FetcherConfig::new(server.base_url())).unwrap()
}

#[tokio::test]
async fn test_get_feedback_returns_served_json() {
    let server = MockServer::start();
    let feedback_mock = server.mock(|when, then| {
        when.method(GET).path("/models/feedback.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"score": 4.5}"#);
    });

    let service = service_for(&server);
    let feedback = service.get_feedback().await.unwrap();

    feedback_mock.assert();
    assert_eq!(feedback, serde_json::json!({"score": 4.5}));
}

#[tokio::test]
async fn test_get_users_returns_served_json() {
    let server = MockServer::start();
    let users_mock = server.mock(|when, then| {
        when.method(GET).path("/models/users.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"[{"id":1,"name":"Ada"}]"#);
    });

    let service = service_for(&server);
    let users = service.get_users().await.unwrap();

    users_mock.assert();
    assert_eq!(users, serde_json::json!([{"id": 1, "name": "Ada"}]));
}

#[tokio::test]
async fn test_get_analytics_connection_refused() {
    // Grab a free port, then release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let config = FetcherConfig::new(format!("http://127.0.0.1:{}/", port));
    let service = ModelService::from_config(&config).unwrap();

    let err = service.get_analytics().await.unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err, FetchError::ApiError(_)));
}

#[tokio::test]
async fn test_get_users_non_json_body() {
    let server = MockServer::start();
    let users_mock = server.mock(|when, then| {
        when.method(GET).path("/models/users.json");
        then.status(200).body("not json");
    });

    let service = service_for(&server);
    let err = service.get_users().await.unwrap_err();

    users_mock.assert();
    assert!(err.is_parse());
}

#[tokio::test]
async fn test_non_success_status_is_an_error_for_every_resource() {
    let server = MockServer::start();
    let failing_mock = server.mock(|when, then| {
        when.method(GET).path_contains("/models/");
        then.status(500)
            .header("Content-Type", "application/json")
            .body("{}");
    });

    let service = service_for(&server);
    for resource in Resource::ALL {
        let err = service.get(resource).await.unwrap_err();
        assert!(
            matches!(err, FetchError::StatusError { status: 500, .. }),
            "{} should fail, got {:?}",
            resource,
            err
        );
    }

    failing_mock.assert_hits(3);
}

#[tokio::test]
async fn test_each_operation_hits_exactly_one_path() {
    let server = MockServer::start();
    let feedback_mock = server.mock(|when, then| {
        when.method(GET).path("/models/feedback.json");
        then.status(200).json_body(serde_json::json!({"score": 3}));
    });
    let users_mock = server.mock(|when, then| {
        when.method(GET).path("/models/users.json");
        then.status(200).json_body(serde_json::json!([]));
    });
    let analytics_mock = server.mock(|when, then| {
        when.method(GET).path("/models/analytics.json");
        then.status(200).json_body(serde_json::json!({"visits": 0}));
    });

    let service = service_for(&server);

    service.get_feedback().await.unwrap();
    feedback_mock.assert_hits(1);
    users_mock.assert_hits(0);
    analytics_mock.assert_hits(0);

    service.get_users().await.unwrap();
    service.get_analytics().await.unwrap();
    feedback_mock.assert_hits(1);
    users_mock.assert_hits(1);
    analytics_mock.assert_hits(1);
}

#[tokio::test]
async fn test_base_url_path_is_replaced() {
    let server = MockServer::start();
    let users_mock = server.mock(|when, then| {
        when.method(GET).path("/models/users.json");
        then.status(200).json_body(serde_json::json!([{"id": 2}]));
    });

    let config = FetcherConfig::new(server.url("/dashboard/index.html"));
    let service = ModelService::from_config(&config).unwrap();
    let users = service.get_users().await.unwrap();

    users_mock.assert();
    assert_eq!(users[0]["id"], 2);
}

#[tokio::test]
async fn test_concurrent_calls_interleave_independently() {
    let server = MockServer::start();
    let feedback_mock = server.mock(|when, then| {
        when.method(GET).path("/models/feedback.json");
        then.status(200).json_body(serde_json::json!({"score": 1}));
    });
    let users_mock = server.mock(|when, then| {
        when.method(GET).path("/models/users.json");
        then.status(200).json_body(serde_json::json!([{"id": 1}]));
    });
    let analytics_mock = server.mock(|when, then| {
        when.method(GET).path("/models/analytics.json");
        then.status(200).json_body(serde_json::json!({"visits": 42}));
    });

    let service = service_for(&server);
    let (feedback, users, analytics) = tokio::join!(
        service.get_feedback(),
        service.get_users(),
        service.get_analytics()
    );

    feedback_mock.assert();
    users_mock.assert();
    analytics_mock.assert();
    assert_eq!(feedback.unwrap()["score"], 1);
    assert_eq!(users.unwrap()[0]["id"], 1);
    assert_eq!(analytics.unwrap()["visits"], 42);
}

#[tokio::test]
async fn test_configured_timeout_aborts_slow_response() {
    let server = MockServer::start();
    let users_mock = server.mock(|when, then| {
        when.method(GET).path("/models/users.json");
        then.status(200)
            .delay(std::time::Duration::from_secs(3))
            .json_body(serde_json::json!([{"id": 1}]));
    });

    let config = FetcherConfig::new(server.base_url()).with_timeout(1);
    let service = ModelService::from_config(&config).unwrap();

    let started = std::time::Instant::now();
    let err = service.get_users().await.unwrap_err();

    users_mock.assert();
    assert!(err.is_transport());
    assert!(matches!(err, FetchError::ApiError(ref e) if e.is_timeout()));
    assert!(started.elapsed() < std::time::Duration::from_secs(3));
}

#[tokio::test]
async fn test_no_timeout_by_default_waits_for_slow_response() {
    let server = MockServer::start();
    let users_mock = server.mock(|when, then| {
        when.method(GET).path("/models/users.json");
        then.status(200)
            .delay(std::time::Duration::from_millis(1500))
            .json_body(serde_json::json!([{"id": 1}]));
    });

    let service = service_for(&server);
    let users = service.get_users().await.unwrap();

    users_mock.assert();
    assert_eq!(users, serde_json::json!([{"id": 1}]));
}
