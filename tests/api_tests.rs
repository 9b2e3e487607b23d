use payment_assistant_backend::config::Config;
use payment_assistant_backend::message::{ChatResponse, ErrorBody, PaymentResponse, UpiVerifyResponse};
use payment_assistant_backend::routes::create_router;
use payment_assistant_backend::state::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;
use tower::util::ServiceExt;

fn app() -> Router {
    let config = Config::default().with_mock_delays(Duration::ZERO, Duration::ZERO);
    create_router().with_state(AppState::shared(config).unwrap())
}

async fn post_json<T: DeserializeOwned>(app: Router, uri: &str, body: &str) -> (StatusCode, T) {
    post_raw(app, uri, Some("application/json"), body).await
}

async fn post_raw<T: DeserializeOwned>(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, T) {
    let mut request = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }
    let response = app
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body_bytes).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_chat_demo_reply_without_key() {
    let (status, resp): (_, ChatResponse) = post_json(app(), "/api/ai/chat", r#"{"message": "hi"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp.reply, "Demo reply (OpenAI key not configured). You asked: \"hi\"");
    assert!(resp.debug.is_none());
}

#[tokio::test]
async fn test_chat_demo_reply_embeds_message_verbatim() {
    for message in ["  spaced out  ", "quote \" inside", "नमस्ते", "multi\nline"] {
        let body = json!({ "message": message }).to_string();
        let (status, resp): (_, ChatResponse) = post_json(app(), "/api/ai/chat", &body).await;
        assert_eq!(status, StatusCode::OK);
        assert!(resp.reply.contains(message), "reply {:?} lost {:?}", resp.reply, message);
    }
}

#[tokio::test]
async fn test_chat_requires_message() {
    for body in [r#"{}"#, r#"{"message": ""}"#, r#"{"message": null}"#] {
        let (status, err): (_, ErrorBody) = post_json(app(), "/api/ai/chat", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(err.error);
        assert_eq!(err.message, "Message is required");
    }
}

#[tokio::test]
async fn test_bodyless_requests_report_missing_field() {
    let cases = [
        ("/api/ai/chat", "Message is required"),
        ("/api/verify-upi", "UPI ID is required"),
        ("/api/process-payment", "method and amount required"),
    ];
    for (uri, expected) in cases {
        for (content_type, body) in [
            (None, ""),
            (Some("application/json"), ""),
            (Some("application/json"), "  \n"),
            (Some("text/plain"), "hello"),
        ] {
            let (status, err): (_, ErrorBody) = post_raw(app(), uri, content_type, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {content_type:?} {body:?}");
            assert!(err.error);
            assert_eq!(err.message, expected, "{uri} {content_type:?} {body:?}");
        }
    }
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let (status, err): (_, ErrorBody) = post_json(app(), "/api/ai/chat", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err.error);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn test_verify_upi_scenario() {
    let (status, resp): (_, Value) = post_json(app(), "/api/verify-upi", r#"{"upi":"john@paytm"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp, json!({ "verified": true, "name": "John", "gateway": null }));
}

#[tokio::test]
async fn test_verify_upi_echoes_gateway() {
    let (status, resp): (_, UpiVerifyResponse) = post_json(
        app(),
        "/api/verify-upi",
        r#"{"upi":"priya.s@okhdfcbank","gateway":"razorpay"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(resp.verified);
    assert_eq!(resp.name, "Priya.s");
    assert_eq!(resp.gateway.as_deref(), Some("razorpay"));
}

#[tokio::test]
async fn test_verify_upi_missing() {
    for body in [r#"{}"#, r#"{"upi":""}"#] {
        let (status, err): (_, ErrorBody) = post_json(app(), "/api/verify-upi", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "UPI ID is required");
    }
}

#[tokio::test]
async fn test_verify_upi_bad_format() {
    for upi in ["john", "john@", "@paytm", "a@b@c"] {
        let body = json!({ "upi": upi }).to_string();
        let (status, err): (_, ErrorBody) = post_json(app(), "/api/verify-upi", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{upi}");
        assert!(err.error);
        assert_eq!(err.message, "Invalid UPI ID format");
    }
}

#[tokio::test]
async fn test_process_payment_scenario() {
    let (status, resp): (_, Value) =
        post_json(app(), "/api/process-payment", r#"{"method":"card","amount":500}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["success"], json!(true));
    assert_eq!(resp["method"], json!("card"));
    assert_eq!(resp["amount"], json!(500));
    assert!(resp.get("details").is_none());

    let tx_id = resp["txId"].as_str().unwrap();
    let digits = tx_id.strip_prefix("TXN-").unwrap();
    assert_eq!(digits.len(), 6);
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_process_payment_echoes_inputs() {
    let body = json!({
        "method": "upi",
        "amount": "1,299.00",
        "details": { "upi": "john@paytm", "note": ["split", 2] }
    });
    let (status, resp): (_, PaymentResponse) =
        post_json(app(), "/api/process-payment", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(resp.success);
    assert_eq!(resp.method, "upi");
    assert_eq!(resp.amount, body["amount"]);
    assert_eq!(resp.details.as_ref(), Some(&body["details"]));
}

#[tokio::test]
async fn test_process_payment_echoes_null_details() {
    let (status, resp): (_, Value) = post_json(
        app(),
        "/api/process-payment",
        r#"{"method":"card","amount":5,"details":null}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp.get("details"), Some(&Value::Null));
    assert_eq!(resp["amount"], json!(5));
}

#[tokio::test]
async fn test_process_payment_requires_method_and_amount() {
    let bodies = [
        r#"{"amount":500}"#,
        r#"{"method":"","amount":500}"#,
        r#"{"method":"card"}"#,
        r#"{"method":"card","amount":0}"#,
        r#"{"method":"card","amount":null}"#,
        r#"{"method":"card","amount":""}"#,
        r#"{"method":"card","amount":false}"#,
    ];
    for body in bodies {
        let (status, err): (_, ErrorBody) = post_json(app(), "/api/process-payment", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(err.error);
        assert_eq!(err.message, "method and amount required");
    }
}

#[tokio::test]
async fn test_process_payment_rejects_non_string_method() {
    let (status, err): (_, ErrorBody) =
        post_json(app(), "/api/process-payment", r#"{"method":7,"amount":5}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err.error);
    assert!(err.message.contains("method"), "{}", err.message);
}
