use super::*;

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Clone)]
struct ServerState {
    reply: Value,
    status: StatusCode,
    tx: Arc<Mutex<Option<oneshot::Sender<HashMap<String, String>>>>>,
}

async fn handle_submit(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut fields = HashMap::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap_or_default();
        fields.insert(name, value);
    }
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(fields);
    }
    (state.status, Json(state.reply.clone()))
}

async fn spawn_relay_server(
    reply: Value,
    status: StatusCode,
) -> Result<(RelayClient, oneshot::Receiver<HashMap<String, String>>)> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel();
    let state = ServerState {
        reply,
        status,
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/submit", post(handle_submit))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let client = RelayClient::new(test_config(&format!("http://{addr}/submit")));
    Ok((client, rx))
}

fn test_config(endpoint: &str) -> RelayConfig {
    RelayConfig {
        endpoint: Url::parse(endpoint).expect("test endpoint"),
        access_key: "test-access-key".to_string(),
        subject: "Test Subject".to_string(),
    }
}

fn sample_inquiry() -> Inquiry {
    Inquiry {
        name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: "+1 (416) 555-0000".to_string(),
        company: "Jane Fabrication".to_string(),
        message: "Need a quote".to_string(),
    }
}

#[tokio::test]
async fn submit_posts_every_field_as_its_own_part() {
    let (client, payload_rx) = spawn_relay_server(json!({ "success": true }), StatusCode::OK)
        .await
        .expect("spawn server");

    client.submit(&sample_inquiry()).await.expect("submit");

    let fields = payload_rx.await.expect("payload");
    assert_eq!(fields.get("access_key").map(String::as_str), Some("test-access-key"));
    assert_eq!(fields.get("name").map(String::as_str), Some("Jane Doe"));
    assert_eq!(fields.get("email").map(String::as_str), Some("jane@x.com"));
    assert_eq!(fields.get("phone").map(String::as_str), Some("+1 (416) 555-0000"));
    assert_eq!(fields.get("company").map(String::as_str), Some("Jane Fabrication"));
    assert_eq!(fields.get("message").map(String::as_str), Some("Need a quote"));
    assert_eq!(fields.get("subject").map(String::as_str), Some("Test Subject"));
    assert_eq!(fields.len(), 7);
}

#[tokio::test]
async fn accepted_reply_produces_a_receipt() {
    let (client, _payload_rx) = spawn_relay_server(
        json!({ "success": true, "message": "Email sent" }),
        StatusCode::OK,
    )
    .await
    .expect("spawn server");

    let receipt = client.submit(&sample_inquiry()).await.expect("submit");
    assert_eq!(receipt.remote_message.as_deref(), Some("Email sent"));
}

#[tokio::test]
async fn declined_reply_is_a_rejection() {
    let (client, _payload_rx) = spawn_relay_server(
        json!({ "success": false, "message": "invalid access key" }),
        StatusCode::OK,
    )
    .await
    .expect("spawn server");

    let err = client
        .submit(&sample_inquiry())
        .await
        .expect_err("must fail");
    assert!(matches!(
        err,
        RelayError::Rejected { ref remote_message } if remote_message.as_deref() == Some("invalid access key")
    ));
    assert!(err.to_string().contains("invalid access key"));
    assert_eq!(err.kind_label(), "rejected");
}

#[tokio::test]
async fn http_status_is_not_consulted() {
    // The relay's JSON flag wins even when the status line screams failure.
    let (client, _payload_rx) = spawn_relay_server(
        json!({ "success": true }),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await
    .expect("spawn server");

    let receipt = client.submit(&sample_inquiry()).await.expect("submit");
    assert!(receipt.remote_message.is_none());
}

#[tokio::test]
async fn non_json_reply_is_a_decode_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new().route(
        "/submit",
        post(|| async { "<html>gateway timeout</html>" }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let client = RelayClient::new(test_config(&format!("http://{addr}/submit")));

    let err = client
        .submit(&sample_inquiry())
        .await
        .expect_err("must fail");
    assert!(matches!(err, RelayError::Decode { .. }), "unexpected error: {err}");
    assert_eq!(err.kind_label(), "decode");
}

#[tokio::test]
async fn unreachable_relay_is_a_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let client = RelayClient::new(test_config(&format!("http://{addr}/submit")));

    let err = client
        .submit(&sample_inquiry())
        .await
        .expect_err("must fail");
    assert!(matches!(err, RelayError::Transport { .. }), "unexpected error: {err}");
    assert_eq!(err.kind_label(), "transport");
}

#[test]
fn inquiry_requires_name_email_and_message() {
    assert!(!Inquiry::default().is_complete());
    assert!(sample_inquiry().is_complete());

    let mut inquiry = sample_inquiry();
    inquiry.name = "   ".to_string();
    assert!(!inquiry.is_complete());

    let mut inquiry = sample_inquiry();
    inquiry.phone.clear();
    inquiry.company.clear();
    assert!(inquiry.is_complete(), "phone and company stay optional");
}

#[test]
fn rejection_without_a_reason_still_reads_well() {
    let err = RelayError::Rejected {
        remote_message: None,
    };
    assert!(err.to_string().contains("no reason given"));
}
