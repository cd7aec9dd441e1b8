#![cfg(not(target_arch = "wasm32"))]

use sample_game::auth::{AuthError, HttpLoginTransport, LoginRequest, LoginTransport};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accepts one connection, answers with `status` and `body`, and hands back the
/// request head and body it received.
async fn canned_server(status: &'static str, body: &'static str) -> (String, JoinHandle<(String, String)>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending body");
            buf.extend_from_slice(&chunk[..n]);
        }
        let request_body = String::from_utf8(buf[header_end..header_end + content_length].to_vec()).unwrap();

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        (head, request_body)
    });
    (base_url, server)
}

/// Straight to the loopback listener, whatever proxy the environment sets.
fn loopback_transport(base_url: &str) -> HttpLoginTransport {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpLoginTransport::with_client(base_url, client).unwrap()
}

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "a@b.com".into(),
        password: "pw".into(),
    }
}

#[tokio::test]
async fn success_decodes_token_and_user() {
    let (base_url, server) = canned_server("200 OK", r#"{"token":"t1","user":{"id":1,"name":"Ada"}}"#).await;
    let transport = loopback_transport(&base_url);

    let response = transport.post_login(&credentials()).await.expect("login ok");
    assert_eq!(response.token, "t1");
    assert_eq!(response.user.get("name"), Some(&json!("Ada")));

    let (head, body) = server.await.unwrap();
    assert!(head.starts_with("POST /api/login "), "{head}");
    assert!(head.to_ascii_lowercase().contains("content-type: application/json"), "{head}");
    let sent: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(sent, json!({ "email": "a@b.com", "password": "pw" }));
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let (base_url, server) = canned_server("401 Unauthorized", r#"{"error":"bad credentials"}"#).await;
    let transport = loopback_transport(&base_url);

    let err = transport.post_login(&credentials()).await.unwrap_err();
    assert!(matches!(err, AuthError::Status(401)), "{err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (base_url, server) = canned_server("200 OK", r#"{"token":1}"#).await;
    let transport = loopback_transport(&base_url);

    let err = transport.post_login(&credentials()).await.unwrap_err();
    assert!(matches!(err, AuthError::Decode(_)), "{err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_backend_is_an_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let transport = loopback_transport(&base_url);

    let err = transport.post_login(&credentials()).await.unwrap_err();
    assert!(matches!(err, AuthError::Http(_)), "{err:?}");
}
