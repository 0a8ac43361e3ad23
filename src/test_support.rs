//! Loopback HTTP helpers shared by the client tests.

use std::collections::HashMap;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::Config;

pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

/// Accept a single connection, record the request and answer with the given
/// status line and body. Returns the base URL and a handle to the capture.
pub async fn serve_once(
    status_line: &str,
    content_type: &str,
    body: &str,
) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nx-request-id: test-42\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let head_end = loop {
            let read = stream.read(&mut chunk).await.unwrap();
            if read == 0 {
                break buf.len();
            }
            buf.extend_from_slice(&chunk[..read]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < head_end + content_length {
            let read = stream.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..read]);
        }

        let body = String::from_utf8_lossy(&buf[head_end..]).into_owned();
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;

        CapturedRequest { head, body }
    });

    (format!("http://{addr}"), handle)
}

/// URL of a loopback port that was bound and released, so nothing listens on it.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn config_with(overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("PRACTICUM_TOKEN".to_string(), "practicum".to_string()),
        ("TELEGRAM_TOKEN".to_string(), "123:abc".to_string()),
        ("TELEGRAM_CHAT_ID".to_string(), "42".to_string()),
    ]);
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}
