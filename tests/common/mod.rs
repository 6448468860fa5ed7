//! Shared mock backend for integration tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// In-memory document and blob store behind a minimal HTTP server.
///
/// Documents are addressed as `/v1/{project}/{collection}/{id}`, blobs as
/// `/v0/{bucket}/o/{name}`. Collection GETs return a JSON object keyed by
/// document id, matching what `DocumentStore::list` expects.
pub struct MockBackend {
    pub addr: SocketAddr,
    docs: Arc<Mutex<HashMap<String, serde_json::Value>>>,
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fail_all: Arc<AtomicBool>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let docs: Arc<Mutex<HashMap<String, serde_json::Value>>> =
            Arc::new(Mutex::new(HashMap::new()));
        let blobs: Arc<Mutex<HashMap<String, Vec<u8>>>> = Arc::new(Mutex::new(HashMap::new()));
        let fail_all = Arc::new(AtomicBool::new(false));

        let backend = Self {
            addr,
            docs: docs.clone(),
            blobs: blobs.clone(),
            fail_all: fail_all.clone(),
        };

        tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((mut socket, _)) => {
                        let docs = docs.clone();
                        let blobs = blobs.clone();
                        let fail_all = fail_all.clone();
                        tokio::spawn(async move {
                            let Some((method, path, body)) = read_request(&mut socket).await
                            else {
                                return;
                            };
                            let (status, content_type, body) = if fail_all.load(Ordering::SeqCst)
                            {
                                (500, "text/plain", b"injected failure".to_vec())
                            } else {
                                route(&docs, &blobs, &method, &path, body)
                            };
                            let _ = write_response(&mut socket, status, content_type, &body).await;
                        });
                    }
                    Err(_) => break,
                }
            }
        });

        backend
    }

    pub fn document_endpoint(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub fn blob_endpoint(&self) -> String {
        format!("http://{}/v0", self.addr)
    }

    /// Force every subsequent request to fail with a 500.
    #[allow(dead_code)]
    pub fn set_failing(&self, failing: bool) {
        self.fail_all.store(failing, Ordering::SeqCst);
    }

    /// Number of stored documents, across all collections.
    #[allow(dead_code)]
    pub fn document_count(&self) -> usize {
        self.docs.lock().unwrap().len()
    }
}

fn route(
    docs: &Mutex<HashMap<String, serde_json::Value>>,
    blobs: &Mutex<HashMap<String, Vec<u8>>>,
    method: &str,
    path: &str,
    body: Vec<u8>,
) -> (u16, &'static str, Vec<u8>) {
    if let Some(rest) = path.strip_prefix("/v1/") {
        // rest is "{project}/{collection}" or "{project}/{collection}/{id}"
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        let mut docs = docs.lock().unwrap();
        return match (method, segments.len()) {
            ("GET", 2) => {
                let prefix = format!("{}/", rest.trim_end_matches('/'));
                let mut out = serde_json::Map::new();
                for (key, value) in docs.iter() {
                    if let Some(id) = key.strip_prefix(&prefix) {
                        out.insert(id.to_string(), value.clone());
                    }
                }
                json_response(200, serde_json::Value::Object(out))
            }
            ("GET", 3) => match docs.get(rest) {
                Some(value) => json_response(200, value.clone()),
                None => (404, "text/plain", b"not found".to_vec()),
            },
            ("PUT", 3) => match serde_json::from_slice(&body) {
                Ok(value) => {
                    docs.insert(rest.to_string(), value);
                    json_response(200, serde_json::json!({}))
                }
                Err(_) => (400, "text/plain", b"bad json".to_vec()),
            },
            ("DELETE", 3) => {
                if docs.remove(rest).is_some() {
                    json_response(200, serde_json::json!({}))
                } else {
                    (404, "text/plain", b"not found".to_vec())
                }
            }
            _ => (405, "text/plain", b"method not allowed".to_vec()),
        };
    }

    if let Some(rest) = path.strip_prefix("/v0/") {
        let mut blobs = blobs.lock().unwrap();
        return match method {
            "PUT" => {
                blobs.insert(rest.to_string(), body);
                json_response(200, serde_json::json!({}))
            }
            "GET" => match blobs.get(rest) {
                Some(bytes) => (200, "application/octet-stream", bytes.clone()),
                None => (404, "text/plain", b"not found".to_vec()),
            },
            "DELETE" => {
                if blobs.remove(rest).is_some() {
                    json_response(200, serde_json::json!({}))
                } else {
                    (404, "text/plain", b"not found".to_vec())
                }
            }
            _ => (405, "text/plain", b"method not allowed".to_vec()),
        };
    }

    (404, "text/plain", b"not found".to_vec())
}

fn json_response(status: u16, value: serde_json::Value) -> (u16, &'static str, Vec<u8>) {
    (status, "application/json", value.to_string().into_bytes())
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<(String, String, Vec<u8>)> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = find_header_end(&buffer) {
            break pos;
        }
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..n]);
    };

    let header_text = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = header_text.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let content_length = lines
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .next()
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buffer.len() < body_start + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }

    Some((method, path, buffer[body_start..body_start + content_length].to_vec()))
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|w| w == b"\r\n\r\n")
}

async fn write_response(
    socket: &mut tokio::net::TcpStream,
    status: u16,
    content_type: &str,
    body: &[u8],
) -> std::io::Result<()> {
    let status_text = match status {
        200 => "200 OK",
        400 => "400 Bad Request",
        404 => "404 Not Found",
        405 => "405 Method Not Allowed",
        500 => "500 Internal Server Error",
        _ => "200 OK",
    };
    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_text,
        content_type,
        body.len()
    );
    socket.write_all(header.as_bytes()).await?;
    socket.write_all(body).await?;
    socket.shutdown().await
}
