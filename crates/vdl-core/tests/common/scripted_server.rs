//! Minimal HTTP/1.1 server for integration tests.
//!
//! Plays back one scripted reply per request (then a fallback reply forever)
//! and counts requests. Connections are served one at a time, in order.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with this body.
    Ok(Vec<u8>),
    /// Given status with a short text body.
    Status(u16),
    /// 200 that advertises `claimed_len` bytes but closes after `body`.
    Truncated { body: Vec<u8>, claimed_len: usize },
    /// 302 to another path on the same server.
    Redirect(&'static str),
}

pub struct ScriptedServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl ScriptedServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    #[allow(dead_code)] // not every test binary follows redirects
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches('/'))
    }
}

/// Serve `script` in order, then `fallback` for every further request.
pub fn start(script: Vec<Reply>, fallback: Reply) -> ScriptedServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    let script = Arc::new(Mutex::new(VecDeque::from(script)));
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let reply = script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| fallback.clone());
            if read_request(&stream) {
                hits_srv.fetch_add(1, Ordering::SeqCst);
                respond(stream, &reply);
            }
        }
    });
    ScriptedServer {
        url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

/// Always serve `body` with 200.
pub fn serve(body: &[u8]) -> ScriptedServer {
    start(Vec::new(), Reply::Ok(body.to_vec()))
}

/// Reads up to the end of the request head. Returns false if nothing usable arrived.
fn read_request(mut stream: &TcpStream) -> bool {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return false,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    true
}

fn respond(mut stream: TcpStream, reply: &Reply) {
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let (head, body): (String, Vec<u8>) = match reply {
        Reply::Ok(body) => (
            format!("HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n", body.len()),
            body.clone(),
        ),
        Reply::Status(code) => {
            let body = format!("status {}", code).into_bytes();
            (
                format!(
                    "HTTP/1.1 {} Scripted\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    code,
                    body.len()
                ),
                body,
            )
        }
        Reply::Truncated { body, claimed_len } => (
            format!("HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n", claimed_len),
            body.clone(),
        ),
        Reply::Redirect(location) => (
            format!(
                "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                location
            ),
            Vec::new(),
        ),
    };
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
    let _ = stream.flush();
}
