//! Minimal HTTP/1.1 server for integration tests.
//!
//! Every GET is answered by a handler closure that sees the path and the
//! decoded query parameters. Requests are recorded (path + raw query) so
//! tests can assert which upstream pages were hit and in what order.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// What the handler wants sent back.
pub enum Reply {
    Ok(String),
    Status(u16),
    /// Accept the request and never answer (for timeout tests).
    Stall,
}

pub struct MockServer {
    /// Base URL with trailing slash, e.g. "http://127.0.0.1:12345/".
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base, path_and_query.trim_start_matches('/'))
    }
}

/// Starts a server in a background thread. The handler receives the base
/// URL too, so it can build absolute `next` links. Runs until the process exits.
pub fn start<H>(handler: H) -> MockServer
where
    H: Fn(&str, &str, &HashMap<String, String>) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{}/", port);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let handler = Arc::new(handler);

    let thread_base = base.clone();
    let thread_requests = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let handler = Arc::clone(&handler);
            let requests = Arc::clone(&thread_requests);
            let base = thread_base.clone();
            thread::spawn(move || handle(stream, &base, handler.as_ref(), &requests));
        }
    });

    MockServer { base, requests }
}

fn handle<H>(mut stream: TcpStream, base: &str, handler: &H, requests: &Mutex<Vec<String>>)
where
    H: Fn(&str, &str, &HashMap<String, String>) -> Reply,
{
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(request) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");
    requests.lock().unwrap().push(target.to_string());

    let (path, raw_query) = target.split_once('?').unwrap_or((target, ""));
    let params: HashMap<String, String> = url::form_urlencoded::parse(raw_query.as_bytes())
        .into_owned()
        .collect();

    let (status, body) = match handler(base, path, &params) {
        Reply::Ok(body) => ("200 OK".to_string(), body),
        Reply::Status(code) => (format!("{} Error", code), String::new()),
        Reply::Stall => {
            thread::sleep(Duration::from_secs(5));
            return;
        }
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
