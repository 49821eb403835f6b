//! Blocking HTTP client for the scoreboard feed.
//!
//! The feed is served as JSONP: `loadScoreboard({"games": [...]})`. The
//! wrapper is stripped before decoding.

use std::thread;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::error::FeedError;
use super::models::GameRecord;

/// How many times a cycle may hit the network before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    /// Delay before the first retry; doubled for every further retry
    pub backoff: Duration,
}

impl RetryPolicy {
    fn delay(&self, retry: u32) -> Duration {
        self.backoff.saturating_mul(1u32 << retry.min(16))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            attempts: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Scoreboard feed client
pub struct FeedClient {
    http: Client,
    url: String,
    retry: RetryPolicy,
}

impl FeedClient {
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("nhl-ticker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FeedError::Client)?;
        Ok(FeedClient {
            http,
            url: url.into(),
            retry,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode one scoreboard snapshot
    pub fn fetch(&self) -> Result<Vec<GameRecord>, FeedError> {
        let body = self.fetch_body()?;
        decode_snapshot(&body)
    }

    fn fetch_body(&self) -> Result<String, FeedError> {
        let attempts = self.retry.attempts.max(1);
        let mut retry = 0;
        loop {
            match self.get_once() {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() && retry + 1 < attempts => {
                    let delay = self.retry.delay(retry);
                    warn!(
                        "Fetch attempt {} of {attempts} failed, retrying in {delay:?}: {e}",
                        retry + 1
                    );
                    thread::sleep(delay);
                    retry += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn get_once(&self) -> Result<String, FeedError> {
        let before = Instant::now();
        let body = self
            .http
            .get(&self.url)
            .send()
            .and_then(|rsp| rsp.error_for_status())
            .and_then(|rsp| rsp.text())
            .map_err(|source| FeedError::Fetch {
                url: self.url.clone(),
                source,
            })?;
        debug!("Fetched {} ({} bytes) in {:.2?}", self.url, body.len(), before.elapsed());
        Ok(body)
    }
}

/// Remove the JSONP function-call decoration, if any
pub fn strip_wrapper(body: &str) -> &str {
    let body = body.trim();
    if body.starts_with('{') || body.starts_with('[') {
        return body;
    }
    match (body.find('('), body.rfind(')')) {
        (Some(open), Some(close)) if open < close => &body[open + 1..close],
        _ => body,
    }
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    games: Vec<serde_json::Value>,
}

/// Decode a (possibly wrapped) payload into game records, in feed order.
///
/// Records with missing or ill-typed fields are logged and skipped.
pub fn decode_snapshot(body: &str) -> Result<Vec<GameRecord>, FeedError> {
    let snapshot: Snapshot = serde_json::from_str(strip_wrapper(body))?;
    let mut records = Vec::with_capacity(snapshot.games.len());
    for (index, value) in snapshot.games.into_iter().enumerate() {
        match serde_json::from_value::<GameRecord>(value) {
            Ok(record) => records.push(record),
            Err(source) => warn!("Skipping record: {}", FeedError::Field { index, source }),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};

    const GAME: &str = r#"{"id": "2023020123", "ts": "END 2nd", "tsc": "progress", "bs": "LIVE",
        "atn": "Boston", "atv": "bruins", "ats": "1", "atc": "",
        "htn": "Detroit", "htv": "redwings", "hts": "2", "htc": ""}"#;

    fn read_request(stream: &mut TcpStream) {
        let mut buf = [0u8; 1024];
        let mut seen = Vec::new();
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            seen.extend_from_slice(&buf[..n]);
            if seen.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
    }

    /// Serve the given (status line, body) pairs, one per connection
    fn serve(responses: Vec<(&'static str, String)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                read_request(&mut stream);
                let rsp = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: text/javascript\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(rsp.as_bytes()).unwrap();
            }
        });
        format!("http://{addr}/GameData/scoreboard.jsonp")
    }

    fn no_backoff(attempts: u32) -> RetryPolicy {
        RetryPolicy {
            attempts,
            backoff: Duration::ZERO,
        }
    }

    #[test]
    fn test_strip_wrapper() {
        assert_eq!(strip_wrapper("loadScoreboard({\"games\":[]})"), "{\"games\":[]}");
        assert_eq!(strip_wrapper("  loadScoreboard({})\n"), "{}");
        assert_eq!(strip_wrapper("{\"games\":[]}"), "{\"games\":[]}");
    }

    #[test]
    fn test_decode_keeps_feed_order() {
        let body = format!(
            "loadScoreboard({{\"games\": [{GAME}, {}]}})",
            GAME.replace("2023020123", "2023020124")
        );
        let records = decode_snapshot(&body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "2023020123");
        assert_eq!(records[1].id, "2023020124");
    }

    #[test]
    fn test_decode_skips_malformed_record() {
        let body = format!("loadScoreboard({{\"games\": [{{\"id\": 1}}, {GAME}]}})");
        let records = decode_snapshot(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].home_name, "redwings");
    }

    #[test]
    fn test_decode_without_games_is_empty() {
        assert!(decode_snapshot("loadScoreboard({})").unwrap().is_empty());
    }

    #[test]
    fn test_decode_error() {
        let err = decode_snapshot("loadScoreboard({\"games\": [)").unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_fetch_retries_after_server_error() {
        let url = serve(vec![
            ("503 Service Unavailable", String::new()),
            ("200 OK", format!("loadScoreboard({{\"games\": [{GAME}]}})")),
        ]);
        let client = FeedClient::new(url, Duration::from_secs(5), no_backoff(2)).unwrap();
        let records = client.fetch().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].clock, "END 2nd");
    }

    #[test]
    fn test_fetch_gives_up_after_last_attempt() {
        let url = serve(vec![("500 Internal Server Error", String::new())]);
        let client = FeedClient::new(url, Duration::from_secs(5), no_backoff(1)).unwrap();
        let err = client.fetch().unwrap_err();
        assert!(matches!(err, FeedError::Fetch { .. }));
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy {
            attempts: 4,
            backoff: Duration::from_secs(1),
        };
        assert_eq!(policy.delay(0), Duration::from_secs(1));
        assert_eq!(policy.delay(1), Duration::from_secs(2));
        assert_eq!(policy.delay(2), Duration::from_secs(4));
    }
}
