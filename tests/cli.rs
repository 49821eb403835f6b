use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use assert_cmd::Command;
use predicates::prelude::*;

const SCOREBOARD: &str = r#"loadScoreboard({"games": [
    {"id": 2023020500, "ts": "TODAY", "tsc": "pre", "bs": "7:00 PM ET",
     "atn": "NY Islanders", "atv": "islanders", "ats": "", "atc": "",
     "htn": "Montreal", "htv": "canadiens", "hts": "", "htc": ""},
    {"id": 2023020501, "ts": "END 2nd", "tsc": "progress", "bs": "LIVE",
     "atn": "Columbus", "atv": "bluejackets", "ats": "2", "atc": "",
     "htn": "Toronto", "htv": "mapleleafs", "hts": "1", "htc": ""}
]})"#;

/// Serve `body` to every connection on a local port
fn serve(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut buf = [0u8; 2048];
            let mut seen = Vec::new();
            while let Ok(n) = stream.read(&mut buf) {
                if n == 0 {
                    break;
                }
                seen.extend_from_slice(&buf[..n]);
                if seen.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let rsp = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/javascript\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(rsp.as_bytes());
        }
    });
    format!("http://{addr}/GameData/RegularSeasonScoreboardv3.jsonp")
}

#[test]
fn help_exits_without_fetching() {
    Command::cargo_bin("nhl-ticker")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--test"));
}

#[test]
fn unknown_arguments_do_not_stop_a_run() {
    let url = serve(SCOREBOARD);
    Command::cargo_bin("nhl-ticker")
        .unwrap()
        .args(["--test", "--url", &url, "--retries", "1", "--bogus", "stray", "-tx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New York Islanders @ Montréal Canadiens"))
        .stdout(predicate::str::contains("Blue Jackets 2 - 1 Maple Leafs"));
}

#[test]
fn single_shot_renders_scoreboard() {
    let url = serve(SCOREBOARD);
    Command::cargo_bin("nhl-ticker")
        .unwrap()
        .args(["--test", "--url", &url, "--retries", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New York Islanders @ Montréal Canadiens"))
        .stdout(predicate::str::contains("(TODAY, 7:00 PM ET"))
        .stdout(predicate::str::contains("Columbus Blue Jackets @ Toronto Maple Leafs"))
        .stdout(predicate::str::contains(
            "(END 2nd PERIOD, 18.0 minutes remaining in the intermission)",
        ))
        .stdout(predicate::str::contains("Blue Jackets 2 - 1 Maple Leafs"));
}

#[test]
fn single_shot_fails_when_feed_is_unreachable() {
    // Grab a free port, then close it so the connection is refused
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    Command::cargo_bin("nhl-ticker")
        .unwrap()
        .args(["-t", "--retries", "1", "--timeout", "2"])
        .arg("--url")
        .arg(format!("http://127.0.0.1:{port}/scoreboard.jsonp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load the scoreboard"));
}
