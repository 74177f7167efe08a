#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::cell::Cell;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

use rcheckin::auth::Token;
use rcheckin::remote::CheckInApi;

pub fn rci() -> Command {
    let mut cmd = cargo_bin_cmd!("rcheckin");
    cmd.env_remove("RCHECKIN_TOKEN");
    cmd
}

/// Isolated config + log location inside a temp dir.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn config(&self) -> String {
        self.path("rcheckin.conf")
    }

    pub fn log(&self) -> String {
        self.path("check_in_log.json")
    }

    pub fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().to_string()
    }

    /// `rcheckin --config <tmp> --log <tmp> <args>`
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = rci();
        cmd.args(["--config", &self.config(), "--log", &self.log()]);
        cmd.args(args);
        cmd
    }
}

pub fn token() -> Token {
    Token::new("test-token-0123456789").expect("token")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("datetime")
}

/// Scripted remote API counting calls.
#[derive(Default)]
pub struct FakeApi {
    pub sign_in_ok: Cell<bool>,
    pub sign_out_ok: Cell<bool>,
    pub sign_ins: Cell<usize>,
    pub sign_outs: Cell<usize>,
}

impl FakeApi {
    pub fn succeeding() -> Self {
        let api = Self::default();
        api.sign_in_ok.set(true);
        api.sign_out_ok.set(true);
        api
    }

    pub fn failing() -> Self {
        Self::default()
    }
}

impl CheckInApi for FakeApi {
    fn sign_in(&self, _token: &Token) -> bool {
        self.sign_ins.set(self.sign_ins.get() + 1);
        self.sign_in_ok.get()
    }

    fn sign_out(&self, _token: &Token) -> bool {
        self.sign_outs.set(self.sign_outs.get() + 1);
        self.sign_out_ok.get()
    }
}

/// A one-shot HTTP server answering a single request with `status` and a
/// JSON `body`. The join handle yields the raw request text.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let url = format!("http://{}/api", listener.local_addr().expect("addr"));
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        // headers
        let header_end = loop {
            let n = stream.read(&mut chunk).expect("read");
            if n == 0 {
                break buf.len();
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find(&buf, b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|l| {
                let (k, v) = l.split_once(':')?;
                k.eq_ignore_ascii_case("content-length")
                    .then(|| v.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).expect("read body");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        stream.write_all(response.as_bytes()).expect("write");
        stream.flush().ok();
        String::from_utf8_lossy(&buf).to_string()
    });

    (url, handle)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// URL of a local port nothing listens on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}/api", addr)
}

pub fn temp_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
