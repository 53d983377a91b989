#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Run the kafkalo binary in `cwd` with an isolated home directory.
pub fn run_cli(cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kafkalo"));
    cmd.args(args)
        .current_dir(cwd)
        .env("KAFKALO_HOME", cwd.join(".kafkalo-home"))
        .env_remove("KAFKALO_CONFIG")
        .env_remove("KAFKALO_SOPS_BIN")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("run kafkalo binary")
}

/// Run the binary and parse stdout as JSON, asserting success.
pub fn run_cli_json(cwd: &Path, args: &[&str]) -> serde_json::Value {
    let output = run_cli(cwd, args, &[]);
    assert!(
        output.status.success(),
        "kafkalo {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

pub fn write_file(dir: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

/// Canned Connect REST server answering `GET <path>` from a route table.
pub struct MockConnect {
    pub url: String,
    shutdown: Arc<AtomicBool>,
}

impl Drop for MockConnect {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }
}

pub fn start_mock_connect(routes: &[(&str, u16, &str)]) -> MockConnect {
    let routes: HashMap<String, (u16, String)> = routes
        .iter()
        .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
        .collect();
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_clone = shutdown.clone();

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let url = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());

    thread::spawn(move || {
        listener
            .set_nonblocking(true)
            .expect("Cannot set non-blocking");

        while !shutdown_clone.load(Ordering::SeqCst) {
            match listener.accept() {
                Ok((mut stream, _)) => {
                    stream.set_nonblocking(false).unwrap();
                    let mut reader = BufReader::new(stream.try_clone().unwrap());
                    let mut request_line = String::new();
                    let _ = reader.read_line(&mut request_line);
                    let path = request_line
                        .split_whitespace()
                        .nth(1)
                        .unwrap_or("/")
                        .to_string();

                    let mut header = String::new();
                    loop {
                        header.clear();
                        let _ = reader.read_line(&mut header);
                        if header == "\r\n" || header.is_empty() {
                            break;
                        }
                    }

                    let (status, body) = routes.get(&path).cloned().unwrap_or((
                        404,
                        r#"{"error_code":404,"message":"Not found"}"#.to_string(),
                    ));
                    let response = format!(
                        "HTTP/1.1 {} MOCK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes());
                }
                Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    MockConnect { url, shutdown }
}
