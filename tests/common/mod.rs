#![allow(dead_code)]

pub mod mock_data;

use std::io::Write;
use std::process::Output;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::Value;
use tempfile::NamedTempFile;

/// Path of the compiled `roster` binary under test
pub fn roster_binary() -> &'static str {
    env!("CARGO_BIN_EXE_roster")
}

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    body: String,
    queries: Arc<Mutex<Vec<String>>>,
}

/// A people listing endpoint served from memory on an ephemeral port.
pub struct MockDirectory {
    pub base_url: String,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockDirectory {
    /// Serve `{ "results": people }` with status 200.
    pub async fn serve_people(people: Value) -> Self {
        let body = serde_json::json!({ "results": people }).to_string();
        Self::serve(StatusCode::OK, body).await
    }

    /// Serve a fixed status and body for every request to `/api`.
    pub async fn serve(status: StatusCode, body: String) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = ServerState {
            status,
            body,
            queries: Arc::clone(&queries),
        };

        let app = Router::new()
            .route("/api", get(listing))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("listener has an address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server failed");
        });

        MockDirectory {
            base_url: format!("http://{}/api", addr),
            queries,
        }
    }

    /// Raw query strings of every request received so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("query log poisoned").clone()
    }

    /// Write a config file pointing `roster` at this server.
    pub fn config_file(&self) -> NamedTempFile {
        config_file_for(&self.base_url)
    }
}

async fn listing(
    State(state): State<ServerState>,
    RawQuery(query): RawQuery,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    state
        .queries
        .lock()
        .expect("query log poisoned")
        .push(query.unwrap_or_default());
    (
        state.status,
        [("content-type", "application/json")],
        state.body.clone(),
    )
}

/// Write a config file with the given base URL.
pub fn config_file_for(base_url: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create config file");
    writeln!(file, "base_url: {}", base_url).expect("Failed to write config file");
    file
}

/// Run the binary with `args`, feeding `stdin`.
pub async fn run_roster(args: &[&str], stdin: &str) -> Output {
    use tokio::io::AsyncWriteExt;
    use tokio::process::Command;

    let mut child = Command::new(roster_binary())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .expect("Failed to execute roster command");

    let mut input = child.stdin.take().expect("stdin is piped");
    // The process may exit before reading everything
    let _ = input.write_all(stdin.as_bytes()).await;
    drop(input);

    child
        .wait_with_output()
        .await
        .expect("Failed to wait for roster")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
