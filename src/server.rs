//! HTTP trigger for the export pass.
//!
//! Exposes `GET /generate-commits`, which runs a full export of the
//! configured repository, and `GET /fullscreen.js`, which serves the
//! fullscreen helper snippet. There is no authentication; bind to a
//! loopback address.

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::assets::FULLSCREEN_JS;
use crate::export::export;

/// Message returned with a successful export.
pub const SUCCESS_MESSAGE: &str = "HTML files generated successfully.";

/// Shared service state.
#[derive(Debug)]
pub struct ServerState {
    repo: PathBuf,
    output: PathBuf,
    // Serializes exports; two runs must not interleave writes
    export_lock: Arc<Mutex<()>>,
}

impl ServerState {
    pub fn new(repo: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            output: output.into(),
            export_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Successful export payload.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub message: String,
    pub output: String,
    pub files_written: usize,
}

/// Failed export payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Builds the service router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/generate-commits", get(generate_commits))
        .route("/fullscreen.js", get(fullscreen_script))
        .with_state(Arc::new(state))
}

/// Runs `job` on the blocking pool while holding `lock`.
///
/// The guard moves into the blocking task, so the lock stays held until
/// the job returns even if the caller stops waiting on the handle.
async fn run_exclusive<F, T>(lock: Arc<Mutex<()>>, job: F) -> JoinHandle<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let guard = lock.lock_owned().await;
    tokio::task::spawn_blocking(move || {
        let _guard = guard;
        job()
    })
}

async fn generate_commits(State(state): State<Arc<ServerState>>) -> Response {
    let repo = state.repo.clone();
    let output = state.output.clone();
    let task = run_exclusive(Arc::clone(&state.export_lock), move || {
        export(repo, output)
    })
    .await;
    let result = task.await;

    match result {
        Ok(Ok(report)) => Json(GenerateResponse {
            message: SUCCESS_MESSAGE.to_string(),
            output: report.log().to_string(),
            files_written: report.files_written(),
        })
        .into_response(),
        Ok(Err(err)) => {
            warn!(error = %err, "Export failed");
            error_response(err.to_string())
        }
        Err(join_err) => {
            warn!(error = %join_err, "Export task aborted");
            error_response(join_err.to_string())
        }
    }
}

fn error_response(error: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error }),
    )
        .into_response()
}

async fn fullscreen_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        FULLSCREEN_JS,
    )
}

/// Listens on the loopback interface until the process is stopped.
///
/// # Errors
///
/// Returns error if the port cannot be bound or the server fails.
pub async fn serve(state: ServerState, port: u16) -> Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(repo = %state.repo.display(), "Server running at http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .context("Server terminated")?;

    Ok(())
}
