//! Single-file download stage
//!
//! [`download`] never returns an error. Every way a download can go wrong is
//! folded into [`DownloadOutcome::Failure`] so one bad URL cannot disturb the
//! other workers.

use crate::url::file_name;
use reqwest::Client;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result of one download attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file was fetched and written in full
    Success {
        /// The URL that was fetched
        url: String,
        /// Where the body was written
        path: PathBuf,
        /// Number of bytes written
        bytes: u64,
    },

    /// The fetch or the write failed
    Failure {
        /// The URL that was attempted
        url: String,
        /// Why the attempt failed
        cause: FailureCause,
    },
}

impl DownloadOutcome {
    /// The URL this outcome belongs to
    pub fn url(&self) -> &str {
        match self {
            Self::Success { url, .. } | Self::Failure { url, .. } => url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Why a download produced no file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    #[error("network error: {0}")]
    Transport(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("failed to write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    #[error("URL has no file name to save under")]
    MissingFileName,
}

/// Downloads one URL into `destination`
///
/// The destination directory is created if needed. The body is written to
/// `destination/<final path segment of url>`, replacing any existing file of
/// that name. No retries are made.
pub async fn download(client: &Client, url: &str, destination: &Path) -> DownloadOutcome {
    match try_download(client, url, destination).await {
        Ok((path, bytes)) => {
            tracing::debug!("Saved {} ({} bytes) to {}", url, bytes, path.display());
            DownloadOutcome::Success {
                url: url.to_string(),
                path,
                bytes,
            }
        }
        Err(cause) => {
            tracing::warn!("Failed to download {}: {}", url, cause);
            DownloadOutcome::Failure {
                url: url.to_string(),
                cause,
            }
        }
    }
}

async fn try_download(
    client: &Client,
    url: &str,
    destination: &Path,
) -> Result<(PathBuf, u64), FailureCause> {
    tokio::fs::create_dir_all(destination)
        .await
        .map_err(|e| FailureCause::Write {
            path: destination.to_path_buf(),
            message: e.to_string(),
        })?;

    let name = file_name(url).ok_or(FailureCause::MissingFileName)?;
    let path = destination.join(name);

    tracing::info!("Downloading {}...", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FailureCause::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FailureCause::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FailureCause::Transport(e.to_string()))?;

    tokio::fs::write(&path, &body)
        .await
        .map_err(|e| FailureCause::Write {
            path: path.clone(),
            message: e.to_string(),
        })?;

    Ok((path, body.len() as u64))
}
