//! Aggregate statistics for one crawl

use crate::crawler::DownloadOutcome;
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

/// Bytes in one reported megabyte
pub const BYTES_PER_MEGABYTE: f64 = (1u64 << 20) as f64;

/// A download that produced no file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDownload {
    pub url: String,
    pub cause: String,
}

/// Final statistics of one crawl
///
/// Built once from the complete set of outcomes, after every download has
/// finished.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Number of files downloaded successfully
    pub files: usize,

    /// Total bytes written across all successful downloads
    pub total_bytes: u64,

    /// Number of downloads attempted (successes plus failures)
    pub attempted: usize,

    /// Every failed download, unordered
    pub failures: Vec<FailedDownload>,

    /// Wall-clock time from seed fetch to the last completed download
    pub elapsed: Duration,

    /// When the crawl started
    pub started_at: DateTime<Utc>,

    /// When the last download completed
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Aggregates a complete set of outcomes
    pub fn from_outcomes(
        outcomes: &[DownloadOutcome],
        started_at: DateTime<Utc>,
        elapsed: Duration,
    ) -> Self {
        let mut files = 0;
        let mut total_bytes = 0u64;
        let mut failures = Vec::new();

        for outcome in outcomes {
            match outcome {
                DownloadOutcome::Success { bytes, .. } => {
                    files += 1;
                    total_bytes += bytes;
                }
                DownloadOutcome::Failure { url, cause } => failures.push(FailedDownload {
                    url: url.clone(),
                    cause: cause.to_string(),
                }),
            }
        }

        let finished_at = started_at
            + chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero());

        Self {
            files,
            total_bytes,
            attempted: outcomes.len(),
            failures,
            elapsed,
            started_at,
            finished_at,
        }
    }

    /// Total downloaded size in megabytes (2^20 bytes)
    pub fn megabytes(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_MEGABYTE
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Throughput in megabytes per second
    ///
    /// Returns `None` when no measurable time has passed.
    pub fn bandwidth(&self) -> Option<f64> {
        let secs = self.elapsed_secs();
        if secs > 0.0 {
            Some(self.megabytes() / secs)
        } else {
            None
        }
    }
}

impl fmt::Display for CrawlReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Files Downloaded: {}", self.files)?;
        writeln!(f, "Bytes Downloaded: {:.2} MB", self.megabytes())?;
        writeln!(f, "Elapsed Time:     {:.2} s", self.elapsed_secs())?;
        match self.bandwidth() {
            Some(rate) => write!(f, "Bandwidth:        {:.2} MB/s", rate),
            None => write!(f, "Bandwidth:        n/a"),
        }
    }
}

/// Prints a report to stdout, followed by any failed downloads
pub fn print_report(report: &CrawlReport) {
    println!("{}", report);

    if !report.failures.is_empty() {
        println!();
        println!(
            "Failed Downloads: {} of {}",
            report.failures.len(),
            report.attempted
        );
        for failure in &report.failures {
            println!("  - {} ({})", failure.url, failure.cause);
        }
    }
}
