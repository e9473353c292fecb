//! Crawler module: seed fetching, downloading, and crawl coordination
//!
//! This module contains the core pipeline, including:
//! - HTTP client construction and the seed page fetch
//! - The per-file download stage
//! - The coordinator that fans downloads out to a worker pool and back in

mod coordinator;
mod downloader;
mod fetcher;

pub use coordinator::{crawl, Coordinator, CrawlPhase};
pub use downloader::{download, DownloadOutcome, FailureCause};
pub use fetcher::{build_http_client, fetch_page};
