//! Crawl coordinator - the extract → resolve → fetch pipeline
//!
//! A crawl moves through fixed phases:
//! - fetch the seed page (failure aborts the crawl)
//! - extract candidate links and resolve them against the seed
//! - dispatch every resolved URL to a fixed pool of download workers
//! - wait for every worker, then aggregate the outcomes into a report

use crate::config::{validate, Config};
use crate::crawler::downloader::{download, DownloadOutcome};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::extract::{FileKind, LinkExtractor};
use crate::output::CrawlReport;
use crate::url::{parse_seed_url, resolve_url};
use crate::HarvestError;
use chrono::Utc;
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

/// Phases of a single crawl, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlPhase {
    FetchingSeed,
    Extracting,
    Dispatching,
    Aggregating,
    Done,
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FetchingSeed => "fetching seed",
            Self::Extracting => "extracting",
            Self::Dispatching => "dispatching",
            Self::Aggregating => "aggregating",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Main crawl coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
    extractor: Box<dyn LinkExtractor>,
    kinds: Vec<FileKind>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// The configuration is validated and the HTTP client is built up front,
    /// so a coordinator that exists is ready to crawl.
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(HarvestError)` - Invalid configuration or client setup failure
    pub fn new(config: Config) -> Result<Self, HarvestError> {
        validate(&config)?;

        let client = build_http_client(&config.user_agent, &config.http)?;
        let extractor = config.harvest.extractor.build();
        let kinds = config.harvest.effective_kinds();

        Ok(Self {
            config,
            client,
            extractor,
            kinds,
        })
    }

    /// Replaces the link discovery strategy
    pub fn with_extractor(mut self, extractor: Box<dyn LinkExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// The configuration this coordinator was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The file kinds this coordinator searches for
    pub fn kinds(&self) -> &[FileKind] {
        &self.kinds
    }

    /// Fetches the seed page and returns every resolved download URL
    ///
    /// URLs are returned in discovery order, duplicates included.
    pub async fn discover(&self, seed: &str) -> Result<Vec<String>, HarvestError> {
        let seed_url = parse_seed_url(seed)?;

        tracing::debug!("Phase: {}", CrawlPhase::FetchingSeed);
        let page = fetch_page(&self.client, seed_url.as_str()).await?;

        tracing::debug!("Phase: {}", CrawlPhase::Extracting);
        let urls: Vec<String> = self
            .extractor
            .extract(&page, &self.kinds)
            .map(|candidate| resolve_url(seed_url.as_str(), &candidate))
            .collect();

        tracing::info!(
            "Discovered {} file links on {} ({})",
            urls.len(),
            seed_url,
            self.kinds
                .iter()
                .map(FileKind::to_string)
                .collect::<Vec<_>>()
                .join(",")
        );

        Ok(urls)
    }

    /// Downloads every URL with a fixed pool of workers
    ///
    /// `min(parallelism, urls.len())` workers drain a shared queue. The call
    /// returns only after every worker has finished, with exactly one
    /// outcome per input URL. Outcome order is unspecified.
    pub async fn dispatch(&self, urls: Vec<String>) -> Result<Vec<DownloadOutcome>, HarvestError> {
        let total = urls.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        tracing::debug!("Phase: {}", CrawlPhase::Dispatching);

        let (sender, receiver) = mpsc::unbounded_channel();
        for url in urls {
            sender
                .send(url)
                .map_err(|_| HarvestError::Worker("download queue closed".to_string()))?;
        }
        drop(sender);

        let queue = Arc::new(Mutex::new(receiver));
        let worker_count = self.config.harvest.parallelism.min(total);
        let destination: Arc<PathBuf> = Arc::new(self.config.harvest.destination.clone());
        let mut workers = JoinSet::new();

        tracing::info!("Downloading {} files with {} workers", total, worker_count);

        for worker_id in 0..worker_count {
            let queue = Arc::clone(&queue);
            let client = self.client.clone();
            let destination = Arc::clone(&destination);

            workers.spawn(async move {
                let mut outcomes = Vec::new();
                loop {
                    let next = queue.lock().await.recv().await;
                    let Some(url) = next else {
                        break;
                    };
                    outcomes.push(download(&client, &url, &destination).await);
                }
                tracing::debug!("Worker {} finished {} downloads", worker_id, outcomes.len());
                outcomes
            });
        }

        let mut outcomes = Vec::with_capacity(total);
        while let Some(joined) = workers.join_next().await {
            let batch = joined.map_err(|e| HarvestError::Worker(e.to_string()))?;
            outcomes.extend(batch);
        }

        Ok(outcomes)
    }

    /// Runs a complete crawl of one seed page
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - Every discovered file was attempted
    /// * `Err(HarvestError)` - The seed page could not be fetched; no report
    pub async fn crawl(&self, seed: &str) -> Result<CrawlReport, HarvestError> {
        let started_at = Utc::now();
        let start = Instant::now();

        let urls = self.discover(seed).await?;
        let outcomes = self.dispatch(urls).await?;

        tracing::debug!("Phase: {}", CrawlPhase::Aggregating);
        let report = CrawlReport::from_outcomes(&outcomes, started_at, start.elapsed());

        tracing::info!(
            "Crawl of {} complete: {} of {} files downloaded",
            seed,
            report.files,
            report.attempted
        );
        tracing::debug!("Phase: {}", CrawlPhase::Done);

        Ok(report)
    }
}

/// Runs a crawl with a freshly built coordinator
///
/// # Example
///
/// ```no_run
/// use sumi_harvest::config::Config;
/// use sumi_harvest::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = crawl(Config::default(), "https://example.com/gallery").await?;
/// println!("{}", report);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: Config, seed: &str) -> Result<CrawlReport, HarvestError> {
    Coordinator::new(config)?.crawl(seed).await
}
