use crate::extract::{ExtractorKind, FileKind};
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for Sumi-Harvest
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub harvest: HarvestConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// What to download, where, and how many at once
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Directory downloaded files are written to
    pub destination: PathBuf,

    /// Number of concurrent download workers
    pub parallelism: usize,

    /// Kinds of files to discover; empty means every known kind
    #[serde(rename = "file-kinds")]
    pub file_kinds: Vec<FileKind>,

    /// Link discovery strategy
    pub extractor: ExtractorKind,
}

impl HarvestConfig {
    /// Returns the requested kinds, falling back to every known kind
    pub fn effective_kinds(&self) -> Vec<FileKind> {
        if self.file_kinds.is_empty() {
            FileKind::all()
        } else {
            self.file_kinds.clone()
        }
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            destination: PathBuf::from("."),
            parallelism: 1,
            file_kinds: Vec::new(),
            extractor: ExtractorKind::default(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// `Name/Version`, or `Name/Version (+ContactURL)` when a contact URL is set.
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(url) => format!("{}/{} (+{})", self.crawler_name, self.crawler_version, url),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "SumiHarvest".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

/// HTTP client timeouts
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds, applied to the seed and every download
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// TCP connect timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
