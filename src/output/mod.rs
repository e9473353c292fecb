//! Output module for crawl results
//!
//! A [`CrawlReport`] is produced once per crawl after every download has
//! completed, and printed by the binary.

mod report;

pub use report::{print_report, CrawlReport, FailedDownload, BYTES_PER_MEGABYTE};
