//! URL handling module for Sumi-Harvest
//!
//! This module resolves candidate links against the seed page, validates
//! seed URLs, and derives on-disk file names from download URLs.

mod filename;
mod resolve;

pub use filename::file_name;
pub use resolve::{parse_seed_url, resolve_url};
