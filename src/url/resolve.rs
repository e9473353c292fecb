use crate::{UrlError, UrlResult};
use url::Url;

/// Resolves a candidate link against the page it was found on
///
/// Candidates that already carry a scheme separator (`://`) are returned
/// unchanged. Everything else is joined onto `base` with standard relative
/// reference rules, keeping any fragment.
///
/// Resolution is best-effort: if `base` does not parse or the join fails the
/// candidate comes back as-is and the download stage reports it as a failed
/// fetch.
///
/// # Examples
///
/// ```
/// use sumi_harvest::url::resolve_url;
///
/// assert_eq!(
///     resolve_url("http://x.test/a/", "pic.png"),
///     "http://x.test/a/pic.png"
/// );
/// assert_eq!(
///     resolve_url("http://x.test/a/", "https://cdn.test/pic.png"),
///     "https://cdn.test/pic.png"
/// );
/// ```
pub fn resolve_url(base: &str, candidate: &str) -> String {
    if candidate.contains("://") {
        return candidate.to_string();
    }

    match Url::parse(base).and_then(|base_url| base_url.join(candidate)) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            tracing::debug!("Could not resolve {} against {}: {}", candidate, base, e);
            candidate.to_string()
        }
    }
}

/// Parses and validates a seed URL
///
/// Only `http` and `https` seeds can be fetched.
pub fn parse_seed_url(seed: &str) -> UrlResult<Url> {
    let url = Url::parse(seed.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    Ok(url)
}
