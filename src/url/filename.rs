use url::Url;

/// Derives the on-disk file name for a download URL
///
/// The name is the final path segment of the URL. Query strings and
/// fragments never contribute to it. Returns `None` when the URL does not
/// parse or its path ends without a segment (e.g. `https://host/dir/`).
///
/// # Examples
///
/// ```
/// use sumi_harvest::url::file_name;
///
/// assert_eq!(
///     file_name("https://example.com/media/pic.png?size=large#top"),
///     Some("pic.png".to_string())
/// );
/// assert_eq!(file_name("https://example.com/media/"), None);
/// ```
pub fn file_name(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.next_back()?;

    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }

    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(file_name("http://x.test/a/pic.png"), Some("pic.png".to_string()));
    }

    #[test]
    fn test_query_and_fragment_excluded() {
        assert_eq!(
            file_name("http://x.test/doc.pdf?download=1#page=3"),
            Some("doc.pdf".to_string())
        );
    }

    #[test]
    fn test_same_basename_different_dirs() {
        assert_eq!(file_name("http://x.test/a/img.jpg"), file_name("http://x.test/b/img.jpg"));
    }

    #[test]
    fn test_trailing_slash_has_no_name() {
        assert_eq!(file_name("http://x.test/a/"), None);
        assert_eq!(file_name("http://x.test"), None);
    }

    #[test]
    fn test_unparseable_url() {
        assert_eq!(file_name("pic.png"), None);
    }

    #[test]
    fn test_encoded_name_kept_encoded() {
        assert_eq!(
            file_name("http://x.test/my%20song.mp3"),
            Some("my%20song.mp3".to_string())
        );
    }
}
