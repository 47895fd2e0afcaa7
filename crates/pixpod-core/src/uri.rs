//! Small URI helpers for the pod's filesystem-like layout.

use url::Url;

/// The document a resource lives in: the URI with any fragment dropped.
///
/// A user's identifier is usually `<profile-doc>#me`; loading it means
/// loading the profile document.
pub fn document_of(uri: &str) -> String {
    uri.split('#').next().unwrap_or(uri).to_string()
}

/// Last non-empty path segment, for folder URIs with or without a trailing
/// slash.
pub fn last_segment(uri: &str) -> Option<String> {
    let url = Url::parse(uri).ok()?;
    url.path_segments()?
        .rev()
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}

pub fn with_trailing_slash(uri: &str) -> String {
    if uri.ends_with('/') {
        uri.to_string()
    } else {
        format!("{uri}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_of_strips_fragments() {
        assert_eq!(
            document_of("http://bob.example.org/profile/card#me"),
            "http://bob.example.org/profile/card"
        );
        assert_eq!(
            document_of("http://bob.example.org/profile/card"),
            "http://bob.example.org/profile/card"
        );
    }

    #[test]
    fn last_segment_handles_folders_and_files() {
        assert_eq!(
            last_segment("http://bob.example.org/pix/images/").as_deref(),
            Some("images")
        );
        assert_eq!(
            last_segment("http://bob.example.org/pix/images/1.ttl").as_deref(),
            Some("1.ttl")
        );
        assert_eq!(last_segment("http://bob.example.org/"), None);
        assert_eq!(last_segment("not a url"), None);
    }

    #[test]
    fn trailing_slash_is_added_once() {
        assert_eq!(with_trailing_slash("http://e.org/pix"), "http://e.org/pix/");
        assert_eq!(with_trailing_slash("http://e.org/pix/"), "http://e.org/pix/");
    }
}
