//! # Image Sources
//!
//! Image and avatar URLs are opaque strings. Whether one can be shown is
//! decided by an `ImageSource`, supplied by whoever hosts the interface.
//! Renderers ask before drawing an image marker and fall back to initials
//! when the answer is no.

/// Decides whether an image reference can be displayed.
pub trait ImageSource {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// True if `url` can be loaded and shown.
    fn resolves(&self, url: &str) -> bool;
}

/// Accepts any non-empty `http://` or `https://` URL.
#[derive(Debug, Default, Clone, Copy)]
pub struct UrlImageSource;

impl ImageSource for UrlImageSource {
    fn name(&self) -> &str {
        "url"
    }

    fn resolves(&self, url: &str) -> bool {
        let url = url.trim();
        ["https://", "http://"]
            .iter()
            .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme))
    }
}

/// Resolves nothing. Every avatar falls back to initials.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoImages;

impl ImageSource for NoImages {
    fn name(&self) -> &str {
        "none"
    }

    fn resolves(&self, _url: &str) -> bool {
        false
    }
}

/// Resolve an optional reference; `None` never resolves.
pub fn resolves_opt(source: &dyn ImageSource, url: Option<&str>) -> bool {
    url.is_some_and(|u| source.resolves(u))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_source_accepts_http_and_https() {
        let source = UrlImageSource;
        assert!(source.resolves("https://i.pravatar.cc/40?u=a"));
        assert!(source.resolves("http://example.com/a.png"));
    }

    #[test]
    fn url_source_rejects_empty_and_bare_scheme() {
        let source = UrlImageSource;
        assert!(!source.resolves(""));
        assert!(!source.resolves("   "));
        assert!(!source.resolves("https://"));
        assert!(!source.resolves("#/profile/x"));
    }

    #[test]
    fn missing_reference_never_resolves() {
        assert!(!resolves_opt(&UrlImageSource, None));
        assert!(resolves_opt(&UrlImageSource, Some("https://x.y/z")));
        assert!(!resolves_opt(&NoImages, Some("https://x.y/z")));
    }
}
