//! Content-type inference from asset file names.

use std::{fmt, path::Path};

/// Content type registered alongside an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Html,
    JavaScript,
    Css,
    /// Fallback for every unrecognised extension.
    Plain,
}

impl ContentType {
    /// Infer the content type from the path's suffix.
    ///
    /// Matching is an exact, case-sensitive suffix test on the path as given,
    /// so `INDEX.HTML` is [`ContentType::Plain`] and so is `a.js/`.
    pub fn from_path(path: &Path) -> Self {
        Self::from_suffix(path.as_os_str().as_encoded_bytes())
    }

    fn from_suffix(name: &[u8]) -> Self {
        if name.ends_with(b".html") {
            Self::Html
        } else if name.ends_with(b".js") {
            Self::JavaScript
        } else if name.ends_with(b".css") {
            Self::Css
        } else {
            Self::Plain
        }
    }

    /// MIME string written into the generated registration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::JavaScript => "application/javascript",
            Self::Css => "text/css",
            Self::Plain => "text/plain",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(path: &str) -> &'static str {
        ContentType::from_path(Path::new(path)).as_str()
    }

    #[test]
    fn test_known_extensions() {
        assert_eq!(infer("nfsd/ui/index.html"), "text/html");
        assert_eq!(infer("nfsd/ui/app.js"), "application/javascript");
        assert_eq!(infer("nfsd/ui/style.css"), "text/css");
    }

    #[test]
    fn test_unknown_extensions_fall_back_to_plain() {
        assert_eq!(infer("nfsd/ui/static-content.py"), "text/plain");
        assert_eq!(infer("nfsd/ui/logo.png"), "text/plain");
        assert_eq!(infer("nfsd/ui/README"), "text/plain");
        assert_eq!(infer("nfsd/ui/page.htm"), "text/plain");
        assert_eq!(infer("nfsd/ui/app.json"), "text/plain");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(infer("nfsd/ui/INDEX.HTML"), "text/plain");
        assert_eq!(infer("nfsd/ui/App.Js"), "text/plain");
        assert_eq!(infer("nfsd/ui/site.CSS"), "text/plain");
    }

    #[test]
    fn test_suffix_without_stem() {
        // an exact suffix match, like the file name ".js" itself
        assert_eq!(infer("nfsd/ui/.js"), "application/javascript");
        assert_eq!(infer("nfsd/ui/archive.html.gz"), "text/plain");
    }

    #[test]
    fn test_trailing_separator_is_not_an_extension() {
        assert_eq!(infer("nfsd/ui/a.js/"), "text/plain");
        assert_eq!(infer("nfsd/ui/page.html/"), "text/plain");
    }

    #[test]
    fn test_inference_is_stable() {
        for path in ["a.html", "b.js", "c.css", "d.txt", "e"] {
            assert_eq!(infer(path), infer(path));
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ContentType::JavaScript.to_string(), "application/javascript");
    }
}
