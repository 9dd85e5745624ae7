//! Deciding where a graph document comes from

use std::path::PathBuf;

/// Where a graph document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Anything starting with the literal `http`.
    Remote { url: String, cache_key: String },
    Local(PathBuf),
}

impl Source {
    /// Classify a source string.
    ///
    /// This is a prefix test, not URL validation: `httpbin.json` is remote,
    /// `HTTP://host/g.json` is local.
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http") {
            Source::Remote {
                url: source.to_string(),
                cache_key: depgraph_fetch::cache_key_for(source).to_string(),
            }
        } else {
            Source::Local(PathBuf::from(source))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Remote { .. })
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Remote { url, .. } => f.write_str(url),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}
