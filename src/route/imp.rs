use super::metadata::Metadata;
use super::CompiledRoute;

use std::fmt;

impl CompiledRoute {
    /// Normalized template, e.g. `/labels/:id/edit`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameter names in template order.
    pub fn parameters(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.parameters.iter().map(|p| &**p)
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn controller(&self) -> Option<&str> {
        self.metadata.get("controller")
    }

    pub fn action(&self) -> Option<&str> {
        self.metadata.get("action")
    }

    /// The request line minus the protocol, e.g. `GET /labels/:id/edit`.
    pub fn request_line(&self) -> String {
        self.to_string()
    }

    /// Source of the anchored matcher.
    pub fn matcher_source(&self) -> &str {
        self.matcher.as_str()
    }

    /// Returns `true` if the whole of `path` is accepted by this route.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

impl PartialEq for CompiledRoute {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.verb == other.verb
            && self.parameters == other.parameters
            && self.metadata == other.metadata
            && self.matcher.as_str() == other.matcher.as_str()
    }
}

impl Eq for CompiledRoute {}

impl fmt::Display for CompiledRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.path)
    }
}
