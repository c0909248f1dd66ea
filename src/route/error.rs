#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// A constraint fails on its own, or clashes with an earlier one once
    /// assembled (e.g. a repeated named group).
    #[error("invalid constraint for parameter {name:?}: pattern = {pattern:?}")]
    Constraint {
        name: Box<str>,
        pattern: Box<str>,
        #[source]
        source: regex::Error,
    },

    /// The matcher fails even with every constraint replaced by the
    /// fallback pattern, so the literal segments are at fault.
    #[error("invalid route template: path = {path:?}")]
    Template {
        path: Box<str>,
        #[source]
        source: regex::Error,
    },

    /// A custom fallback or format pattern given to `RouteCompiler`.
    #[error("invalid compiler pattern: {pattern:?}")]
    Pattern {
        pattern: Box<str>,
        #[source]
        source: regex::Error,
    },
}

impl CompileError {
    /// The parameter whose constraint failed, if any.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::Constraint { name, .. } => Some(&**name),
            Self::Template { .. } | Self::Pattern { .. } => None,
        }
    }
}
