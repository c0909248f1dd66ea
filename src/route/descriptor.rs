use super::metadata::Metadata;
use crate::strmap::StrMap;

/// One piece of a pre-segmented route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Text matched verbatim.
    Literal(Box<str>),
    /// A named parameter, rendered as `:name`.
    Parameter(Box<str>),
    /// Optional trailing `.ext` suffix.
    Format,
}

/// The host router's description of a single route.
#[derive(Debug, Clone, Default)]
pub struct RouteDescriptor {
    pub(super) verb: Box<str>,
    pub(super) parts: Vec<TemplatePart>,
    pub(super) constraints: StrMap<Box<str>>,
    pub(super) metadata: Metadata,
}

impl RouteDescriptor {
    pub fn new(verb: &str) -> Self {
        Self {
            verb: verb.into(),
            ..Self::default()
        }
    }

    pub fn literal(mut self, text: &str) -> Self {
        self.parts.push(TemplatePart::Literal(text.into()));
        self
    }

    pub fn param(mut self, name: &str) -> Self {
        self.parts.push(TemplatePart::Parameter(name.into()));
        self
    }

    pub fn format(mut self) -> Self {
        self.parts.push(TemplatePart::Format);
        self
    }

    pub fn part(mut self, part: TemplatePart) -> Self {
        self.parts.push(part);
        self
    }

    /// Restricts parameter `name` to `pattern`.
    ///
    /// The pattern is embedded into the whole-path matcher, so `^` and `$`
    /// in it refer to the ends of the path: `^[0-9]+$` after a literal
    /// prefix can never match.
    pub fn constraint(mut self, name: &str, pattern: &str) -> Self {
        self.constraints.insert(name, pattern.into());
        self
    }

    pub fn requirement(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// Shorthand for the `controller` and `action` requirements.
    pub fn to(self, controller: &str, action: &str) -> Self {
        self.requirement("controller", controller)
            .requirement("action", action)
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    pub fn constraint_for(&self, name: &str) -> Option<&str> {
        self.constraints.find(name).map(|p| &**p)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
