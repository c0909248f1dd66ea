use super::descriptor::{RouteDescriptor, TemplatePart};
use super::error::CompileError;
use super::CompiledRoute;

use regex::Regex;
use smallvec::SmallVec;
use tracing::{trace, warn};

/// Matches one or more non-slash characters.
pub const DEFAULT_PARAMETER_PATTERN: &str = "[^/]+";

/// Optionally matches a dot followed by one or more non-slash characters.
pub const DEFAULT_FORMAT_PATTERN: &str = r"(?:\.[^/]+)?";

/// Turns [`RouteDescriptor`]s into [`CompiledRoute`]s.
///
/// Literal segments are embedded into the matcher as-is, without escaping:
/// the `.` in a literal `/v1.0/` matches any character.
#[derive(Debug, Clone)]
pub struct RouteCompiler {
    parameter_pattern: Box<str>,
    format_pattern: Box<str>,
}

impl Default for RouteCompiler {
    fn default() -> Self {
        Self {
            parameter_pattern: DEFAULT_PARAMETER_PATTERN.into(),
            format_pattern: DEFAULT_FORMAT_PATTERN.into(),
        }
    }
}

/// Compiles `descriptor` with the default [`RouteCompiler`].
pub fn compile(descriptor: &RouteDescriptor) -> Result<CompiledRoute, CompileError> {
    RouteCompiler::new().compile(descriptor)
}

/// A piece of matcher source. Constraints are kept apart so that a failed
/// assembly can be traced back to the parameter that caused it.
enum Fragment<'a> {
    Raw(&'a str),
    Constraint { name: &'a str, pattern: &'a str },
}

impl RouteCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback for parameters without a constraint.
    pub fn parameter_pattern(mut self, pattern: &str) -> Result<Self, CompileError> {
        self.parameter_pattern = group(pattern)?;
        Ok(self)
    }

    /// Fragment emitted for [`TemplatePart::Format`].
    pub fn format_pattern(mut self, pattern: &str) -> Result<Self, CompileError> {
        self.format_pattern = group(pattern)?;
        Ok(self)
    }

    pub fn compile(&self, descriptor: &RouteDescriptor) -> Result<CompiledRoute, CompileError> {
        let mut path_parts: SmallVec<[&str; 8]> = SmallVec::new();
        let mut fragments: SmallVec<[Fragment<'_>; 8]> = SmallVec::new();
        let mut parameters: Vec<Box<str>> = Vec::new();
        let mut constraints: usize = 0;

        for part in &descriptor.parts {
            match part {
                TemplatePart::Literal(text) => {
                    path_parts.push(&**text);
                    fragments.push(Fragment::Raw(&**text));
                }
                TemplatePart::Parameter(name) => {
                    path_parts.push(":");
                    path_parts.push(&**name);
                    parameters.push(name.clone());
                    match descriptor.constraints.find(name) {
                        Some(pattern) => {
                            check_constraint(name, pattern)?;
                            fragments.push(Fragment::Constraint {
                                name: &**name,
                                pattern: &**pattern,
                            });
                            constraints += 1;
                        }
                        None => fragments.push(Fragment::Raw(&*self.parameter_pattern)),
                    }
                }
                TemplatePart::Format => fragments.push(Fragment::Raw(&*self.format_pattern)),
            }
        }

        let path: Box<str> = path_parts.concat().into();

        let matcher = match Regex::new(&self.assemble(&fragments, constraints)) {
            Ok(re) => re,
            Err(source) => return Err(self.blame(&fragments, path, source)),
        };

        trace!(verb = %descriptor.verb, path = %path, matcher = %matcher, "compiled route");

        Ok(CompiledRoute {
            path,
            parameters,
            verb: descriptor.verb.clone(),
            metadata: descriptor.metadata.clone(),
            matcher,
        })
    }

    /// Builds the anchored source, inlining the first `inline` constraints
    /// and using the fallback pattern for the rest.
    fn assemble(&self, fragments: &[Fragment<'_>], inline: usize) -> String {
        let mut source = String::from("^");
        let mut seen: usize = 0;
        for fragment in fragments {
            match *fragment {
                Fragment::Raw(text) => source.push_str(text),
                Fragment::Constraint { pattern, .. } => {
                    if seen < inline {
                        source.push_str("(?:");
                        source.push_str(pattern);
                        source.push(')');
                    } else {
                        source.push_str(&self.parameter_pattern);
                    }
                    seen += 1;
                }
            }
        }
        source.push('$');
        source
    }

    /// Finds the part responsible for a matcher that failed to compile.
    ///
    /// If the template fails with every constraint replaced by the fallback,
    /// the literals are at fault. Otherwise constraints are put back one at
    /// a time and the first one that breaks the matcher is reported.
    fn blame(
        &self,
        fragments: &[Fragment<'_>],
        path: Box<str>,
        err: regex::Error,
    ) -> CompileError {
        if let Err(source) = Regex::new(&self.assemble(fragments, 0)) {
            return CompileError::Template { path, source };
        }

        let constraints = fragments.iter().filter_map(|f| match *f {
            Fragment::Constraint { name, pattern } => Some((name, pattern)),
            Fragment::Raw(_) => None,
        });
        for (i, (name, pattern)) in constraints.enumerate() {
            if let Err(source) = Regex::new(&self.assemble(fragments, i + 1)) {
                return CompileError::Constraint {
                    name: name.into(),
                    pattern: pattern.into(),
                    source,
                };
            }
        }

        CompileError::Template { path, source: err }
    }
}

fn group(pattern: &str) -> Result<Box<str>, CompileError> {
    match Regex::new(pattern) {
        Ok(_) => Ok(format!("(?:{})", pattern).into()),
        Err(source) => Err(CompileError::Pattern {
            pattern: pattern.into(),
            source,
        }),
    }
}

fn check_constraint(name: &str, pattern: &str) -> Result<(), CompileError> {
    if let Err(source) = Regex::new(pattern) {
        return Err(CompileError::Constraint {
            name: name.into(),
            pattern: pattern.into(),
            source,
        });
    }
    if pattern.starts_with('^') || pattern.ends_with('$') {
        warn!(
            parameter = name,
            pattern, "constraint anchors apply to the whole path, not the parameter"
        );
    }
    Ok(())
}
