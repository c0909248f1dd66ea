mod compiler;
mod descriptor;
mod error;
mod imp;
mod metadata;

pub use self::compiler::{
    compile, RouteCompiler, DEFAULT_FORMAT_PATTERN, DEFAULT_PARAMETER_PATTERN,
};
pub use self::descriptor::{RouteDescriptor, TemplatePart};
pub use self::error::CompileError;
pub use self::metadata::Metadata;

use regex::Regex;

/// A route compiled from a [`RouteDescriptor`]. Immutable once built.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    path: Box<str>,
    parameters: Vec<Box<str>>,
    verb: Box<str>,
    metadata: Metadata,
    matcher: Regex,
}
