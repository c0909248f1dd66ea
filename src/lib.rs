//! Compiles host router route descriptors into an introspectable route model.
//!
//! ```
//! use route_model::{compile, RouteCollection, RouteDescriptor};
//!
//! let edit = RouteDescriptor::new("GET")
//!     .literal("/labels/")
//!     .param("id")
//!     .literal("/edit")
//!     .constraint("id", "[0-9]+")
//!     .to("labels", "edit");
//!
//! let mut routes = RouteCollection::new();
//! routes.add(compile(&edit).unwrap());
//!
//! let route = routes.match_for("/labels/12/edit").unwrap();
//! assert_eq!(route.request_line(), "GET /labels/:id/edit");
//! assert!(routes.match_for("/labels/abc/edit").is_none());
//! ```

#![deny(unsafe_code)]

mod collection;
mod route;
mod strmap;

#[cfg(feature = "http-verb")]
mod http_verb;

#[cfg(feature = "registry")]
pub mod registry;

pub use crate::collection::RouteCollection;
pub use crate::route::{
    compile, CompileError, CompiledRoute, Metadata, RouteCompiler, RouteDescriptor, TemplatePart,
    DEFAULT_FORMAT_PATTERN, DEFAULT_PARAMETER_PATTERN,
};

#[cfg(feature = "http-verb")]
pub use crate::http_verb::Method;

#[cfg(feature = "registry")]
pub use crate::registry::{BatchPolicy, RouteRegistry, RouteSource};
