use crate::collection::RouteCollection;
use crate::route::{CompileError, RouteCompiler, RouteDescriptor};

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::{debug, warn};

/// Exposes the host router's routes as descriptors.
pub trait RouteSource {
    fn descriptors(&self) -> Vec<RouteDescriptor>;
}

impl<F> RouteSource for F
where
    F: Fn() -> Vec<RouteDescriptor>,
{
    fn descriptors(&self) -> Vec<RouteDescriptor> {
        (self)()
    }
}

impl RouteSource for Vec<RouteDescriptor> {
    fn descriptors(&self) -> Vec<RouteDescriptor> {
        self.clone()
    }
}

/// What to do with a descriptor that fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Fail the whole build.
    Abort,
    /// Log the error and leave the route out.
    Skip,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self::Abort
    }
}

/// Compiles `descriptors` in order into a new collection.
pub fn compile_all<'a, I>(
    compiler: &RouteCompiler,
    descriptors: I,
    policy: BatchPolicy,
) -> Result<RouteCollection, CompileError>
where
    I: IntoIterator<Item = &'a RouteDescriptor>,
{
    let mut routes = RouteCollection::new();
    for descriptor in descriptors {
        match compiler.compile(descriptor) {
            Ok(route) => {
                routes.add(route);
            }
            Err(e) if policy == BatchPolicy::Skip => {
                warn!(verb = %descriptor.verb(), error = %e, "skipping route");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(routes)
}

/// Process-wide holder of the compiled collection.
///
/// The collection is built on first use and then shared. A rebuild publishes
/// a fresh collection with an atomic swap; readers holding the previous one
/// keep using it undisturbed.
#[derive(Debug)]
pub struct RouteRegistry<S> {
    source: S,
    compiler: RouteCompiler,
    policy: BatchPolicy,
    current: ArcSwapOption<RouteCollection>,
}

impl<S: RouteSource> RouteRegistry<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            compiler: RouteCompiler::new(),
            policy: BatchPolicy::default(),
            current: ArcSwapOption::empty(),
        }
    }

    pub fn with_compiler(mut self, compiler: RouteCompiler) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn with_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The published collection, building it first if there is none.
    ///
    /// Callers racing on an empty registry may each compile, but only the
    /// first result is published and every caller gets that one.
    pub fn routes(&self) -> Result<Arc<RouteCollection>, CompileError> {
        if let Some(routes) = self.current.load_full() {
            return Ok(routes);
        }

        let routes = self.build()?;
        let empty: Option<Arc<RouteCollection>> = None;
        let prev = self
            .current
            .compare_and_swap(&empty, Some(Arc::clone(&routes)));
        match &*prev {
            Some(published) => Ok(Arc::clone(published)),
            None => {
                debug!(count = routes.len(), "published route collection");
                Ok(routes)
            }
        }
    }

    /// The published collection, if any, without building.
    pub fn current(&self) -> Option<Arc<RouteCollection>> {
        self.current.load_full()
    }

    /// Compiles the source again and publishes the result.
    ///
    /// On error the previously published collection stays in place.
    pub fn rebuild(&self) -> Result<Arc<RouteCollection>, CompileError> {
        let routes = self.build()?;
        self.current.store(Some(Arc::clone(&routes)));
        debug!(count = routes.len(), "published route collection");
        Ok(routes)
    }

    /// Drops the published collection; the next [`routes`] call rebuilds.
    ///
    /// [`routes`]: RouteRegistry::routes
    pub fn invalidate(&self) {
        if self.current.swap(None).is_some() {
            debug!("invalidated route collection");
        }
    }

    fn build(&self) -> Result<Arc<RouteCollection>, CompileError> {
        let descriptors = self.source.descriptors();
        let routes = compile_all(&self.compiler, &descriptors, self.policy)?;
        Ok(Arc::new(routes))
    }
}
