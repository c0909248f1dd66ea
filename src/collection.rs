use crate::route::CompiledRoute;

use std::iter::FromIterator;
use std::sync::Arc;

/// An ordered collection of compiled routes.
///
/// Queries never modify the receiver; filtering operations return a new
/// collection sharing the same routes. When several routes match, the one
/// added first wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteCollection {
    routes: Vec<Arc<CompiledRoute>>,
}

impl RouteCollection {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn add(&mut self, route: CompiledRoute) -> &mut Self {
        self.routes.push(Arc::new(route));
        self
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn as_slice(&self) -> &[Arc<CompiledRoute>] {
        &self.routes
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &CompiledRoute> + '_ {
        self.routes.iter().map(|r| &**r)
    }

    pub fn get(&self, idx: usize) -> Option<&CompiledRoute> {
        self.routes.get(idx).map(|r| &**r)
    }

    pub fn first(&self) -> Option<&CompiledRoute> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&CompiledRoute> {
        self.routes.last().map(|r| &**r)
    }

    pub fn select(&self, mut f: impl FnMut(&CompiledRoute) -> bool) -> Self {
        let routes = self.routes.iter().filter(|r| f(&***r)).cloned().collect();
        Self { routes }
    }

    pub fn map<U>(&self, f: impl FnMut(&CompiledRoute) -> U) -> Vec<U> {
        self.iter().map(f).collect()
    }

    /// Visits every route in order, stopping at the first error.
    pub fn each<E>(&self, mut f: impl FnMut(&CompiledRoute) -> Result<(), E>) -> Result<&Self, E> {
        for route in self.iter() {
            f(route)?;
        }
        Ok(self)
    }

    /// Finds the first route accepting `path`.
    pub fn match_for(&self, path: &str) -> Option<&CompiledRoute> {
        self.iter().find(|r| r.matches(path))
    }

    /// Finds the first route whose metadata contains every pair of `criteria`.
    pub fn route_for(&self, criteria: &[(&str, &str)]) -> Option<&CompiledRoute> {
        self.iter()
            .find(|r| r.metadata().contains_all(criteria.iter().cloned()))
    }

    /// Routes served by the controller `name`.
    pub fn controller(&self, name: &str) -> Self {
        self.select(|r| r.controller() == Some(name))
    }

    /// Removes the routes that `paths` resolve to through [`match_for`].
    ///
    /// Removal compares routes by value, so every route equal to a resolved
    /// one is dropped. Paths matching nothing are ignored.
    ///
    /// [`match_for`]: RouteCollection::match_for
    pub fn without<I, S>(&self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed: Vec<&CompiledRoute> = paths
            .into_iter()
            .filter_map(|p| self.match_for(p.as_ref()))
            .collect();

        if removed.is_empty() {
            return self.clone();
        }
        self.select(|r| !removed.iter().any(|x| *x == r))
    }
}

impl From<Vec<CompiledRoute>> for RouteCollection {
    fn from(routes: Vec<CompiledRoute>) -> Self {
        routes.into_iter().collect()
    }
}

impl FromIterator<CompiledRoute> for RouteCollection {
    fn from_iter<I: IntoIterator<Item = CompiledRoute>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RouteCollection {
    type Item = &'a CompiledRoute;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Arc<CompiledRoute>>,
        fn(&'a Arc<CompiledRoute>) -> &'a CompiledRoute,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let f: fn(&'a Arc<CompiledRoute>) -> &'a CompiledRoute = |r| &**r;
        self.routes.iter().map(f)
    }
}
