use crate::collection::RouteCollection;
use crate::route::CompiledRoute;

pub use http::Method;

const VERB_SEPARATOR: char = '|';

impl CompiledRoute {
    /// The verb as an [`http::Method`], if it names exactly one method.
    pub fn method(&self) -> Option<Method> {
        let verb = self.verb();
        if verb.is_empty() || verb.contains(VERB_SEPARATOR) {
            return None;
        }
        Method::from_bytes(verb.as_bytes()).ok()
    }

    /// An empty verb accepts every method; `GET|POST` accepts either.
    pub fn accepts(&self, method: &Method) -> bool {
        let verb = self.verb();
        verb.is_empty()
            || verb
                .split(VERB_SEPARATOR)
                .any(|v| v == method.as_str())
    }
}

impl RouteCollection {
    /// Routes accepting `method`.
    pub fn verb(&self, method: &Method) -> Self {
        self.select(|r| r.accepts(method))
    }

    /// Finds the first route accepting both `method` and `path`.
    pub fn find(&self, method: &Method, path: &str) -> Option<&CompiledRoute> {
        self.iter().find(|r| r.accepts(method) && r.matches(path))
    }
}
