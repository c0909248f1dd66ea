use crate::strmap::StrMap;

use std::iter::FromIterator;

/// Static requirements attached to a route: `controller`, `action` and any
/// fixed parameter values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    map: StrMap<Box<str>>,
}

impl Metadata {
    pub fn new() -> Self {
        Self { map: StrMap::new() }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.find(key).map(|v| &**v)
    }

    pub fn insert(&mut self, key: &str, value: &str) -> &mut Self {
        self.map.insert(key, value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.map.iter().map(|(k, v)| (k, &**v))
    }

    /// Returns `true` if every pair of `criteria` is present here with an
    /// equal value. Values are compared as exact strings.
    pub fn contains_all<'a, I>(&self, criteria: I) -> bool
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        criteria
            .into_iter()
            .all(|(k, v)| self.get(k).map_or(false, |x| x == v))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (k, v) in iter {
            metadata.insert(k, v);
        }
        metadata
    }
}
