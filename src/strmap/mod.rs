use std::cmp::Ordering;

/// A small string-keyed map kept sorted by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrMap<T> {
    keys: Vec<Box<str>>,
    values: Vec<T>,
}

impl<T> Default for StrMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StrMap<T> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        match self.find_index(key) {
            Ok(i) => self.values.get(i),
            Err(_) => None,
        }
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: &str, value: T) -> Option<T> {
        match self.find_index(key) {
            Ok(i) => Some(std::mem::replace(&mut self.values[i], value)),
            Err(i) => {
                self.values.insert(i, value);
                self.keys.insert(i, key.into());
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.keys.iter().map(|k| &**k).zip(self.values.iter())
    }

    fn find_index(&self, key: &str) -> Result<usize, usize> {
        let keys: &[Box<str>] = &self.keys;

        let mut l: usize = 0;
        let mut r: usize = keys.len();

        while l < r {
            let mid = l + (r - l) / 2;
            match keys[mid].as_bytes().cmp(key.as_bytes()) {
                Ordering::Less => l = mid + 1,
                Ordering::Equal => return Ok(mid),
                Ordering::Greater => r = mid,
            }
        }
        Err(l)
    }
}

#[cfg(test)]
mod tests {
    use super::StrMap;

    #[test]
    fn keeps_keys_sorted() {
        let mut map: StrMap<u32> = StrMap::new();
        map.insert("id", 1);
        map.insert("action", 2);
        map.insert("controller", 3);

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["action", "controller", "id"]);
        assert_eq!(map.find("controller"), Some(&3));
        assert_eq!(map.find("format"), None);
    }

    #[test]
    fn insert_replaces() {
        let mut map: StrMap<&str> = StrMap::new();
        assert_eq!(map.insert("action", "show"), None);
        assert_eq!(map.insert("action", "edit"), Some("show"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.find("action"), Some(&"edit"));
    }
}
