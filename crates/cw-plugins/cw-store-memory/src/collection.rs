//! Insertion-ordered map used for every entity kind.

use std::collections::HashMap;

/// `HashMap` lookup with a separate order index, so listing is stable and
/// matches creation order.
#[derive(Debug)]
pub struct Collection<T> {
    records: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> Collection<T> {
    /// Stores `record` under `id`. Replacing an existing id keeps its
    /// original position in the listing.
    pub fn put(&mut self, id: String, record: T) {
        if self.records.insert(id.clone(), record).is_none() {
            self.order.push(id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn list(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}
