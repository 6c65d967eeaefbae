//! Static market datasets
//!
//! Every table here is compile-time data. Handlers borrow records from these
//! tables and wrap them in per-endpoint response views, so nothing in this
//! module is ever mutated at request time.

pub mod brands;
pub mod campaigns;
pub mod countries;
pub mod sectors;
pub mod subcategories;

use serde::ser::{Serialize, Serializer};

/// Ordered, string-keyed table of static records.
///
/// Serializes as a JSON object whose keys keep their declaration order.
#[derive(Debug)]
pub struct Entries<V: 'static>(pub &'static [(&'static str, V)]);

impl<V> Clone for Entries<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Entries<V> {}

impl<V> Entries<V> {
    /// Exact, case-sensitive key lookup
    pub fn get(&self, key: &str) -> Option<&'static V> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Keys in declaration order
    pub fn keys(&self) -> Vec<&'static str> {
        self.0.iter().map(|(k, _)| *k).collect()
    }
}

impl<V: Serialize> Serialize for Entries<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (*k, v)))
    }
}
