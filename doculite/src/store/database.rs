use im::OrdMap;
use itertools::Itertools;

use crate::collection::Collection;

/// A named container of collections.
///
/// A database may be empty. Collection names are unique within the
/// database; a collection's identity is its name and names are never
/// mutated in place. Like [Collection](crate::collection::Collection), the
/// database is persistent: mutators return a new `Database` sharing
/// structure with the original.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Database {
    collections: OrdMap<String, Collection>,
}

impl Database {
    /// Creates a new database with no collections.
    pub fn new() -> Self {
        Database {
            collections: OrdMap::new(),
        }
    }

    /// Returns the collection with the given name, if present.
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    /// Checks whether a collection with the given name exists.
    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Returns the collection names in lexical order.
    pub fn collection_names(&self) -> Vec<String> {
        self.collections.keys().cloned().collect_vec()
    }

    /// Returns the number of collections.
    pub fn collections_count(&self) -> usize {
        self.collections.len()
    }

    /// Returns the total number of documents across all collections.
    pub fn document_count(&self) -> usize {
        self.collections.values().map(Collection::len).sum()
    }

    /// Checks if the database holds no collections.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Returns an iterator over (name, collection) pairs.
    pub fn iter(&self) -> im::ordmap::Iter<'_, String, Collection> {
        self.collections.iter()
    }

    /// Returns a new database with the collection stored under `name`,
    /// replacing any existing collection with that name.
    pub fn with_collection(&self, name: &str, collection: Collection) -> Database {
        Database {
            collections: self.collections.update(name.to_string(), collection),
        }
    }

    /// Returns a new database without the named collection. Returns an
    /// equal database if the name is unknown.
    pub fn without_collection(&self, name: &str) -> Database {
        Database {
            collections: self.collections.without(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    fn set_up() -> Database {
        let docs = Collection::from_documents([doc! { n: 1 }, doc! { n: 2 }]);
        Database::new()
            .with_collection("orders", docs)
            .with_collection("users", Collection::new())
    }

    #[test]
    fn test_new_database_is_empty() {
        let db = Database::new();
        assert!(db.is_empty());
        assert_eq!(db.collections_count(), 0);
        assert_eq!(db.document_count(), 0);
    }

    #[test]
    fn test_collection_lookup() {
        let db = set_up();
        assert!(db.has_collection("orders"));
        assert!(!db.has_collection("missing"));
        assert_eq!(db.collection("orders").map(Collection::len), Some(2));
        assert!(db.collection("missing").is_none());
    }

    #[test]
    fn test_collection_names_sorted() {
        let db = set_up();
        assert_eq!(db.collection_names(), vec!["orders", "users"]);
    }

    #[test]
    fn test_document_count_sums_collections() {
        let db = set_up();
        assert_eq!(db.document_count(), 2);
    }

    #[test]
    fn test_with_collection_replaces_existing() {
        let db = set_up();
        let replaced = db.with_collection("orders", Collection::new());
        assert_eq!(replaced.collection("orders").map(Collection::len), Some(0));
        // prior revision untouched
        assert_eq!(db.collection("orders").map(Collection::len), Some(2));
    }

    #[test]
    fn test_without_collection() {
        let db = set_up();
        let shrunk = db.without_collection("orders");
        assert!(!shrunk.has_collection("orders"));
        assert_eq!(shrunk.collections_count(), 1);

        let unchanged = shrunk.without_collection("missing");
        assert_eq!(unchanged, shrunk);
    }
}
