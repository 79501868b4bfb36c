use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use im::{OrdMap, Vector};
use itertools::Itertools;
use parking_lot::RwLock;
use rand::rngs::OsRng;
use rand::Rng;

use crate::collection::{Collection, Document};
use crate::store::seed::seed_catalog;
use crate::store::{Database, DatabaseStats};
use crate::ID_GENERATOR;

/// The in-memory multi-database document store.
///
/// # Purpose
/// `DocumentStore` owns the whole simulated engine state: a mapping of
/// database name to [Database], each holding named, insertion-ordered
/// document [Collection]s. It exposes structural mutation (create/drop
/// database or collection), per-document CRUD, and a derived-statistics
/// query.
///
/// # Characteristics
/// - **Total operations**: no operation fails for well-formed inputs;
///   operations on unknown names degrade to no-ops or zero-valued results
/// - **Immutable revisions**: every mutation swaps in a new persistent root;
///   no document, collection, or database is modified in place
/// - **Change signal**: a monotonically increasing revision counter is
///   bumped exactly when state changes, so observers can poll for "something
///   changed" without identity comparison
/// - **Injected handle**: cheaply clonable; all clones share the same state.
///   There is no process-wide singleton; consumers receive a handle
///
/// # Usage
/// ```rust
/// use doculite::store::DocumentStore;
/// use doculite::doc;
///
/// let store = DocumentStore::new();
/// store.add_database("inventory");
/// store.add_collection("inventory", "items");
/// store.add_document("inventory", "items", doc! { sku: "A-100", qty: 3 });
/// assert_eq!(store.documents("inventory", "items").len(), 1);
/// ```
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<DocumentStoreInner>,
}

struct DocumentStoreInner {
    databases: RwLock<OrdMap<String, Database>>,
    revision: AtomicU64,
}

impl DocumentStore {
    /// Creates a store pre-populated with the built-in seed catalog
    /// (`admin`, `config`, `local`, `TESTDB`).
    pub fn new() -> Self {
        DocumentStore {
            inner: Arc::new(DocumentStoreInner {
                databases: RwLock::new(seed_catalog()),
                revision: AtomicU64::new(0),
            }),
        }
    }

    /// Creates a store with no databases. Intended for tests and embedding
    /// scenarios that bring their own catalog.
    pub fn empty() -> Self {
        DocumentStore {
            inner: Arc::new(DocumentStoreInner {
                databases: RwLock::new(OrdMap::new()),
                revision: AtomicU64::new(0),
            }),
        }
    }

    /// Returns the current revision counter. The value increases by one for
    /// every mutation that changed state; silent no-ops leave it unchanged.
    pub fn revision(&self) -> u64 {
        self.inner.revision.load(Ordering::Acquire)
    }

    /// Returns a snapshot of the whole catalog.
    pub fn databases(&self) -> OrdMap<String, Database> {
        self.inner.databases.read().clone()
    }

    /// Returns the database names in lexical order.
    pub fn database_names(&self) -> Vec<String> {
        self.inner.databases.read().keys().cloned().collect_vec()
    }

    /// Returns a snapshot of the named database, if present.
    pub fn database(&self, name: &str) -> Option<Database> {
        self.inner.databases.read().get(name).cloned()
    }

    pub fn has_database(&self, name: &str) -> bool {
        self.inner.databases.read().contains_key(name)
    }

    pub fn has_collection(&self, db_name: &str, collection_name: &str) -> bool {
        self.inner
            .databases
            .read()
            .get(db_name)
            .is_some_and(|db| db.has_collection(collection_name))
    }

    /// Returns a snapshot of the named collection, if present.
    pub fn collection(&self, db_name: &str, collection_name: &str) -> Option<Collection> {
        self.inner
            .databases
            .read()
            .get(db_name)
            .and_then(|db| db.collection(collection_name).cloned())
    }

    /// Returns the document sequence of the named collection, or an empty
    /// sequence when the database or collection is absent.
    pub fn documents(&self, db_name: &str, collection_name: &str) -> Vector<Document> {
        self.collection(db_name, collection_name)
            .map(|collection| collection.documents().clone())
            .unwrap_or_default()
    }

    /// Inserts an empty database under `name`.
    ///
    /// If `name` already exists, the existing database's collections are
    /// discarded and replaced with empty. Callers wanting idempotent
    /// creation must check [has_database](DocumentStore::has_database)
    /// first.
    pub fn add_database(&self, name: &str) {
        log::debug!("Adding database '{}'", name);
        self.mutate(|databases| Some(databases.update(name.to_string(), Database::new())));
    }

    /// Removes the database and everything under it in one state
    /// transition. No-op if absent.
    pub fn delete_database(&self, name: &str) {
        self.mutate(|databases| {
            if databases.contains_key(name) {
                log::debug!("Deleting database '{}'", name);
                Some(databases.without(name))
            } else {
                log::warn!("Database '{}' does not exist, ignoring delete", name);
                None
            }
        });
    }

    /// Creates an empty collection under an existing database, replacing
    /// any existing collection with the same name. No-op if the database is
    /// absent.
    pub fn add_collection(&self, db_name: &str, collection_name: &str) {
        self.mutate(|databases| match databases.get(db_name) {
            Some(database) => {
                log::debug!("Adding collection '{}.{}'", db_name, collection_name);
                let updated = database.with_collection(collection_name, Collection::new());
                Some(databases.update(db_name.to_string(), updated))
            }
            None => {
                log::warn!(
                    "Database '{}' does not exist, ignoring add_collection",
                    db_name
                );
                None
            }
        });
    }

    /// Removes the collection and its documents. No-op if absent.
    pub fn delete_collection(&self, db_name: &str, collection_name: &str) {
        self.mutate(|databases| match databases.get(db_name) {
            Some(database) if database.has_collection(collection_name) => {
                log::debug!("Deleting collection '{}.{}'", db_name, collection_name);
                let updated = database.without_collection(collection_name);
                Some(databases.update(db_name.to_string(), updated))
            }
            _ => {
                log::warn!(
                    "Collection '{}.{}' does not exist, ignoring delete",
                    db_name,
                    collection_name
                );
                None
            }
        });
    }

    /// Appends a document to the collection's sequence.
    ///
    /// A missing or non-string `_id` is replaced with a generated token; a
    /// caller-supplied string `_id` is used as-is with no uniqueness check
    /// (first writer wins silently on duplicates). No-op if the database or
    /// collection is absent.
    pub fn add_document(&self, db_name: &str, collection_name: &str, doc: Document) {
        let mut doc = doc;
        if !doc.has_id() {
            doc.set_id(&ID_GENERATOR.next_id());
        }

        self.mutate(|databases| {
            let database = databases.get(db_name)?;
            let collection = database.collection(collection_name).or_else(|| {
                log::warn!(
                    "Collection '{}.{}' does not exist, ignoring add_document",
                    db_name,
                    collection_name
                );
                None
            })?;

            log::debug!(
                "Adding document '{}' to '{}.{}'",
                doc.id().unwrap_or_default(),
                db_name,
                collection_name
            );
            let updated = database.with_collection(collection_name, collection.with_document(doc));
            Some(databases.update(db_name.to_string(), updated))
        });
    }

    /// Replaces, in place (preserving sequence position), the document whose
    /// `_id` matches `doc_id` with `new_doc`, with `_id` forced back to
    /// `doc_id`. No-op if no document matches.
    pub fn update_document(
        &self,
        db_name: &str,
        collection_name: &str,
        doc_id: &str,
        new_doc: Document,
    ) {
        self.mutate(|databases| {
            let database = databases.get(db_name)?;
            let collection = database.collection(collection_name)?;
            collection.position_of(doc_id)?;

            log::debug!(
                "Updating document '{}' in '{}.{}'",
                doc_id,
                db_name,
                collection_name
            );
            let updated = database
                .with_collection(collection_name, collection.with_updated(doc_id, new_doc));
            Some(databases.update(db_name.to_string(), updated))
        });
    }

    /// Removes the first document whose `_id` matches. No-op if no match.
    pub fn delete_document(&self, db_name: &str, collection_name: &str, doc_id: &str) {
        self.mutate(|databases| {
            let database = databases.get(db_name)?;
            let collection = database.collection(collection_name)?;
            collection.position_of(doc_id)?;

            log::debug!(
                "Deleting document '{}' from '{}.{}'",
                doc_id,
                db_name,
                collection_name
            );
            let updated = database
                .with_collection(collection_name, collection.without_document(doc_id));
            Some(databases.update(db_name.to_string(), updated))
        });
    }

    /// Computes display statistics for the named database.
    ///
    /// `collections_count` is exact; `storage_size` and `indexes_count` are
    /// jittered presentation heuristics (see [DatabaseStats]). Returns
    /// [DatabaseStats::zero] for an unknown database.
    pub fn database_stats(&self, db_name: &str) -> DatabaseStats {
        let databases = self.inner.databases.read();
        let Some(database) = databases.get(db_name) else {
            return DatabaseStats::zero();
        };

        let collections_count = database.collections_count();
        let total_docs = database.document_count();

        let mut rng = OsRng;
        let storage_size = total_docs as f64 * 2.5 + rng.gen_range(0.0..50.0);
        let indexes_count = collections_count + rng.gen_range(0..3);

        DatabaseStats {
            storage_size: format!("{:.2} kB", storage_size),
            collections_count,
            indexes_count,
        }
    }

    /// Applies a mutation to the catalog root. The closure returns the new
    /// root, or `None` to signal a silent no-op; only effective mutations
    /// bump the revision counter.
    fn mutate(
        &self,
        op: impl FnOnce(&OrdMap<String, Database>) -> Option<OrdMap<String, Database>>,
    ) {
        let mut databases = self.inner.databases.write();
        if let Some(next) = op(&databases) {
            *databases = next;
            self.inner.revision.fetch_add(1, Ordering::Release);
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        DocumentStore::new()
    }
}
