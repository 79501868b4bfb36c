use im::Vector;

use crate::collection::Document;

/// An insertion-ordered, persistent sequence of documents.
///
/// # Purpose
/// Holds the documents of one named collection. Order is insertion order and
/// is preserved across updates: an update replaces a document at its
/// existing position rather than re-appending it. The order is user-visible
/// display stability only and carries no other guarantee.
///
/// # Characteristics
/// - **Persistent**: every mutator returns a new `Collection` sharing
///   structure with the original; no document is modified in place
/// - **Positional updates**: `with_updated` keeps the sequence position and
///   forces `_id` back to the target id
/// - **Silent on absence**: mutators targeting an unknown id return a
///   collection equal to the input
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Collection {
    documents: Vector<Document>,
}

impl Collection {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Collection {
            documents: Vector::new(),
        }
    }

    /// Creates a collection from a sequence of documents, keeping their
    /// order.
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        Collection {
            documents: documents.into_iter().collect(),
        }
    }

    /// Returns the number of documents in the collection.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Checks if the collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Returns an iterator over the documents in insertion order.
    pub fn iter(&self) -> im::vector::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Returns the document at the given position.
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Returns the underlying document sequence.
    pub fn documents(&self) -> &Vector<Document> {
        &self.documents
    }

    /// Returns the first document whose `_id` matches, if any.
    pub fn find_by_id(&self, doc_id: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|doc| doc.id().as_deref() == Some(doc_id))
    }

    /// Returns the position of the first document whose `_id` matches.
    pub fn position_of(&self, doc_id: &str) -> Option<usize> {
        self.documents
            .iter()
            .position(|doc| doc.id().as_deref() == Some(doc_id))
    }

    /// Returns a new collection with the document appended.
    pub fn with_document(&self, doc: Document) -> Collection {
        let mut documents = self.documents.clone();
        documents.push_back(doc);
        Collection { documents }
    }

    /// Returns a new collection in which the document with the matching
    /// `_id` is replaced by `doc` at its existing position, with `_id`
    /// forced back to `doc_id`. Returns an equal collection if no document
    /// matches.
    pub fn with_updated(&self, doc_id: &str, doc: Document) -> Collection {
        match self.position_of(doc_id) {
            Some(index) => {
                let mut replacement = doc;
                replacement.set_id(doc_id);
                Collection {
                    documents: self.documents.update(index, replacement),
                }
            }
            None => self.clone(),
        }
    }

    /// Returns a new collection without the first document whose `_id`
    /// matches. Returns an equal collection if no document matches.
    pub fn without_document(&self, doc_id: &str) -> Collection {
        match self.position_of(doc_id) {
            Some(index) => {
                let mut documents = self.documents.clone();
                documents.remove(index);
                Collection { documents }
            }
            None => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Value;
    use crate::doc;

    fn set_up() -> Collection {
        let mut d0 = doc! { name: "first" };
        d0.set_id("a");
        let mut d1 = doc! { name: "second", value: 100 };
        d1.set_id("b");
        let mut d2 = doc! { name: "third" };
        d2.set_id("c");
        Collection::from_documents([d0, d1, d2])
    }

    #[test]
    fn test_new_collection_is_empty() {
        let collection = Collection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let collection = set_up();
        let names: Vec<Option<&Value>> =
            collection.iter().map(|doc| doc.get("name")).collect();
        assert_eq!(
            names,
            vec![
                Some(&Value::String("first".to_string())),
                Some(&Value::String("second".to_string())),
                Some(&Value::String("third".to_string())),
            ]
        );
    }

    #[test]
    fn test_with_document_appends() {
        let collection = set_up();
        let mut doc = doc! { name: "fourth" };
        doc.set_id("d");
        let grown = collection.with_document(doc);

        assert_eq!(grown.len(), 4);
        assert_eq!(grown.get(3).and_then(|d| d.id()), Some("d".to_string()));
        // the original revision is untouched
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_update_preserves_position_and_id() {
        let collection = set_up();
        let patch = doc! { name: "patched", extra: true };
        let updated = collection.with_updated("b", patch);

        assert_eq!(updated.len(), 3);
        let replaced = updated.get(1).unwrap();
        assert_eq!(replaced.id(), Some("b".to_string()));
        assert_eq!(replaced.get("name"), Some(&Value::String("patched".to_string())));
        // full replacement: fields not in the patch are gone
        assert_eq!(replaced.get("value"), None);
        // neighbors unchanged
        assert_eq!(updated.get(0), collection.get(0));
        assert_eq!(updated.get(2), collection.get(2));
    }

    #[test]
    fn test_update_forces_id_over_patch_id() {
        let collection = set_up();
        let mut patch = doc! { name: "sneaky" };
        patch.set_id("z");
        let updated = collection.with_updated("b", patch);
        assert_eq!(updated.get(1).and_then(|d| d.id()), Some("b".to_string()));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let collection = set_up();
        let updated = collection.with_updated("missing", doc! { name: "x" });
        assert_eq!(updated, collection);
    }

    #[test]
    fn test_without_document_removes_first_match() {
        let collection = set_up();
        let shrunk = collection.without_document("b");
        assert_eq!(shrunk.len(), 2);
        assert!(shrunk.find_by_id("b").is_none());
        assert_eq!(shrunk.get(0).and_then(|d| d.id()), Some("a".to_string()));
        assert_eq!(shrunk.get(1).and_then(|d| d.id()), Some("c".to_string()));
    }

    #[test]
    fn test_without_document_is_idempotent_on_absence() {
        let collection = set_up();
        let unchanged = collection.without_document("missing");
        assert_eq!(unchanged, collection);
    }

    #[test]
    fn test_find_by_id_and_position() {
        let collection = set_up();
        assert_eq!(collection.position_of("c"), Some(2));
        assert_eq!(collection.position_of("missing"), None);
        assert_eq!(
            collection.find_by_id("a").and_then(|d| d.id()),
            Some("a".to_string())
        );
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let mut d0 = doc! { n: 1 };
        d0.set_id("dup");
        let mut d1 = doc! { n: 2 };
        d1.set_id("dup");
        let collection = Collection::from_documents([d0, d1]);

        assert_eq!(collection.position_of("dup"), Some(0));
        let shrunk = collection.without_document("dup");
        assert_eq!(shrunk.len(), 1);
        assert_eq!(shrunk.get(0).and_then(|d| d.get("n")), Some(&Value::I64(2)));
    }
}
