use doculite::collection::Document;
use doculite::console::QueryConsole;
use doculite::doc;
use doculite::store::DocumentStore;

#[ctor::ctor]
fn init_logging() {
    colog::init();
}

/// Shared fixture for integration tests: one store handle per test, plus a
/// console factory bound to it.
#[derive(Clone)]
pub struct TestContext {
    store: DocumentStore,
}

impl TestContext {
    pub fn store(&self) -> DocumentStore {
        self.store.clone()
    }

    /// Builds a console over this context's store for the given target.
    pub fn console(&self, db_name: &str, collection_name: &str) -> QueryConsole {
        QueryConsole::new(self.store.clone(), db_name, collection_name)
    }
}

/// Creates a context around a store carrying the built-in seed catalog.
pub fn create_test_context() -> TestContext {
    TestContext {
        store: DocumentStore::new(),
    }
}

/// Creates a context around an unseeded store.
pub fn create_empty_context() -> TestContext {
    TestContext {
        store: DocumentStore::empty(),
    }
}

pub fn create_test_docs() -> Vec<Document> {
    let doc1 = doc! {
        first_name: "fn1",
        last_name: "ln1",
        active: true,
        score: 105,
        list: ["one", "two", "three"],
    };

    let doc2 = doc! {
        first_name: "fn2",
        last_name: "ln2",
        active: false,
        score: 205,
        list: ["three", "four", "five"],
    };

    let doc3 = doc! {
        first_name: "fn3",
        last_name: "ln2",
        active: true,
        score: 305,
    };

    vec![doc1, doc2, doc3]
}

/// Inserts the standard test documents into the given collection.
pub fn insert_test_documents(store: &DocumentStore, db_name: &str, collection_name: &str) {
    for doc in create_test_docs() {
        store.add_document(db_name, collection_name, doc);
    }
}
