use chrono::Local;

use crate::collection::Document;
use crate::console::{Command, Transcript};
use crate::filter::Filter;
use crate::store::DocumentStore;

/// The fixed help text reported for unrecognized input.
const UNKNOWN_COMMAND_HELP: &str =
    r#"Unknown command. Try: find(), find({field: "value"}), count()"#;

/// The typed result of one console execution.
///
/// Mirrors the outcome transcript line, so callers can branch on the result
/// without re-parsing transcript text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// A find produced this many result documents.
    Found(usize),
    /// A count reported this collection size.
    Count(usize),
    /// The submission failed; the message is what the transcript shows
    /// after `Error: `.
    Error(String),
    /// The input matched no known command shape.
    Unknown,
}

impl QueryOutcome {
    /// Renders the outcome transcript line text.
    pub fn message(&self) -> String {
        match self {
            QueryOutcome::Found(n) => format!("Found {} documents", n),
            QueryOutcome::Count(n) => format!("Count: {}", n),
            QueryOutcome::Error(message) => format!("Error: {}", message),
            QueryOutcome::Unknown => format!("Error: {}", UNKNOWN_COMMAND_HELP),
        }
    }
}

/// The ad-hoc query console for one collection.
///
/// # Purpose
/// Interprets one line of pseudo-query text per submission against a
/// snapshot of the target collection, maintains the current result list,
/// and reports every outcome through the timestamped [Transcript].
///
/// # Characteristics
/// - **Best-effort**: every submission is a single evaluation against the
///   current collection snapshot; nothing is thrown to the caller, and all
///   failures become `Error:` transcript lines
/// - **Two lines per submission**: the echoed input and the outcome, both
///   with the same wall-clock timestamp
/// - **Result retention**: the stored result list is replaced only by a
///   successful find (or emptied by a count); errors and unknown commands
///   leave it untouched
///
/// Note that `count()` reports the full collection size: the grammar has no
/// filtered count.
///
/// # Usage
/// ```rust
/// use doculite::console::{QueryConsole, QueryOutcome};
/// use doculite::store::DocumentStore;
///
/// let store = DocumentStore::new();
/// let mut console = QueryConsole::new(store, "TESTDB", "tested_collection");
///
/// let outcome = console.execute("find({\"value\": 200})");
/// assert_eq!(outcome, QueryOutcome::Found(1));
/// assert_eq!(console.results().len(), 1);
/// assert_eq!(console.transcript().len(), 2);
/// ```
pub struct QueryConsole {
    store: DocumentStore,
    db_name: String,
    collection_name: String,
    results: Vec<Document>,
    transcript: Transcript,
}

impl QueryConsole {
    /// Creates a console targeting one collection. The target does not have
    /// to exist: a missing database or collection evaluates as empty.
    pub fn new(store: DocumentStore, db_name: &str, collection_name: &str) -> Self {
        QueryConsole {
            store,
            db_name: db_name.to_string(),
            collection_name: collection_name.to_string(),
            results: Vec::new(),
            transcript: Transcript::new(),
        }
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// The result list of the last successful find (empty after a count).
    pub fn results(&self) -> &[Document] {
        &self.results
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Resets the transcript and the result list.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.results.clear();
    }

    /// Executes one line of console input.
    ///
    /// Appends exactly two transcript lines (echo + outcome) with one
    /// shared timestamp, updates the result list per the outcome rules,
    /// and returns the outcome. Never fails: parse errors surface as
    /// [QueryOutcome::Error].
    pub fn execute(&mut self, input: &str) -> QueryOutcome {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        let echoed = if input.is_empty() { "db.find()" } else { input };

        let outcome = self.evaluate(input);
        log::debug!(
            "Query '{}' against '{}.{}': {}",
            input,
            self.db_name,
            self.collection_name,
            outcome.message()
        );

        self.transcript
            .record(&timestamp, format!("> {}", echoed), outcome.message());
        outcome
    }

    fn evaluate(&mut self, input: &str) -> QueryOutcome {
        let documents = self.store.documents(&self.db_name, &self.collection_name);

        let command = match Command::classify(input) {
            Ok(command) => command,
            Err(err) => return QueryOutcome::Error(err.message().to_string()),
        };

        match command {
            Command::FindAll => {
                self.results = documents.iter().cloned().collect();
                QueryOutcome::Found(self.results.len())
            }
            Command::Find(filter_text) => match Filter::parse(&filter_text) {
                Ok(filter) => {
                    let matched: Vec<Document> = documents
                        .iter()
                        .filter(|doc| filter.matches(doc))
                        .cloned()
                        .collect();
                    let count = matched.len();
                    self.results = matched;
                    QueryOutcome::Found(count)
                }
                Err(err) => QueryOutcome::Error(err.message().to_string()),
            },
            Command::Count => {
                self.results.clear();
                QueryOutcome::Count(documents.len())
            }
            Command::Unknown => QueryOutcome::Unknown,
        }
    }
}
