use im::OrdMap;
use smallvec::SmallVec;

use crate::common::{Value, DOC_ID};
use crate::errors::{DoculiteError, DoculiteResult, ErrorKind};
use std::fmt::{Debug, Display};

type FieldVec = SmallVec<[String; 8]>;

/// Represents a document in a doculite collection, backed by a lock-free
/// persistent data structure.
///
/// Documents are composed of key-value pairs. The key is always a [String]
/// and the value is a [Value]. Keys are flat: no embedded-field separator is
/// interpreted, so `"a.b"` is one key, not a path.
///
/// The `_id` field holds the document's identifier within its collection. If
/// a document is inserted without a string `_id`, the store assigns a
/// generated token during insertion.
///
/// ## Lock-Free Design
///
/// This struct uses `im::OrdMap` (a persistent ordered map):
/// - O(1) cloning via internal Arc sharing
/// - Mutations create new maps via structural sharing
/// - Each mutated document is completely independent
#[derive(Clone, Eq, PartialEq, Default)]
pub struct Document {
    data: OrdMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: OrdMap::new(),
        }
    }

    /// Checks if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of fields in the document.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Associates the specified [Value] with the specified key in this
    /// document. If the key already exists, its value is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn put<T: Into<Value>>(&mut self, key: &str, value: T) -> DoculiteResult<()> {
        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(DoculiteError::new(
                "Document does not support empty key",
                ErrorKind::InvalidOperation,
            ));
        }

        self.data = self.data.update(key.to_string(), value.into());
        Ok(())
    }

    /// Inserts a key without validation. Used when keys originate from
    /// parsed JSON, where an empty key is legal.
    pub(crate) fn insert_raw(&mut self, key: &str, value: Value) {
        self.data = self.data.update(key.to_string(), value);
    }

    /// Returns the value associated with the key, or `None` if the field is
    /// absent. An explicit `Null` field is distinguishable from a missing
    /// one, which strict-equality filtering relies on.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Removes the field with the given key, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Checks whether the document contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns the document id, if the `_id` field holds a string.
    pub fn id(&self) -> Option<String> {
        match self.data.get(DOC_ID) {
            Some(Value::String(id)) => Some(id.clone()),
            _ => None,
        }
    }

    /// Checks whether the document carries a string `_id`.
    pub fn has_id(&self) -> bool {
        self.id().is_some()
    }

    /// Forces the `_id` field to the given token.
    pub(crate) fn set_id(&mut self, id: &str) {
        self.data = self
            .data
            .update(DOC_ID.to_string(), Value::String(id.to_string()));
    }

    /// Returns the field names of this document.
    pub fn fields(&self) -> FieldVec {
        self.data.keys().cloned().collect()
    }

    /// Returns an iterator over the document's fields in key order.
    pub fn iter(&self) -> DocumentIter<'_> {
        DocumentIter {
            inner: self.data.iter(),
        }
    }

    /// Parses a JSON object literal into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or the JSON value is
    /// not an object.
    pub fn from_json_str(text: &str) -> DoculiteResult<Document> {
        let parsed: serde_json::Value = serde_json::from_str(text)?;
        match Value::from_json(parsed) {
            Value::Document(doc) => Ok(doc),
            other => {
                log::error!("Document JSON must be an object, got: {}", other);
                Err(DoculiteError::new(
                    "document JSON must be an object",
                    ErrorKind::InvalidOperation,
                ))
            }
        }
    }

    /// Converts this document to a [serde_json::Value] object.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(self.data.len());
        for (key, value) in self.data.iter() {
            map.insert(key.clone(), value.to_json());
        }
        serde_json::Value::Object(map)
    }

    /// Renders this document as a compact JSON string.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Renders this document as an indented JSON string, the way the console
    /// result pane displays documents.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_else(|_| self.to_json_string())
    }
}

/// Iterator over a document's fields.
pub struct DocumentIter<'a> {
    inner: im::ordmap::Iter<'a, String, Value>,
}

impl<'a> Iterator for DocumentIter<'a> {
    type Item = (&'a String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_pretty_json())
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl serde::Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a doculite Document with JSON-like syntax.
///
/// # Examples
///
/// ```rust
/// use doculite::doc;
///
/// // Empty document
/// let empty = doc!{};
///
/// // Simple key-value pairs
/// let simple = doc!{
///     name: "Alice",
///     age: 30
/// };
///
/// // Nested documents and arrays
/// let complex = doc!{
///     user: {
///         name: "Charlie",
///         tags: ["admin", "user"]
///     },
///     values: [1, 2, 3]
/// };
/// ```
#[macro_export]
macro_rules! doc {
    // match an empty document (with braces)
    ({}) => {
        $crate::collection::Document::new()
    };

    // match an empty document
    () => {
        $crate::collection::Document::new()
    };

    // match a document with key value pairs (outer braces)
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::doc!($($key : $value),*)
    };

    // match a document with key value pairs
    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::collection::Document::new();
            $(
                doc.put(&$crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the doc! macro.
/// Handles nested documents, arrays, and expressions.
#[macro_export]
macro_rules! doc_value {
    // match a nested document
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        {
            $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
        }
    };

    // match an array of values
    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    // match an expression (variable, literal, parenthesized arithmetic, etc.)
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
