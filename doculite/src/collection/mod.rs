//! Documents, collections, and document id generation.
//!
//! A [Document] is an open key/value record; a [Collection] is an
//! insertion-ordered persistent sequence of documents. Both are immutable
//! per revision: mutating operations return new containers that share
//! structure with their predecessor.

mod collection;
mod document;
mod id_generator;

pub use collection::Collection;
pub use document::{normalize, Document, DocumentIter};
pub(crate) use id_generator::TokenIdGenerator;
