//! The ad-hoc query console: command classification, evaluation, and the
//! timestamped transcript.
//!
//! The console understands a deliberately tiny pseudo-query language
//! (`find()`, `find({...})`, and `count()`) evaluated against one collection
//! snapshot per submission. Every submission appends exactly two transcript
//! lines (the echoed input and a one-line outcome) sharing one wall-clock
//! timestamp, and nothing is ever thrown to the caller: failures become
//! `Error:` transcript lines.

mod command;
mod query_console;
mod transcript;

pub use command::Command;
pub use query_console::{QueryConsole, QueryOutcome};
pub use transcript::{Transcript, TranscriptLine};
