use crate::errors::{DoculiteError, DoculiteResult, ErrorKind};

/// One classified console submission.
///
/// Classification reproduces the console grammar's precedence exactly:
/// the empty/literal find-all forms first, then any input containing
/// `find(`, then any input containing `count()`, then the unknown-command
/// fallback. An input containing both `find(` and `count()` is therefore
/// treated as a find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Return every document of the target collection.
    FindAll,
    /// Return the documents matching the carried JSON filter text.
    Find(String),
    /// Report the total document count of the target collection.
    Count,
    /// Anything the grammar does not recognize.
    Unknown,
}

impl Command {
    /// Classifies one line of console input.
    ///
    /// The filter text of a `find(...)` form is everything between the
    /// first `(` after `find` and the next `)`; filter text that trims to
    /// empty degrades to [Command::FindAll].
    ///
    /// # Errors
    ///
    /// Returns a [QueryParseError](ErrorKind::QueryParseError) when a
    /// `find(` has no closing parenthesis.
    pub fn classify(input: &str) -> DoculiteResult<Command> {
        let trimmed = input.trim();

        if trimmed.is_empty() || trimmed == "db.find()" || trimmed == "find()" {
            return Ok(Command::FindAll);
        }

        if let Some(start) = trimmed.find("find(") {
            let after = &trimmed[start + "find(".len()..];
            let Some(end) = after.find(')') else {
                log::error!("Unbalanced parentheses in query: {}", trimmed);
                return Err(DoculiteError::new(
                    "unbalanced parentheses in find()",
                    ErrorKind::QueryParseError,
                ));
            };

            let filter_text = after[..end].trim();
            if filter_text.is_empty() {
                return Ok(Command::FindAll);
            }
            return Ok(Command::Find(filter_text.to_string()));
        }

        if trimmed.contains("count()") {
            return Ok(Command::Count);
        }

        Ok(Command::Unknown)
    }
}
