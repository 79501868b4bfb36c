//! Query filters for the console's pseudo-query language.

use im::OrdMap;
use itertools::Itertools;
use std::fmt::Display;

use crate::collection::Document;
use crate::common::Value;
use crate::errors::{DoculiteError, DoculiteResult, ErrorKind};

/// A flat equality filter over document fields.
///
/// The console's `find({...})` form produces exactly one of these: a set of
/// key/value criteria, every one of which must match for a document to be
/// included (conjunction). Matching is strict equality only: no nested
/// paths, no operators, no regular expressions, no type coercion beyond the
/// cross-numeric comparison built into [Value] equality. A criterion
/// matches only when the field is present: an absent field never equals
/// anything, including `null`.
#[derive(Debug)]
pub struct Filter {
    criteria: OrdMap<String, Value>,
}

impl Filter {
    /// A filter with no criteria, matching every document.
    pub fn all() -> Filter {
        Filter {
            criteria: OrdMap::new(),
        }
    }

    /// Parses a JSON object literal into a filter.
    ///
    /// # Errors
    ///
    /// Returns a [FilterError](ErrorKind::FilterError) if the text is not
    /// valid JSON, or parses to something other than an object.
    pub fn parse(filter_text: &str) -> DoculiteResult<Filter> {
        let parsed: serde_json::Value = serde_json::from_str(filter_text)?;
        match Value::from_json(parsed) {
            Value::Document(doc) => {
                let criteria = doc
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                Ok(Filter { criteria })
            }
            other => {
                log::error!("Filter must be a JSON object, got: {}", other);
                Err(DoculiteError::new(
                    "filter must be a JSON object",
                    ErrorKind::FilterError,
                ))
            }
        }
    }

    /// Checks whether the document satisfies every criterion.
    pub fn matches(&self, doc: &Document) -> bool {
        self.criteria
            .iter()
            .all(|(key, value)| doc.get(key).is_some_and(|field| field == value))
    }

    /// Checks whether the filter carries no criteria.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.criteria.is_empty() {
            return write!(f, "AllFilter");
        }
        let rendered = self
            .criteria
            .iter()
            .map(|(key, value)| format!("({} == {})", key, value))
            .join(" && ");
        write!(f, "{}", rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    fn sample_doc() -> Document {
        doc! {
            name: "Test Document 2",
            value: 200,
            tags: ["test", "demo"],
            active: true,
        }
    }

    #[test]
    fn test_all_matches_everything() {
        let filter = Filter::all();
        assert!(filter.is_empty());
        assert!(filter.matches(&sample_doc()));
        assert!(filter.matches(&Document::new()));
    }

    #[test]
    fn test_parse_empty_object_matches_everything() {
        let filter = Filter::parse("{}").unwrap();
        assert!(filter.is_empty());
        assert!(filter.matches(&Document::new()));
    }

    #[test]
    fn test_single_criterion() {
        let filter = Filter::parse(r#"{"value": 200}"#).unwrap();
        assert_eq!(filter.len(), 1);
        assert!(filter.matches(&sample_doc()));

        let miss = Filter::parse(r#"{"value": 100}"#).unwrap();
        assert!(!miss.matches(&sample_doc()));
    }

    #[test]
    fn test_conjunction_over_all_criteria() {
        let both = Filter::parse(r#"{"value": 200, "active": true}"#).unwrap();
        assert!(both.matches(&sample_doc()));

        let one_wrong = Filter::parse(r#"{"value": 200, "active": false}"#).unwrap();
        assert!(!one_wrong.matches(&sample_doc()));
    }

    #[test]
    fn test_no_type_coercion() {
        let filter = Filter::parse(r#"{"value": "200"}"#).unwrap();
        assert!(!filter.matches(&sample_doc()));
    }

    #[test]
    fn test_cross_numeric_match() {
        let filter = Filter::parse(r#"{"value": 200.0}"#).unwrap();
        assert!(filter.matches(&sample_doc()));
    }

    #[test]
    fn test_absent_field_never_matches() {
        let filter = Filter::parse(r#"{"missing": null}"#).unwrap();
        assert!(!filter.matches(&sample_doc()));

        let mut with_null = sample_doc();
        with_null.put("missing", Value::Null).unwrap();
        assert!(filter.matches(&with_null));
    }

    #[test]
    fn test_array_criterion_matches_structurally() {
        let filter = Filter::parse(r#"{"tags": ["test", "demo"]}"#).unwrap();
        assert!(filter.matches(&sample_doc()));

        let reordered = Filter::parse(r#"{"tags": ["demo", "test"]}"#).unwrap();
        assert!(!reordered.matches(&sample_doc()));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = Filter::parse(r#"{"value": }"#);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::FilterError);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        for text in ["5", "[1, 2]", "\"name\"", "null"] {
            let result = Filter::parse(text);
            assert!(result.is_err(), "{} should not parse as a filter", text);
            assert_eq!(result.unwrap_err().kind(), &ErrorKind::FilterError);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Filter::all()), "AllFilter");
        let filter = Filter::parse(r#"{"value": 200}"#).unwrap();
        assert_eq!(format!("{}", filter), "(value == 200)");
    }
}
