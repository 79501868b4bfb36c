use rand::rngs::OsRng;
use rand::Rng;

use crate::common::GENERATED_ID_LENGTH;

const TOKEN_CHARSET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates short alphanumeric document id tokens.
///
/// Tokens are [GENERATED_ID_LENGTH] lower-case base-36 characters drawn
/// from the OS random source. No collision detection is performed: with a
/// 36^13 token space the collision probability within one collection is
/// negligible for a simulation, and duplicate-id inserts are resolved
/// first-writer-wins by the store.
pub(crate) struct TokenIdGenerator;

impl TokenIdGenerator {
    pub(crate) fn new() -> Self {
        TokenIdGenerator
    }

    /// Produces the next id token.
    pub(crate) fn next_id(&self) -> String {
        let mut rng = OsRng;
        (0..GENERATED_ID_LENGTH)
            .map(|_| {
                let index = rng.gen_range(0..TOKEN_CHARSET.len());
                TOKEN_CHARSET[index] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_length() {
        let generator = TokenIdGenerator::new();
        assert_eq!(generator.next_id().len(), GENERATED_ID_LENGTH);
    }

    #[test]
    fn test_token_charset() {
        let generator = TokenIdGenerator::new();
        for _ in 0..100 {
            let token = generator.next_id();
            assert!(token
                .bytes()
                .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_tokens_are_distinct() {
        let generator = TokenIdGenerator::new();
        let tokens: HashSet<String> = (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(tokens.len(), 1000);
    }
}
