//! Identifier generation for newly created documents.

use uuid::Uuid;

/// A fresh random path segment. Collisions are accepted, not mitigated.
pub fn fresh_token() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_url_safe_and_distinct() {
        let a = fresh_token();
        let b = fresh_token();
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
