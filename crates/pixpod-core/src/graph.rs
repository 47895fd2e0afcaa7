//! The in-memory graph mirror.
//!
//! Every fetched document is merged into one shared store. Loads are additive
//! and idempotent: re-inserting a statement that is already present is a
//! no-op, and the store is never pruned for the lifetime of the backend.

use crate::term::{Node, Statement, Term};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    ordered: Vec<Statement>,
    present: HashSet<Statement>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn contains(&self, statement: &Statement) -> bool {
        self.present.contains(statement)
    }

    /// Insert one statement; returns false when it was already present.
    pub fn insert(&mut self, statement: Statement) -> bool {
        if self.present.contains(&statement) {
            return false;
        }
        self.present.insert(statement.clone());
        self.ordered.push(statement);
        true
    }

    /// Bulk insert; returns the number of statements actually added.
    pub fn insert_all<I>(&mut self, statements: I) -> usize
    where
        I: IntoIterator<Item = Statement>,
    {
        statements
            .into_iter()
            .filter(|st| self.insert(st.clone()))
            .count()
    }

    /// Bulk remove; returns the number of statements actually removed.
    pub fn remove_all(&mut self, statements: &[Statement]) -> usize {
        let mut removed = 0;
        for st in statements {
            if self.present.remove(st) {
                removed += 1;
            }
        }
        if removed > 0 {
            let present = &self.present;
            self.ordered.retain(|st| present.contains(st));
        }
        removed
    }

    /// Pattern match; any position may be a wildcard.
    pub fn matching(
        &self,
        subject: Option<&Node>,
        predicate: Option<&str>,
        object: Option<&Term>,
        graph: Option<&str>,
    ) -> Vec<&Statement> {
        self.ordered
            .iter()
            .filter(|st| {
                subject.map_or(true, |s| &st.subject == s)
                    && predicate.map_or(true, |p| st.predicate == p)
                    && object.map_or(true, |o| &st.object == o)
                    && graph.map_or(true, |g| st.graph == g)
            })
            .collect()
    }

    /// Single-result lookup: the object of the first statement matching
    /// subject and predicate (and graph, when given).
    pub fn first_object(
        &self,
        subject: &Node,
        predicate: &str,
        graph: Option<&str>,
    ) -> Option<&Term> {
        self.ordered
            .iter()
            .find(|st| {
                &st.subject == subject
                    && st.predicate == predicate
                    && graph.map_or(true, |g| st.graph == g)
            })
            .map(|st| &st.object)
    }

    /// All statements recorded in one document.
    pub fn statements_in(&self, graph: &str) -> Vec<&Statement> {
        self.ordered.iter().filter(|st| st.graph == graph).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(s: &str, p: &str, o: &str, g: &str) -> Statement {
        Statement::new(Node::iri(s), p, Term::iri(o), g)
    }

    #[test]
    fn insert_is_idempotent() {
        let mut store = GraphStore::new();
        let a = st("http://e.org/s", "http://e.org/p", "http://e.org/o", "http://e.org/g");
        assert!(store.insert(a.clone()));
        assert!(!store.insert(a));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn matching_honors_wildcards() {
        let mut store = GraphStore::new();
        store.insert(st("http://e.org/a", "http://e.org/p", "http://e.org/x", "http://e.org/g1"));
        store.insert(st("http://e.org/b", "http://e.org/p", "http://e.org/x", "http://e.org/g2"));
        store.insert(st("http://e.org/a", "http://e.org/q", "http://e.org/y", "http://e.org/g1"));

        assert_eq!(store.matching(None, Some("http://e.org/p"), None, None).len(), 2);
        assert_eq!(store.matching(None, None, None, Some("http://e.org/g1")).len(), 2);
        let subject = Node::iri("http://e.org/a");
        assert_eq!(store.matching(Some(&subject), None, None, None).len(), 2);
        assert_eq!(store.matching(None, None, None, None).len(), 3);
    }

    #[test]
    fn remove_keeps_insertion_order() {
        let mut store = GraphStore::new();
        let a = st("http://e.org/a", "http://e.org/p", "http://e.org/x", "http://e.org/g");
        let b = st("http://e.org/b", "http://e.org/p", "http://e.org/x", "http://e.org/g");
        let c = st("http://e.org/c", "http://e.org/p", "http://e.org/x", "http://e.org/g");
        store.insert_all([a.clone(), b.clone(), c.clone()]);

        assert_eq!(store.remove_all(std::slice::from_ref(&b)), 1);
        let left: Vec<_> = store.matching(None, None, None, None);
        assert_eq!(left, vec![&a, &c]);
    }

    #[test]
    fn first_object_picks_earliest_match() {
        let mut store = GraphStore::new();
        store.insert(st("http://e.org/a", "http://e.org/p", "http://e.org/first", "http://e.org/g"));
        store.insert(st("http://e.org/a", "http://e.org/p", "http://e.org/second", "http://e.org/g"));
        let found = store
            .first_object(&Node::iri("http://e.org/a"), "http://e.org/p", Some("http://e.org/g"))
            .and_then(Term::as_iri);
        assert_eq!(found, Some("http://e.org/first"));
    }
}
