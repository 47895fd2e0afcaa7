//! The statement model for pod documents.
//!
//! Statements carry the graph (document) they belong to, so one store can
//! mirror many remote documents at once. The textual form is the N-Triples
//! subset of Turtle; serialized statement lines are also the wire format
//! pixpod writes back to the pod.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An IRI or blank-node subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Node {
    Iri(String),
    Blank(String),
}

impl Node {
    pub fn iri(value: impl Into<String>) -> Self {
        Node::Iri(value.into())
    }

    /// Parse the textual form of a subject/predicate position term.
    pub fn parse_display(input: &str) -> Result<Node, TermParseError> {
        match Term::parse_display(input)? {
            Term::Node(node) => Ok(node),
            Term::Literal(_) => Err(TermParseError {
                detail: format!("expected IRI or blank node, got literal: {input}"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: String,
    pub datatype: Option<String>,
    pub language: Option<String>,
}

/// An object-position term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Node(Node),
    Literal(Literal),
}

impl Term {
    pub fn iri(value: impl Into<String>) -> Self {
        Term::Node(Node::Iri(value.into()))
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: value.into(),
            datatype: None,
            language: None,
        })
    }

    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: value.into(),
            datatype: Some(datatype.into()),
            language: None,
        })
    }

    /// The bare value of the term: the IRI, the blank-node label, or the
    /// literal's lexical form.
    pub fn value(&self) -> &str {
        match self {
            Term::Node(Node::Iri(iri)) => iri,
            Term::Node(Node::Blank(label)) => label,
            Term::Literal(lit) => &lit.lexical,
        }
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Node(Node::Iri(iri)) => Some(iri),
            _ => None,
        }
    }

    /// Parse the N-Triples-ish textual form of a single term.
    pub fn parse_display(input: &str) -> Result<Term, TermParseError> {
        let s = input.trim();

        if let Some(iri) = s.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
            return Ok(Term::iri(iri));
        }

        if let Some(label) = s.strip_prefix("_:") {
            return Ok(Term::Node(Node::Blank(label.to_string())));
        }

        if s.starts_with('"') {
            let mut end_quote = None;
            let mut escaped = false;
            for (i, ch) in s.char_indices().skip(1) {
                if escaped {
                    escaped = false;
                    continue;
                }
                match ch {
                    '\\' => escaped = true,
                    '"' => {
                        end_quote = Some(i);
                        break;
                    }
                    _ => {}
                }
            }
            let Some(end) = end_quote else {
                return Err(TermParseError {
                    detail: format!("literal missing closing quote: {s}"),
                });
            };

            let lexical = unescape_literal(&s[1..end]);
            let rest = s[end + 1..].trim();

            let mut language = None;
            let mut datatype = None;
            if let Some(lang) = rest.strip_prefix('@') {
                language = Some(lang.to_string());
            } else if let Some(dt) = rest.strip_prefix("^^") {
                let dt = dt.trim();
                if let Some(dt_iri) = dt.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
                    datatype = Some(dt_iri.to_string());
                } else if !dt.is_empty() {
                    datatype = Some(dt.to_string());
                }
            }
            // xsd:string is the implicit datatype of a plain literal; fold it
            // away so the two spellings compare equal.
            if datatype.as_deref() == Some(crate::vocab::XSD_STRING) {
                datatype = None;
            }

            return Ok(Term::Literal(Literal {
                lexical,
                datatype,
                language,
            }));
        }

        Err(TermParseError {
            detail: format!("unsupported term form: {s}"),
        })
    }
}

/// A subject-predicate-object assertion recorded in a named document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Statement {
    pub subject: Node,
    pub predicate: String,
    pub object: Term,
    /// IRI of the document this statement belongs to.
    pub graph: String,
}

impl Statement {
    pub fn new(
        subject: Node,
        predicate: impl Into<String>,
        object: Term,
        graph: impl Into<String>,
    ) -> Self {
        Statement {
            subject,
            predicate: predicate.into(),
            object,
            graph: graph.into(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("malformed term: {detail}")]
pub struct TermParseError {
    pub detail: String,
}

// ============================================================================
// Textual forms
// ============================================================================

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Blank(label) => write!(f, "_:{label}"),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape_literal(&self.lexical))?;
        if let Some(lang) = &self.language {
            write!(f, "@{lang}")?;
        } else if let Some(dt) = &self.datatype {
            write!(f, "^^<{dt}>")?;
        }
        Ok(())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Node(node) => node.fmt(f),
            Term::Literal(lit) => lit.fmt(f),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> {} .",
            self.subject, self.predicate, self.object
        )
    }
}

/// Serialize statements as one document, one statement per line.
pub fn serialize_statements(statements: &[Statement]) -> String {
    statements
        .iter()
        .map(Statement::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

fn unescape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
