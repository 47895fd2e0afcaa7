//! Turtle document parsing.
//!
//! Remote documents arrive as Turtle text. Sophia does the parsing; each
//! triple's term display forms are converted into the crate's own statement
//! model and stamped with the document IRI as their graph, so the store can
//! tell apart statements from different documents.

use crate::error::{Error, Result};
use crate::term::{Node, Statement, Term, TermParseError};
use sophia::api::prelude::*;

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct SinkError {
    message: String,
}

impl From<TermParseError> for SinkError {
    fn from(value: TermParseError) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

/// Parse a Turtle document into statements belonging to `base_iri`.
///
/// Relative references in the document resolve against `base_iri`.
pub fn parse_document(text: &str, base_iri: &str) -> Result<Vec<Statement>> {
    // The document's own location is its base.
    let prefixed = format!("@base <{base_iri}> .\n{text}");
    let reader = std::io::BufReader::new(std::io::Cursor::new(prefixed.into_bytes()));

    let mut out: Vec<Statement> = Vec::new();
    let mut parser = sophia::turtle::parser::turtle::parse_bufread(reader);
    parser
        .try_for_each_triple(|t| -> std::result::Result<(), SinkError> {
            let subject = Node::parse_display(&t.s().to_string())?;
            let predicate = Node::parse_display(&t.p().to_string())?;
            let Node::Iri(predicate) = predicate else {
                return Ok(());
            };
            let object = Term::parse_display(&t.o().to_string())?;
            out.push(Statement::new(subject, predicate, object, base_iri));
            Ok(())
        })
        .map_err(|err| Error::Parse {
            uri: base_iri.to_string(),
            detail: err.to_string(),
        })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab;

    #[test]
    fn parses_triples_with_datatyped_literals() {
        let doc = "\
<http://bob.example.org/pix/images/1.ttl> <http://purl.org/dc/terms/description> \"A view\" .\n\
<http://bob.example.org/pix/images/1.ttl> <http://purl.org/dc/terms/created> \"2019-03-23T15:55:55.346Z\"^^<http://www.w3.org/2001/XMLSchema#dateTime> .\n";
        let statements =
            parse_document(doc, "http://bob.example.org/pix/images/1.ttl").unwrap();
        assert_eq!(statements.len(), 2);
        assert!(statements
            .iter()
            .all(|st| st.graph == "http://bob.example.org/pix/images/1.ttl"));
        let created = &statements[1].object;
        assert_eq!(created.value(), "2019-03-23T15:55:55.346Z");
        match created {
            Term::Literal(lit) => {
                assert_eq!(lit.datatype.as_deref(), Some(vocab::XSD_DATE_TIME))
            }
            other => panic!("expected literal, got {other:?}"),
        }
    }

    #[test]
    fn resolves_relative_references_against_the_document() {
        let doc = "<> <http://www.w3.org/ns/ldp#contains> <images/> .\n";
        let statements = parse_document(doc, "http://bob.example.org/pix/").unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(
            statements[0].subject,
            Node::iri("http://bob.example.org/pix/")
        );
        assert_eq!(
            statements[0].object.as_iri(),
            Some("http://bob.example.org/pix/images/")
        );
    }

    #[test]
    fn malformed_documents_fail_with_parse_error() {
        let err = parse_document("this is not turtle", "http://e.org/doc").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
