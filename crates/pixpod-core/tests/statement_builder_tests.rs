//! Builders emit exactly the documented fields, in the documented order.

use chrono::{TimeZone, Utc};
use pixpod_core::statements::{
    activity_record, comment_statements, image_statements, like_statements, timestamp_literal,
    ActivityKind,
};
use pixpod_core::term::{Node, Statement, Term};
use pixpod_core::vocab;

const USER: &str = "http://bob.example.org/profile/card#me";

fn date() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 2, 5, 15, 35, 30).unwrap()
}

#[test]
fn image_statements_have_fixed_fields_and_order() {
    let meta = "http://bob.example.org/pix/images/12345.ttl";
    let image = "http://bob.example.org/pix/images/12345.jpeg";
    let description = "Check out the stunning view.";

    let built = image_statements(meta, image, description, USER, date());

    let subject = Node::iri(meta);
    assert_eq!(built.len(), 5);
    assert_eq!(
        built[0],
        Statement::new(subject.clone(), vocab::RDF_TYPE, Term::iri(vocab::SIOC_POST), meta)
    );
    assert_eq!(
        built[1],
        Statement::new(subject.clone(), vocab::FOAF_DEPICTION, Term::iri(image), meta)
    );
    assert_eq!(
        built[2],
        Statement::new(
            subject.clone(),
            vocab::DCT_DESCRIPTION,
            Term::literal(description),
            meta
        )
    );
    assert_eq!(
        built[3],
        Statement::new(subject.clone(), vocab::DCT_CREATOR, Term::iri(USER), meta)
    );
    assert_eq!(
        built[4],
        Statement::new(subject, vocab::DCT_CREATED, timestamp_literal(date()), meta)
    );
}

#[test]
fn like_statements_have_fixed_fields_and_order() {
    let like = "http://bob.example.org/pix/likes/12345.ttl";
    let image = "http://tom.example.org/pix/images/56789.ttl";

    let built = like_statements(like, image, USER, date());

    let subject = Node::iri(like);
    assert_eq!(built.len(), 4);
    assert_eq!(
        built[0],
        Statement::new(subject.clone(), vocab::AS_TYPE, Term::iri(vocab::AS_LIKE), like)
    );
    assert_eq!(
        built[1],
        Statement::new(subject.clone(), vocab::AS_ACTOR, Term::iri(USER), like)
    );
    assert_eq!(
        built[2],
        Statement::new(subject.clone(), vocab::AS_OBJECT, Term::iri(image), like)
    );
    assert_eq!(
        built[3],
        Statement::new(subject, vocab::AS_PUBLISHED, timestamp_literal(date()), like)
    );
}

#[test]
fn comment_statements_have_fixed_fields_and_order() {
    let comment = "http://bob.example.org/pix/comments/12345.ttl";
    let image = "http://tom.example.org/pix/images/56789.ttl";
    let content = "What an amazing picture!";

    let built = comment_statements(comment, content, image, USER, date());

    let subject = Node::iri(comment);
    assert_eq!(built.len(), 5);
    assert_eq!(
        built[0],
        Statement::new(subject.clone(), vocab::AS_TYPE, Term::iri(vocab::AS_NOTE), comment)
    );
    assert_eq!(
        built[1],
        Statement::new(subject.clone(), vocab::AS_CONTENT, Term::literal(content), comment)
    );
    assert_eq!(
        built[2],
        Statement::new(subject.clone(), vocab::AS_ACTOR, Term::iri(USER), comment)
    );
    assert_eq!(
        built[3],
        Statement::new(subject.clone(), vocab::AS_IN_REPLY_TO, Term::iri(image), comment)
    );
    assert_eq!(
        built[4],
        Statement::new(subject, vocab::AS_PUBLISHED, timestamp_literal(date()), comment)
    );
}

#[test]
fn activity_record_lands_in_the_target_document() {
    let like = "http://bob.example.org/pix/likes/12345.ttl";
    let image = "http://tom.example.org/pix/images/56789.ttl";

    let record = activity_record(like, image, ActivityKind::Like);

    assert_eq!(record.len(), 1);
    assert_eq!(
        record[0],
        Statement::new(Node::iri(like), vocab::AS_TYPE, Term::iri(vocab::AS_LIKE), image)
    );
}

#[test]
fn timestamps_serialize_with_millisecond_precision() {
    let at = Utc.timestamp_millis_opt(1553356555346).unwrap();
    assert_eq!(timestamp_literal(at).value(), "2019-03-23T15:55:55.346Z");
}
