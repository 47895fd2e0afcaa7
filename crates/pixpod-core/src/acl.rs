//! Access-list generation.
//!
//! Every resource gets exactly one owner authorization (full control), then
//! either one public authorization or one authorization per allowed agent,
//! never both. Folder authorizations additionally apply to newly created
//! children, so files later created inside inherit the folder's policy.
//!
//! Emission order is fixed (owner block first; within a block: type,
//! accessTo, agent/agentClass, modes in caller order, defaultForNew last)
//! and is part of the wire contract.

use crate::term::{Node, Statement, Term};
use crate::vocab;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    Control,
    Read,
    Write,
    Append,
}

impl AccessMode {
    pub fn iri(self) -> &'static str {
        match self {
            AccessMode::Control => vocab::ACL_CONTROL,
            AccessMode::Read => vocab::ACL_READ,
            AccessMode::Write => vocab::ACL_WRITE,
            AccessMode::Append => vocab::ACL_APPEND,
        }
    }
}

/// The companion access document of a resource.
pub fn acl_document_uri(resource: &str) -> String {
    format!("{resource}.acl")
}

/// One authorization block. `agent` is a concrete identifier, or `None` for
/// the any-agent class.
pub fn access_statements(
    subject: &Node,
    resource: &str,
    agent: Option<&str>,
    modes: &[AccessMode],
    for_folder: bool,
    acl_doc: &str,
) -> Vec<Statement> {
    let mut block = vec![
        Statement::new(
            subject.clone(),
            vocab::RDF_TYPE,
            Term::iri(vocab::ACL_AUTHORIZATION),
            acl_doc,
        ),
        Statement::new(
            subject.clone(),
            vocab::ACL_ACCESS_TO,
            Term::iri(resource),
            acl_doc,
        ),
    ];
    match agent {
        Some(agent) => block.push(Statement::new(
            subject.clone(),
            vocab::ACL_AGENT,
            Term::iri(agent),
            acl_doc,
        )),
        None => block.push(Statement::new(
            subject.clone(),
            vocab::ACL_AGENT_CLASS,
            Term::iri(vocab::FOAF_AGENT),
            acl_doc,
        )),
    }
    for mode in modes {
        block.push(Statement::new(
            subject.clone(),
            vocab::ACL_MODE,
            Term::iri(mode.iri()),
            acl_doc,
        ));
    }
    if for_folder {
        block.push(Statement::new(
            subject.clone(),
            vocab::ACL_DEFAULT_FOR_NEW,
            Term::iri(resource),
            acl_doc,
        ));
    }
    block
}

/// The full access list of a resource.
pub fn access_list(
    owner: &str,
    resource: &str,
    modes: &[AccessMode],
    public: bool,
    allowed: &[String],
    for_folder: bool,
) -> Vec<Statement> {
    let acl_doc = acl_document_uri(resource);
    let owner_subject = Node::iri(format!("{acl_doc}#owner"));
    let mut acl = access_statements(
        &owner_subject,
        resource,
        Some(owner),
        &[AccessMode::Control, AccessMode::Read, AccessMode::Write],
        for_folder,
        &acl_doc,
    );
    if public {
        let public_subject = Node::iri(format!("{acl_doc}#public"));
        acl.extend(access_statements(
            &public_subject,
            resource,
            None,
            modes,
            for_folder,
            &acl_doc,
        ));
    } else {
        let agent_subject = Node::iri(acl_doc.clone());
        for agent in allowed {
            acl.extend(access_statements(
                &agent_subject,
                resource,
                Some(agent),
                modes,
                for_folder,
                &acl_doc,
            ));
        }
    }
    acl
}

pub fn folder_access_list(
    owner: &str,
    folder: &str,
    modes: &[AccessMode],
    public: bool,
    allowed: &[String],
) -> Vec<Statement> {
    access_list(owner, folder, modes, public, allowed, true)
}

pub fn file_access_list(
    owner: &str,
    file: &str,
    modes: &[AccessMode],
    public: bool,
    allowed: &[String],
) -> Vec<Statement> {
    access_list(owner, file, modes, public, allowed, false)
}
