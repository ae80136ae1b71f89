//! Graph builder
//!
//! Maps validated [`ProjectMetadata`] onto DOAP statements. Fields that are
//! absent or empty are skipped; nothing here touches the filesystem.

use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Graph, Literal, NamedNode, NamedNodeRef, Term, Triple};

use super::vocab::{doap, foaf, spdx};
use crate::error::GraphError;
use crate::pyproject::{Contact, ProjectMetadata};

/// Label under which `project.urls` names the issue tracker
pub const BUG_TRACKER_LABEL: &str = "Bug Tracker";

/// Build the DOAP graph for `project`, minting its IRI from `base_url`
///
/// # Errors
///
/// Returns [`GraphError::InvalidIri`] if the project IRI, a contact's `mailto:`
/// IRI or one of the project URLs is not a valid IRI.
pub fn build(project: &ProjectMetadata, base_url: &str) -> Result<Graph, GraphError> {
    let mut builder = Builder::new(project_iri(project, base_url)?);

    builder.add_identity(project);
    builder.add_people(&project.authors, doap::DEVELOPER)?;
    builder.add_people(&project.maintainers, doap::MAINTAINER)?;
    builder.add_urls(project)?;
    builder.add_license(project)?;

    Ok(builder.graph)
}

/// The IRI identifying the project: `base_url` followed by the project name
///
/// # Errors
///
/// Returns [`GraphError::InvalidIri`] if the concatenation is not a valid IRI.
pub fn project_iri(project: &ProjectMetadata, base_url: &str) -> Result<NamedNode, GraphError> {
    iri(format!("{base_url}{}", project.name))
}

struct Builder {
    graph: Graph,
    project: NamedNode,
}

impl Builder {
    fn new(project: NamedNode) -> Self {
        Self {
            graph: Graph::new(),
            project,
        }
    }

    fn add(
        &mut self,
        subject: &NamedNode,
        predicate: NamedNodeRef<'_>,
        object: impl Into<Term>,
    ) {
        let triple = Triple::new(subject.clone(), predicate, object);
        self.graph.insert(&triple);
    }

    fn add_identity(&mut self, project: &ProjectMetadata) {
        let subject = self.project.clone();
        self.add(&subject, rdf::TYPE, doap::PROJECT.into_owned());
        self.add(&subject, doap::NAME, Literal::new_simple_literal(&project.name));

        if let Some(description) = project.description.as_deref().filter(|d| !d.is_empty()) {
            self.add(&subject, doap::SHORTDESC, Literal::new_simple_literal(description));
            self.add(&subject, doap::DESCRIPTION, Literal::new_simple_literal(description));
        }
    }

    /// People are identified by their `mailto:` IRI, so two entries sharing an
    /// email become one resource.
    fn add_people(
        &mut self,
        people: &[Contact],
        role: NamedNodeRef<'_>,
    ) -> Result<(), GraphError> {
        let subject = self.project.clone();
        for person in people {
            // No email validation: a missing address yields a bare `mailto:`
            let mbox = iri(format!("mailto:{}", person.email.as_deref().unwrap_or_default()))?;

            self.add(&mbox, rdf::TYPE, foaf::AGENT.into_owned());
            if let Some(name) = person.name.as_deref() {
                self.add(&mbox, foaf::NAME, Literal::new_simple_literal(name));
            }
            self.add(&mbox, foaf::MBOX, mbox.clone());
            self.add(&subject, role, mbox);
        }
        Ok(())
    }

    fn add_urls(&mut self, project: &ProjectMetadata) -> Result<(), GraphError> {
        let subject = self.project.clone();

        if let Some(homepage) = project.url("homepage") {
            self.add(&subject, doap::HOMEPAGE, iri(homepage.to_string())?);
        }
        if let Some(repository) = project.url("repository") {
            let repository = iri(repository.to_string())?;
            self.add(&subject, doap::REPOSITORY, repository.clone());
            self.add(&repository, rdf::TYPE, doap::REPOSITORY_CLASS.into_owned());
            self.add(&repository, doap::LOCATION, subject.clone());
        }
        if let Some(documentation) = project.url("documentation") {
            self.add(&subject, doap::DOCUMENTATION, iri(documentation.to_string())?);
        }
        if let Some(tracker) = project.url(BUG_TRACKER_LABEL) {
            self.add(&subject, doap::BUG_DATABASE, iri(tracker.to_string())?);
        }
        Ok(())
    }

    fn add_license(&mut self, project: &ProjectMetadata) -> Result<(), GraphError> {
        let Some(text) = project.license.as_ref().and_then(|l| l.text()).filter(|t| !t.is_empty())
        else {
            return Ok(());
        };

        let subject = self.project.clone();
        let license = license_iri(text)?;
        self.add(&subject, doap::LICENSE, license.clone());
        self.add(&license, rdfs::LABEL, Literal::new_simple_literal(text));
        Ok(())
    }
}

/// SPDX IRI for a license identifier; spaces in compound expressions
/// (`MIT OR Apache-2.0`) are percent-encoded
fn license_iri(text: &str) -> Result<NamedNode, GraphError> {
    iri(format!("{}{}", spdx::LICENSES, text.replace(' ', "%20")))
}

fn iri(text: String) -> Result<NamedNode, GraphError> {
    NamedNode::new(text.as_str()).map_err(|e| GraphError::InvalidIri {
        iri: text,
        reason: e.to_string(),
    })
}
