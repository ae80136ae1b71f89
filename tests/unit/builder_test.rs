//! Tests for the DOAP graph builder

use doapetry::doap::build;
use doapetry::doap::vocab::{doap, foaf};
use doapetry::error::GraphError;
use doapetry::pyproject::{Contact, License, ProjectMetadata, parse_str};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Literal, Term};

use crate::common::{BASE, count, count_from, has, iri};

fn contact(name: &str, email: &str) -> Contact {
    Contact {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
    }
}

#[test]
fn name_only_yields_two_statements() {
    let graph = build(&ProjectMetadata::named("foo"), BASE).unwrap();
    let project = iri("https://example.org/foo");

    assert_eq!(graph.len(), 2);
    assert!(has(&graph, &project, rdf::TYPE, doap::PROJECT.into_owned()));
    assert!(has(&graph, &project, doap::NAME, Literal::new_simple_literal("foo")));
}

#[test]
fn base_url_prefixes_project_iri() {
    let graph = build(&ProjectMetadata::named("foo"), "https://projects.example.com/py/").unwrap();
    let project = iri("https://projects.example.com/py/foo");

    assert!(has(&graph, &project, rdf::TYPE, doap::PROJECT.into_owned()));
}

#[test]
fn description_uses_both_predicates() {
    let mut metadata = ProjectMetadata::named("foo");
    metadata.description = Some("bar".to_string());
    let graph = build(&metadata, BASE).unwrap();
    let project = iri("https://example.org/foo");

    assert_eq!(graph.len(), 4);
    assert!(has(&graph, &project, doap::SHORTDESC, Literal::new_simple_literal("bar")));
    assert!(has(&graph, &project, doap::DESCRIPTION, Literal::new_simple_literal("bar")));
}

#[test]
fn empty_description_is_skipped() {
    let mut metadata = ProjectMetadata::named("foo");
    metadata.description = Some(String::new());

    assert_eq!(build(&metadata, BASE).unwrap().len(), 2);
}

#[test]
fn authors_become_developers() {
    let mut metadata = ProjectMetadata::named("foo");
    metadata.authors = vec![contact("Ada", "ada@example.org"), contact("Bob", "bob@example.org")];
    let graph = build(&metadata, BASE).unwrap();
    let project = iri("https://example.org/foo");
    let ada = iri("mailto:ada@example.org");

    assert!(has(&graph, &ada, rdf::TYPE, foaf::AGENT.into_owned()));
    assert!(has(&graph, &ada, foaf::NAME, Literal::new_simple_literal("Ada")));
    assert!(has(&graph, &ada, foaf::MBOX, ada.clone()));
    assert!(has(&graph, &project, doap::DEVELOPER, ada.clone()));
    assert_eq!(count_from(&graph, &project, doap::DEVELOPER), 2);
    assert_eq!(count_from(&graph, &project, doap::MAINTAINER), 0);
}

#[test]
fn maintainers_use_maintainer_predicate() {
    let mut metadata = ProjectMetadata::named("foo");
    metadata.maintainers = vec![contact("Cy", "cy@example.org")];
    let graph = build(&metadata, BASE).unwrap();
    let project = iri("https://example.org/foo");
    let cy = iri("mailto:cy@example.org");

    assert!(has(&graph, &project, doap::MAINTAINER, cy.clone()));
    assert!(has(&graph, &cy, rdf::TYPE, foaf::AGENT.into_owned()));
    assert_eq!(count_from(&graph, &project, doap::DEVELOPER), 0);
}

#[test]
fn shared_email_collapses_into_one_person() {
    let mut metadata = ProjectMetadata::named("foo");
    metadata.authors = vec![contact("Ada", "team@example.org"), contact("Bob", "team@example.org")];
    let graph = build(&metadata, BASE).unwrap();
    let project = iri("https://example.org/foo");
    let team = iri("mailto:team@example.org");

    let agent: Term = foaf::AGENT.into_owned().into();
    assert_eq!(count(&graph, rdf::TYPE, &agent), 1);
    // Both names hang off the single resource
    assert_eq!(count_from(&graph, &team, foaf::NAME), 2);
    // Identical developer links are one statement in a set
    assert!(has(&graph, &project, doap::DEVELOPER, team));
    assert_eq!(count_from(&graph, &project, doap::DEVELOPER), 1);
}

#[test]
fn missing_email_passes_through_as_bare_mailto() {
    let mut metadata = ProjectMetadata::named("foo");
    metadata.authors = vec![Contact {
        name: Some("Anon".to_string()),
        email: None,
    }];
    let graph = build(&metadata, BASE).unwrap();

    assert!(has(&graph, &iri("https://example.org/foo"), doap::DEVELOPER, iri("mailto:")));
}

#[test]
fn repository_links_back_to_project() {
    let mut metadata = ProjectMetadata::named("foo");
    metadata
        .urls
        .insert("repository".to_string(), "https://example.org/repo".to_string());
    let graph = build(&metadata, BASE).unwrap();
    let project = iri("https://example.org/foo");
    let repo = iri("https://example.org/repo");

    assert!(has(&graph, &repo, rdf::TYPE, doap::REPOSITORY_CLASS.into_owned()));
    assert!(has(&graph, &repo, doap::LOCATION, project.clone()));
    assert!(has(&graph, &project, doap::REPOSITORY, repo));
    assert_eq!(graph.len(), 5);
}

#[test]
fn urls_map_to_their_predicates() {
    let metadata = parse_str(
        r#"
[project]
name = "foo"

[project.urls]
homepage = "https://foo.example.org/"
documentation = "https://docs.example.org/foo"
"Bug Tracker" = "https://example.org/foo/issues"
changelog = "https://example.org/foo/changes"
"#,
    )
    .unwrap()
    .project;
    let graph = build(&metadata, BASE).unwrap();
    let project = iri("https://example.org/foo");

    assert!(has(&graph, &project, doap::HOMEPAGE, iri("https://foo.example.org/")));
    assert!(has(&graph, &project, doap::DOCUMENTATION, iri("https://docs.example.org/foo")));
    assert!(has(&graph, &project, doap::BUG_DATABASE, iri("https://example.org/foo/issues")));
    // Unknown labels are ignored
    assert_eq!(graph.len(), 5);
}

#[test]
fn license_text_mints_spdx_resource() {
    let mut metadata = ProjectMetadata::named("foo");
    metadata.license = Some(License::Text {
        text: "MIT".to_string(),
    });
    let graph = build(&metadata, BASE).unwrap();
    let license = iri("https://spdx.org/licenses/MIT");

    assert!(has(&graph, &iri("https://example.org/foo"), doap::LICENSE, license.clone()));
    assert!(has(&graph, &license, rdfs::LABEL, Literal::new_simple_literal("MIT")));
}

#[test]
fn no_license_means_no_license_statements() {
    let graph = build(&ProjectMetadata::named("foo"), BASE).unwrap();

    assert!(graph.iter().all(|t| t.predicate != doap::LICENSE && t.predicate != rdfs::LABEL));
}

#[test]
fn license_file_without_text_is_skipped() {
    let mut metadata = ProjectMetadata::named("foo");
    metadata.license = Some(License::File {
        file: "LICENSE".to_string(),
    });

    assert_eq!(build(&metadata, BASE).unwrap().len(), 2);
}

#[test]
fn invalid_url_is_fatal() {
    let mut metadata = ProjectMetadata::named("foo");
    metadata
        .urls
        .insert("homepage".to_string(), "not a url".to_string());

    assert!(matches!(build(&metadata, BASE), Err(GraphError::InvalidIri { .. })));
}
