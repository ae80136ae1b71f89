//! Vocabulary terms used in project descriptions

use oxrdf::NamedNodeRef;

/// Prefixes declared in Turtle output
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("doap", doap::NAMESPACE),
    ("foaf", foaf::NAMESPACE),
    ("sioc", sioc::NAMESPACE),
];

/// Description of a Project
pub mod doap {
    use super::NamedNodeRef;

    /// Namespace IRI
    pub const NAMESPACE: &str = "http://usefulinc.com/ns/doap#";

    /// `doap:Project`
    pub const PROJECT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#Project");
    /// `doap:Repository`
    pub const REPOSITORY_CLASS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#Repository");
    /// `doap:name`
    pub const NAME: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#name");
    /// `doap:shortdesc`
    pub const SHORTDESC: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#shortdesc");
    /// `doap:description`
    pub const DESCRIPTION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#description");
    /// `doap:developer`
    pub const DEVELOPER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#developer");
    /// `doap:maintainer`
    pub const MAINTAINER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#maintainer");
    /// `doap:homepage`
    pub const HOMEPAGE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#homepage");
    /// `doap:repository`
    pub const REPOSITORY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#repository");
    /// `doap:location`
    pub const LOCATION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#location");
    /// `doap:documentation`
    pub const DOCUMENTATION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#documentation");
    /// `doap:bug-database`
    pub const BUG_DATABASE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#bug-database");
    /// `doap:license`
    pub const LICENSE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#license");
}

/// Friend of a Friend
pub mod foaf {
    use super::NamedNodeRef;

    /// Namespace IRI
    pub const NAMESPACE: &str = "http://xmlns.com/foaf/0.1/";

    /// `foaf:Agent`
    pub const AGENT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/Agent");
    /// `foaf:name`
    pub const NAME: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/name");
    /// `foaf:mbox`
    pub const MBOX: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/mbox");
}

/// Semantically-Interlinked Online Communities
///
/// <https://www.w3.org/submissions/sioc-spec/>
pub mod sioc {
    /// Namespace IRI
    pub const NAMESPACE: &str = "http://rdfs.org/sioc/ns#";
}

/// SPDX license list; license resources are minted under this namespace
pub mod spdx {
    /// Namespace IRI
    pub const LICENSES: &str = "https://spdx.org/licenses/";
}
