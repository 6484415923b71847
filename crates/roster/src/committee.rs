//! Committee listing: members grouped under the organization's office
//! hierarchy.

use serde::Serialize;

use crate::model::Member;
use crate::normalize::compare_names;

/// Section title and the role names that place a member in it, in display
/// order.
pub const COMMITTEE_HIERARCHY: &[(&str, &[&str])] = &[
    ("President", &["President"]),
    ("Vice Presidents", &["Vice President"]),
    ("Secretaries", &["Secretary", "Joint Secretary"]),
    ("Treasurers", &["Treasurer", "Joint Treasurer"]),
    ("Āadhar Stambh", &["Āadhar Stambh"]),
    ("Committee Members", &["Committee Member"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitteeSection {
    pub title: String,
    pub members: Vec<Member>,
}

/// Split a role string like `"President, Cooking Captain"` into its parts.
pub fn role_parts(role: &str) -> impl Iterator<Item = &str> {
    role.split(',').map(str::trim).filter(|p| !p.is_empty())
}

/// A role part holds `office` when it is the office itself or the office
/// followed by a qualifier at a word boundary, e.g. "Committee Member (Youth)".
/// "Vice President" does not hold "President".
pub fn holds_office(part: &str, office: &str) -> bool {
    part.strip_prefix(office)
        .is_some_and(|rest| rest.chars().next().map_or(true, |c| !c.is_alphanumeric()))
}

/// Sections of the hierarchy that have at least one member, each sorted by
/// name. A member holding two offices appears in both sections.
pub fn committee_sections(members: &[Member]) -> Vec<CommitteeSection> {
    COMMITTEE_HIERARCHY
        .iter()
        .filter_map(|(title, roles)| {
            let mut section: Vec<Member> = members
                .iter()
                .filter(|m| role_parts(&m.role).any(|part| roles.iter().any(|r| holds_office(part, r))))
                .cloned()
                .collect();
            if section.is_empty() {
                return None;
            }
            section.sort_by(|a, b| compare_names(&a.name, &b.name));
            Some(CommitteeSection {
                title: title.to_string(),
                members: section,
            })
        })
        .collect()
}
