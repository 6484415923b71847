//! Directory lookups: free-text search, id lookup and member QR payloads.

use crate::model::Member;

/// Prefix of the payload encoded in member QR codes.
pub const QR_MEMBER_PREFIX: &str = "MEMBER:";

/// Members whose name contains `query`, or whose phone number contains it
/// once whitespace is removed from both. An empty query returns everyone.
pub fn filter_members<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return members.iter().collect();
    }
    let compact_query = strip_whitespace(&query);

    members
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&query)
                || strip_whitespace(&m.phone).contains(&compact_query)
        })
        .collect()
}

pub fn find_member_by_id<'a>(members: &'a [Member], id: &str) -> Option<&'a Member> {
    members.iter().find(|m| m.id == id)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

// ---------------------------------------------------------------------------
// QR codes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrPayload {
    /// `MEMBER:<id>`
    Member(String),
    /// Anything else a scanner might read.
    Other(String),
}

impl QrPayload {
    pub fn parse(data: &str) -> Self {
        match data.strip_prefix(QR_MEMBER_PREFIX) {
            Some(id) => Self::Member(id.to_string()),
            None => Self::Other(data.to_string()),
        }
    }

    pub fn for_member(member: &Member) -> String {
        format!("{QR_MEMBER_PREFIX}{}", member.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrLookup<'a> {
    Found(&'a Member),
    NotFound(String),
    Foreign(String),
}

pub fn lookup_qr<'a>(data: &str, members: &'a [Member]) -> QrLookup<'a> {
    match QrPayload::parse(data) {
        QrPayload::Member(id) => match find_member_by_id(members, &id) {
            Some(m) => QrLookup::Found(m),
            None => QrLookup::NotFound(id),
        },
        QrPayload::Other(raw) => QrLookup::Foreign(raw),
    }
}
