use crate::model::Member;
use crate::normalize::{normalize_name, significant_tokens};

/// Number of search tokens that must overlap a candidate's tokens for a
/// fuzzy match. Fixed; does not scale with name length.
pub const MIN_FUZZY_TOKEN_OVERLAP: usize = 2;

/// Outcome of resolving one roster name against the member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Exact(&'a Member),
    Fuzzy(&'a Member),
    Unresolved,
}

impl<'a> Resolution<'a> {
    pub fn member(self) -> Option<&'a Member> {
        match self {
            Self::Exact(m) | Self::Fuzzy(m) => Some(m),
            Self::Unresolved => None,
        }
    }
}

/// Resolve a roster name to a canonical member.
///
/// Runs an exact pass over normalized names, then a fuzzy token-overlap pass.
/// Within each pass the first member in `members` order wins, so reordering
/// the dataset can change which of two same-named members is returned.
pub fn resolve_name<'a>(search_name: Option<&str>, members: &'a [Member]) -> Resolution<'a> {
    let Some(search_name) = search_name else {
        return Resolution::Unresolved;
    };
    let normalized = normalize_name(search_name);
    if normalized.is_empty() {
        return Resolution::Unresolved;
    }

    if let Some(m) = members.iter().find(|m| normalize_name(&m.name) == normalized) {
        return Resolution::Exact(m);
    }

    let search_tokens = significant_tokens(&normalized);
    if search_tokens.len() < MIN_FUZZY_TOKEN_OVERLAP {
        return Resolution::Unresolved;
    }

    members
        .iter()
        .find(|m| {
            let member_name = normalize_name(&m.name);
            let member_tokens = significant_tokens(&member_name);
            token_overlap(&search_tokens, &member_tokens) >= MIN_FUZZY_TOKEN_OVERLAP
        })
        .map_or(Resolution::Unresolved, Resolution::Fuzzy)
}

/// First member matching `search_name` exactly, else by fuzzy token overlap.
pub fn find_member_by_name<'a>(search_name: Option<&str>, members: &'a [Member]) -> Option<&'a Member> {
    resolve_name(search_name, members).member()
}

/// Count search tokens contained in, or containing, some member token.
fn token_overlap(search_tokens: &[&str], member_tokens: &[&str]) -> usize {
    search_tokens
        .iter()
        .filter(|st| {
            member_tokens
                .iter()
                .any(|mt| mt.contains(**st) || st.contains(*mt))
        })
        .count()
}
