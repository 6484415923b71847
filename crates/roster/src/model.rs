use serde::{Deserialize, Serialize};

use crate::normalize::slug;

/// Address value carried by synthesized placeholder members.
/// Presentation code uses it to detect placeholders.
pub const PLACEHOLDER_ADDRESS: &str = "Details not available";

/// Photo shown for members without a picture of their own.
pub const DEFAULT_PHOTO: &str = "ids/default.jpg";

pub const CAPTAIN_ROLE: &str = "Cooking Captain";
pub const MEMBER_ROLE: &str = "Member";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A canonical directory member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

impl Member {
    /// Synthesize a stand-in for a roster name that matched no canonical member.
    ///
    /// The id is derived only from the slot, group number and raw name, so
    /// rebuilding groups from the same inputs yields the same placeholder.
    pub fn placeholder(slot: Slot, group_number: u32, raw_name: &str) -> Self {
        Self {
            id: format!("{}-{group_number}-{}", slot.id_prefix(), slug(raw_name)),
            name: raw_name.to_string(),
            role: slot.placeholder_role().to_string(),
            photo: DEFAULT_PHOTO.to_string(),
            phone: String::new(),
            email: String::new(),
            address: PLACEHOLDER_ADDRESS.to_string(),
            blood_group: String::new(),
            group_number: None,
            group_name: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.address == PLACEHOLDER_ADDRESS
    }

    /// `tel:` URI for the member's phone, whitespace removed.
    /// None for placeholders and members without a phone number.
    pub fn dial_uri(&self) -> Option<String> {
        if self.is_placeholder() {
            return None;
        }
        let number: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        if number.is_empty() {
            None
        } else {
            Some(format!("tel:{number}"))
        }
    }

    pub fn mail_uri(&self) -> Option<String> {
        if self.is_placeholder() || self.email.trim().is_empty() {
            return None;
        }
        Some(format!("mailto:{}", self.email.trim()))
    }

    pub fn photo_or_default(&self) -> &str {
        if self.photo.is_empty() {
            DEFAULT_PHOTO
        } else {
            &self.photo
        }
    }
}

/// One group of the cooking-group roster, names as typed by the organizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRosterEntry {
    pub group_number: u32,
    #[serde(default)]
    pub captains: Vec<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Pre-loaded datasets for a reconciliation run.
#[derive(Debug, Clone, Default)]
pub struct RosterInput {
    pub members: Vec<Member>,
    pub roster: Vec<GroupRosterEntry>,
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Captain,
    Member,
}

impl Slot {
    fn id_prefix(self) -> &'static str {
        match self {
            Self::Captain => "captain",
            Self::Member => "member",
        }
    }

    pub fn placeholder_role(self) -> &'static str {
        match self {
            Self::Captain => CAPTAIN_ROLE,
            Self::Member => MEMBER_ROLE,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Captain => write!(f, "captain"),
            Self::Member => write!(f, "member"),
        }
    }
}

/// A resolved cooking group. Captains and members are sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub captains: Vec<Member>,
    pub members: Vec<Member>,
}

impl Group {
    pub fn id_for(group_number: u32) -> String {
        format!("group-{group_number}")
    }

    pub fn name_for(group_number: u32) -> String {
        format!("Group {group_number}")
    }

    pub fn placeholder_count(&self) -> usize {
        self.captains
            .iter()
            .chain(&self.members)
            .filter(|m| m.is_placeholder())
            .count()
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

/// A roster name that fell back to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedName {
    pub group_number: u32,
    pub slot: Slot,
    pub raw_name: String,
    pub placeholder_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub total_groups: usize,
    pub total_captains: usize,
    pub total_members: usize,
    pub exact_matches: usize,
    pub fuzzy_matches: usize,
    pub placeholders: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterReport {
    pub meta: RosterMeta,
    pub summary: RosterSummary,
    pub groups: Vec<Group>,
    pub unresolved: Vec<UnresolvedName>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterMeta {
    pub directory_name: String,
    pub engine_version: String,
    pub run_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(phone: &str, email: &str) -> Member {
        Member {
            id: "m1".into(),
            name: "Asha Mehta".into(),
            role: "Member".into(),
            photo: String::new(),
            phone: phone.into(),
            email: email.into(),
            address: "12 Race Course Road".into(),
            blood_group: "B+".into(),
            group_number: None,
            group_name: None,
        }
    }

    #[test]
    fn placeholder_fields() {
        let p = Member::placeholder(Slot::Member, 3, "Ramesh  Kumar Shah");
        assert_eq!(p.id, "member-3-Ramesh-Kumar-Shah");
        assert_eq!(p.name, "Ramesh  Kumar Shah");
        assert_eq!(p.role, "Member");
        assert_eq!(p.photo, DEFAULT_PHOTO);
        assert!(p.phone.is_empty());
        assert!(p.email.is_empty());
        assert!(p.blood_group.is_empty());
        assert!(p.is_placeholder());
    }

    #[test]
    fn dial_uri_strips_whitespace() {
        let m = member("98430 12345", "");
        assert_eq!(m.dial_uri().as_deref(), Some("tel:9843012345"));
        assert_eq!(m.mail_uri(), None);
    }

    #[test]
    fn placeholder_has_no_contact_actions() {
        let mut p = Member::placeholder(Slot::Captain, 1, "Ghost");
        p.phone = "9999999999".into();
        p.email = "ghost@example.com".into();
        assert_eq!(p.dial_uri(), None);
        assert_eq!(p.mail_uri(), None);
    }

    #[test]
    fn deserialize_camel_case_with_defaults() {
        let json = r#"{"id":"7","name":"Kiran Patel","bloodGroup":"O+","groupNumber":4}"#;
        let m: Member = serde_json::from_str(json).unwrap();
        assert_eq!(m.blood_group, "O+");
        assert_eq!(m.group_number, Some(4));
        assert_eq!(m.group_name, None);
        assert_eq!(m.photo_or_default(), DEFAULT_PHOTO);

        let back = serde_json::to_value(&m).unwrap();
        assert_eq!(back["bloodGroup"], "O+");
        assert!(back.get("groupName").is_none());
    }
}
