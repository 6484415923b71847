//! JSON dataset parsing. Callers read the files; this module only sees text.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::contacts::ContactCategory;
use crate::error::RosterError;
use crate::model::{GroupRosterEntry, Member};

fn parse_dataset<T: DeserializeOwned>(dataset: &str, json: &str) -> Result<Vec<T>, RosterError> {
    serde_json::from_str(json).map_err(|e| RosterError::DatasetParse {
        dataset: dataset.into(),
        message: e.to_string(),
    })
}

pub fn load_members(json: &str) -> Result<Vec<Member>, RosterError> {
    parse_dataset("members", json)
}

pub fn load_roster(json: &str) -> Result<Vec<GroupRosterEntry>, RosterError> {
    parse_dataset("roster", json)
}

pub fn load_contacts(json: &str) -> Result<Vec<ContactCategory>, RosterError> {
    parse_dataset("contacts", json)
}

/// Ids that occur more than once, in the order their first repeat appears.
///
/// Id uniqueness is a dataset invariant maintained offline; this only
/// reports violations.
pub fn duplicate_ids(members: &[Member]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut dupes = Vec::new();
    for m in members {
        let count = seen.entry(m.id.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            dupes.push(m.id.clone());
        }
    }
    dupes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_roster_entries() {
        let json = r#"[
            {"groupNumber": 1, "captains": ["Asha Mehta"], "members": ["Kiran Patel", "Rita Shah"]},
            {"groupNumber": 2, "captains": [], "members": []}
        ]"#;
        let roster = load_roster(json).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].group_number, 1);
        assert_eq!(roster[0].members, vec!["Kiran Patel", "Rita Shah"]);
        assert!(roster[1].captains.is_empty());
    }

    #[test]
    fn dataset_error_names_the_dataset() {
        let err = load_members(r#"[{"name": "No Id"}]"#).unwrap_err();
        assert!(matches!(err, RosterError::DatasetParse { ref dataset, .. } if dataset == "members"));
        assert!(err.to_string().starts_with("dataset 'members':"));
    }

    #[test]
    fn duplicate_ids_reported_once_each() {
        let json = r#"[
            {"id": "1", "name": "A"},
            {"id": "2", "name": "B"},
            {"id": "1", "name": "C"},
            {"id": "1", "name": "D"},
            {"id": "2", "name": "E"}
        ]"#;
        let members = load_members(json).unwrap();
        assert_eq!(duplicate_ids(&members), vec!["1", "2"]);
    }
}
