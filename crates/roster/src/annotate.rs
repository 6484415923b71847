//! Write cooking-group membership back onto the canonical member list.

use std::collections::HashMap;

use crate::engine::build_groups;
use crate::model::{GroupRosterEntry, Member, CAPTAIN_ROLE};

pub const UNASSIGNED_GROUP_NUMBER: u32 = 0;
pub const UNASSIGNED_GROUP_NAME: &str = "Unassigned";

const PRESIDENT_ROLE: &str = "President";

struct Assignment {
    group_number: u32,
    group_name: String,
    captain: bool,
}

/// Copy of `members`, in the same order, with `group_number`/`group_name`
/// set from the roster and captains' roles updated.
///
/// A member listed in several groups keeps the first one in roster order,
/// captain slots before member slots. Members in no group are marked
/// unassigned. Placeholders are never added.
pub fn annotate_members(roster: &[GroupRosterEntry], members: &[Member]) -> Vec<Member> {
    let groups = build_groups(roster, members);

    let mut assignments: HashMap<&str, Assignment> = HashMap::new();
    for (entry, group) in roster.iter().zip(&groups) {
        let slots = group
            .captains
            .iter()
            .map(|m| (m, true))
            .chain(group.members.iter().map(|m| (m, false)));
        for (m, captain) in slots {
            if m.is_placeholder() {
                continue;
            }
            assignments.entry(m.id.as_str()).or_insert_with(|| Assignment {
                group_number: entry.group_number,
                group_name: group.name.clone(),
                captain,
            });
        }
    }

    members
        .iter()
        .map(|m| {
            let mut out = m.clone();
            match assignments.get(m.id.as_str()) {
                Some(a) => {
                    out.group_number = Some(a.group_number);
                    out.group_name = Some(a.group_name.clone());
                    if a.captain {
                        out.role = captain_role(&m.role);
                    }
                }
                None => {
                    out.group_number = Some(UNASSIGNED_GROUP_NUMBER);
                    out.group_name = Some(UNASSIGNED_GROUP_NAME.to_string());
                }
            }
            out
        })
        .collect()
}

fn captain_role(current: &str) -> String {
    if current.contains(CAPTAIN_ROLE) {
        current.to_string()
    } else if current == PRESIDENT_ROLE {
        format!("{PRESIDENT_ROLE}, {CAPTAIN_ROLE}")
    } else {
        CAPTAIN_ROLE.to_string()
    }
}
