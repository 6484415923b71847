use crate::config::DirectoryConfig;
use crate::evidence::{compute_summary, ResolutionCounts};
use crate::matcher::{resolve_name, Resolution};
use crate::model::{
    Group, GroupRosterEntry, Member, RosterInput, RosterMeta, RosterReport, Slot, UnresolvedName,
};
use crate::normalize::compare_names;

/// Resolve every roster entry into a [`Group`], in roster order.
///
/// Names that match no canonical member become placeholder members, so this
/// never fails and never drops an entry.
pub fn build_groups(roster: &[GroupRosterEntry], members: &[Member]) -> Vec<Group> {
    let mut counts = ResolutionCounts::default();
    let mut unresolved = Vec::new();
    resolve_groups(roster, members, &mut counts, &mut unresolved)
}

/// Build groups and report how each roster name was resolved.
pub fn run(config: &DirectoryConfig, input: &RosterInput) -> RosterReport {
    let mut counts = ResolutionCounts::default();
    let mut unresolved = Vec::new();
    let groups = resolve_groups(&input.roster, &input.members, &mut counts, &mut unresolved);
    let summary = compute_summary(&groups, &counts);

    log::debug!(
        "roster '{}': {} groups, {} exact, {} fuzzy, {} placeholders",
        config.name,
        summary.total_groups,
        summary.exact_matches,
        summary.fuzzy_matches,
        summary.placeholders,
    );

    RosterReport {
        meta: RosterMeta {
            directory_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        groups,
        unresolved,
    }
}

fn resolve_groups(
    roster: &[GroupRosterEntry],
    members: &[Member],
    counts: &mut ResolutionCounts,
    unresolved: &mut Vec<UnresolvedName>,
) -> Vec<Group> {
    roster
        .iter()
        .map(|entry| {
            let mut resolve_slot = |names: &[String], slot: Slot| -> Vec<Member> {
                let mut resolved: Vec<Member> = names
                    .iter()
                    .map(|raw| resolve_one(entry.group_number, slot, raw, members, counts, unresolved))
                    .collect();
                resolved.sort_by(|a, b| compare_names(&a.name, &b.name));
                resolved
            };

            let captains = resolve_slot(&entry.captains, Slot::Captain);
            let group_members = resolve_slot(&entry.members, Slot::Member);

            Group {
                id: Group::id_for(entry.group_number),
                name: Group::name_for(entry.group_number),
                captains,
                members: group_members,
            }
        })
        .collect()
}

fn resolve_one(
    group_number: u32,
    slot: Slot,
    raw_name: &str,
    members: &[Member],
    counts: &mut ResolutionCounts,
    unresolved: &mut Vec<UnresolvedName>,
) -> Member {
    match resolve_name(Some(raw_name), members) {
        Resolution::Exact(m) => {
            counts.exact += 1;
            m.clone()
        }
        Resolution::Fuzzy(m) => {
            counts.fuzzy += 1;
            log::debug!("group {group_number}: {slot} '{raw_name}' fuzzy-matched '{}'", m.name);
            m.clone()
        }
        Resolution::Unresolved => {
            counts.placeholders += 1;
            log::warn!("group {group_number}: {slot} not found: {raw_name}");
            let placeholder = Member::placeholder(slot, group_number, raw_name);
            unresolved.push(UnresolvedName {
                group_number,
                slot,
                raw_name: raw_name.to_string(),
                placeholder_id: placeholder.id.clone(),
            });
            placeholder
        }
    }
}
