use crate::model::{Group, RosterSummary};

/// How many roster names each resolution pass accounted for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionCounts {
    pub exact: usize,
    pub fuzzy: usize,
    pub placeholders: usize,
}

/// Compute summary statistics from resolved groups.
pub fn compute_summary(groups: &[Group], counts: &ResolutionCounts) -> RosterSummary {
    RosterSummary {
        total_groups: groups.len(),
        total_captains: groups.iter().map(|g| g.captains.len()).sum(),
        total_members: groups.iter().map(|g| g.members.len()).sum(),
        exact_matches: counts.exact,
        fuzzy_matches: counts.fuzzy,
        placeholders: counts.placeholders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, Slot};

    fn group(n: u32, captains: usize, members: usize) -> Group {
        Group {
            id: Group::id_for(n),
            name: Group::name_for(n),
            captains: (0..captains)
                .map(|i| Member::placeholder(Slot::Captain, n, &format!("Captain {i}")))
                .collect(),
            members: (0..members)
                .map(|i| Member::placeholder(Slot::Member, n, &format!("Member {i}")))
                .collect(),
        }
    }

    #[test]
    fn summary_counts() {
        let groups = vec![group(1, 2, 10), group(2, 1, 9), group(3, 0, 0)];
        let counts = ResolutionCounts { exact: 15, fuzzy: 3, placeholders: 4 };
        let summary = compute_summary(&groups, &counts);
        assert_eq!(summary.total_groups, 3);
        assert_eq!(summary.total_captains, 3);
        assert_eq!(summary.total_members, 19);
        assert_eq!(summary.exact_matches, 15);
        assert_eq!(summary.fuzzy_matches, 3);
        assert_eq!(summary.placeholders, 4);
    }
}
