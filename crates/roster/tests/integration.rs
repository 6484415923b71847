use std::path::PathBuf;

use memberdir_roster::annotate::annotate_members;
use memberdir_roster::committee::committee_sections;
use memberdir_roster::config::DirectoryConfig;
use memberdir_roster::directory::{filter_members, lookup_qr, QrLookup};
use memberdir_roster::engine::{build_groups, run};
use memberdir_roster::loader::{duplicate_ids, load_contacts, load_members, load_roster};
use memberdir_roster::model::{RosterInput, RosterReport, Slot, PLACEHOLDER_ADDRESS};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

fn load_input(config: &DirectoryConfig) -> RosterInput {
    RosterInput {
        members: load_members(&read_fixture(&config.members)).unwrap(),
        roster: load_roster(&read_fixture(&config.roster)).unwrap(),
    }
}

fn load_and_run() -> (RosterInput, RosterReport) {
    let config = DirectoryConfig::from_toml(&read_fixture("directory.roster.toml")).unwrap();
    let input = load_input(&config);
    let report = run(&config, &input);
    (input, report)
}

fn names(members: &[memberdir_roster::Member]) -> Vec<&str> {
    members.iter().map(|m| m.name.as_str()).collect()
}

// -------------------------------------------------------------------------
// Reconciliation
// -------------------------------------------------------------------------

#[test]
fn fixture_summary() {
    let (_, report) = load_and_run();

    assert_eq!(report.meta.directory_name, "Cooking Groups Fixture");
    assert_eq!(report.summary.total_groups, 3);
    assert_eq!(report.summary.total_captains, 3);
    assert_eq!(report.summary.total_members, 6);
    assert_eq!(report.summary.exact_matches, 4);
    assert_eq!(report.summary.fuzzy_matches, 3);
    assert_eq!(report.summary.placeholders, 2);
}

#[test]
fn fixture_groups_are_resolved_and_sorted() {
    let (_, report) = load_and_run();
    let g1 = &report.groups[0];
    assert_eq!(g1.id, "group-1");
    assert_eq!(names(&g1.captains), vec!["Asha Mehta", "Harshidaa Dhiresh Raichura"]);
    assert_eq!(names(&g1.members), vec!["Amit Shah", "Ghost Person", "Zara Desai"]);
    assert_eq!(g1.captains[1].id, "102");

    let g2 = &report.groups[1];
    assert_eq!(names(&g2.captains), vec!["Rita Shah"]);
    assert_eq!(
        names(&g2.members),
        vec!["Kiran Patel", "Nilesh K. Thakkar", "Totally Unknown Person"]
    );

    let g3 = &report.groups[2];
    assert_eq!(g3.id, "group-3");
    assert!(g3.captains.is_empty() && g3.members.is_empty());
}

#[test]
fn fixture_unresolved_names_become_placeholders() {
    let (_, report) = load_and_run();
    let ids: Vec<&str> = report.unresolved.iter().map(|u| u.placeholder_id.as_str()).collect();
    assert_eq!(ids, vec!["member-1-Ghost-Person", "member-2-Totally-Unknown-Person"]);
    assert!(report.unresolved.iter().all(|u| u.slot == Slot::Member));

    let ghost = report.groups[0]
        .members
        .iter()
        .find(|m| m.id == "member-1-Ghost-Person")
        .unwrap();
    assert_eq!(ghost.address, PLACEHOLDER_ADDRESS);
    assert_eq!(ghost.dial_uri(), None);
    assert_eq!(report.groups[0].placeholder_count(), 1);
}

#[test]
fn report_groups_match_build_groups_across_runs() {
    let (input, report) = load_and_run();
    let again = build_groups(&input.roster, &input.members);
    assert_eq!(report.groups, again);
    assert_eq!(again, build_groups(&input.roster, &input.members));
}

#[test]
fn report_serializes_with_camel_case_members() {
    let (_, report) = load_and_run();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["summary"]["placeholders"], 2);
    assert_eq!(json["groups"][0]["captains"][0]["bloodGroup"], "B+");
    assert_eq!(json["unresolved"][0]["slot"], "member");
}

// -------------------------------------------------------------------------
// Directory views
// -------------------------------------------------------------------------

#[test]
fn annotate_fixture_members() {
    let (input, _) = load_and_run();
    let annotated = annotate_members(&input.roster, &input.members);

    let by_id = |id: &str| annotated.iter().find(|m| m.id == id).unwrap();
    assert_eq!(by_id("101").role, "President, Cooking Captain");
    assert_eq!(by_id("102").role, "Cooking Captain");
    assert_eq!(by_id("103").role, "Joint Secretary");
    assert_eq!(by_id("103").group_number, Some(2));
    assert_eq!(by_id("106").role, "Cooking Captain");
    assert_eq!(by_id("107").group_name.as_deref(), Some("Group 2"));
    assert_eq!(annotated.len(), input.members.len());
    assert!(annotated.iter().all(|m| m.group_number.is_some()));
}

#[test]
fn committee_fixture_sections() {
    let (input, _) = load_and_run();
    let titles: Vec<String> = committee_sections(&input.members)
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(
        titles,
        vec!["President", "Vice Presidents", "Secretaries", "Treasurers", "Committee Members"]
    );
}

#[test]
fn search_and_scan_fixture() {
    let (input, _) = load_and_run();
    let hits = filter_members(&input.members, "shah");
    assert_eq!(names(&hits.into_iter().cloned().collect::<Vec<_>>()), vec!["Amit Shah", "Rita Shah"]);

    match lookup_qr("MEMBER:104", &input.members) {
        QrLookup::Found(m) => assert_eq!(m.name, "Zara Desai"),
        other => panic!("expected member 104, got {other:?}"),
    }
}

#[test]
fn fixture_datasets_are_clean() {
    let (input, _) = load_and_run();
    assert!(duplicate_ids(&input.members).is_empty());

    let contacts = load_contacts(&read_fixture("emergency.json")).unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[1].contacts[0].icon.as_deref(), Some("call"));
    assert_eq!(contacts[0].contacts[1].dial_uri().as_deref(), Some("tel:0422-2220444"));
}
