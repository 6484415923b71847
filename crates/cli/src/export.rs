//! Flat CSV export of resolved groups, one row per captain or member.

use memberdir_roster::model::{Group, Slot};

use crate::CliError;

pub const CSV_HEADERS: [&str; 7] =
    ["group_id", "group_name", "slot", "member_id", "name", "phone", "placeholder"];

pub fn groups_to_csv(groups: &[Group]) -> Result<String, CliError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let csv_err = |e: csv::Error| CliError::io(format!("CSV write error: {e}"));

    writer.write_record(CSV_HEADERS).map_err(csv_err)?;
    for group in groups {
        let rows = group
            .captains
            .iter()
            .map(|m| (Slot::Captain, m))
            .chain(group.members.iter().map(|m| (Slot::Member, m)));
        for (slot, m) in rows {
            let slot = slot.to_string();
            writer
                .write_record([
                    group.id.as_str(),
                    group.name.as_str(),
                    slot.as_str(),
                    m.id.as_str(),
                    m.name.as_str(),
                    m.phone.as_str(),
                    if m.is_placeholder() { "true" } else { "false" },
                ])
                .map_err(csv_err)?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::io(format!("CSV write error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| CliError::io(format!("CSV encoding error: {e}")))
}
