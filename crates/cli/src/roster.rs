//! `memberdir groups | validate | assign`: roster reconciliation commands.

use std::path::{Path, PathBuf};

use memberdir_roster::loader::{duplicate_ids, load_members, load_roster};
use memberdir_roster::model::Group;
use memberdir_roster::{DirectoryConfig, RosterError, RosterInput, RosterReport};

use crate::exit_codes::{EXIT_DUPLICATE_IDS, EXIT_PLACEHOLDERS};
use crate::util::pad_right;
use crate::CliError;

const NAME_COLUMN: usize = 32;

/// Config plus the datasets it points at.
pub(crate) struct LoadedDirectory {
    pub config: DirectoryConfig,
    pub base_dir: PathBuf,
    pub input: RosterInput,
}

impl LoadedDirectory {
    /// Resolve a config-relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.base_dir.join(relative)
    }
}

pub(crate) fn read_text(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .map_err(|e| RosterError::Io(format!("cannot read {}: {e}", path.display())).into())
}

pub(crate) fn write_text(path: &Path, text: &str) -> Result<(), CliError> {
    std::fs::write(path, text)
        .map_err(|e| RosterError::Io(format!("cannot write {}: {e}", path.display())))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

/// Read the config and load members + roster relative to its directory.
pub(crate) fn load_directory(config_path: &Path) -> Result<LoadedDirectory, CliError> {
    let config_str = read_text(config_path)?;
    let config = DirectoryConfig::from_toml(&config_str)?;
    let base_dir = config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let members = load_members(&read_text(&base_dir.join(&config.members))?)?;
    let roster = load_roster(&read_text(&base_dir.join(&config.roster))?)?;
    log::debug!(
        "loaded {} members and {} roster entries for '{}'",
        members.len(),
        roster.len(),
        config.name
    );

    Ok(LoadedDirectory {
        config,
        base_dir,
        input: RosterInput { members, roster },
    })
}

// ---------------------------------------------------------------------------
// groups
// ---------------------------------------------------------------------------

pub fn cmd_groups(
    config_path: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
    csv_file: Option<PathBuf>,
    strict: bool,
) -> Result<(), CliError> {
    let dir = load_directory(&config_path)?;
    let report = memberdir_roster::run(&dir.config, &dir.input);

    let json_path = output_file.or_else(|| dir.config.output.json.as_deref().map(|p| dir.path(p)));
    let csv_path = csv_file.or_else(|| dir.config.output.csv.as_deref().map(|p| dir.path(p)));

    let json_str = serde_json::to_string_pretty(&report).map_err(CliError::json)?;
    if let Some(ref path) = json_path {
        write_text(path, &json_str)?;
    }
    if let Some(ref path) = csv_path {
        let csv_str = crate::export::groups_to_csv(&report.groups)?;
        write_text(path, &csv_str)?;
    }

    if json_output {
        println!("{json_str}");
    } else {
        print_groups(&report.groups);
    }

    print_summary(&report);

    if strict && report.summary.placeholders > 0 {
        return Err(CliError::new(
            EXIT_PLACEHOLDERS,
            format!("{} roster name(s) did not match any member", report.summary.placeholders),
        )
        .with_hint("fix the spelling in the roster or add the member to the members dataset"));
    }

    Ok(())
}

fn print_groups(groups: &[Group]) {
    for group in groups {
        println!(
            "{} ({} captain(s), {} member(s))",
            group.name,
            group.captains.len(),
            group.members.len()
        );
        for (label, list) in [("captain", &group.captains), ("member", &group.members)] {
            for m in list {
                let phone = if m.is_placeholder() { "details not available" } else { m.phone.as_str() };
                println!("  {:<8} {} {}", label, pad_right(&m.name, NAME_COLUMN), phone);
            }
        }
    }
}

fn print_summary(report: &RosterReport) {
    let s = &report.summary;
    eprintln!(
        "'{}': {} groups, {} captains, {} members ({} exact, {} fuzzy, {} placeholders)",
        report.meta.directory_name,
        s.total_groups,
        s.total_captains,
        s.total_members,
        s.exact_matches,
        s.fuzzy_matches,
        s.placeholders,
    );
    for u in &report.unresolved {
        eprintln!("  unresolved: group {} {} '{}'", u.group_number, u.slot, u.raw_name);
    }
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let dir = load_directory(&config_path)?;

    let contact_count = match dir.config.contacts {
        Some(_) => crate::directory::load_contact_categories(&dir)?.len(),
        None => 0,
    };

    let dupes = duplicate_ids(&dir.input.members);
    if !dupes.is_empty() {
        return Err(CliError::new(
            EXIT_DUPLICATE_IDS,
            format!("duplicate member id(s): {}", dupes.join(", ")),
        ));
    }

    eprintln!(
        "valid: directory '{}' with {} member(s), {} group(s), {} contact categor{}",
        dir.config.name,
        dir.input.members.len(),
        dir.input.roster.len(),
        contact_count,
        if contact_count == 1 { "y" } else { "ies" },
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// assign
// ---------------------------------------------------------------------------

pub fn cmd_assign(config_path: PathBuf, output_file: Option<PathBuf>) -> Result<(), CliError> {
    let dir = load_directory(&config_path)?;
    let annotated =
        memberdir_roster::annotate::annotate_members(&dir.input.roster, &dir.input.members);
    let json_str = serde_json::to_string_pretty(&annotated).map_err(CliError::json)?;

    match output_file {
        Some(ref path) => write_text(path, &json_str)?,
        None => println!("{json_str}"),
    }

    let unassigned = annotated
        .iter()
        .filter(|m| m.group_number == Some(memberdir_roster::annotate::UNASSIGNED_GROUP_NUMBER))
        .count();
    eprintln!(
        "assigned {} of {} member(s) to groups, {} unassigned",
        annotated.len() - unassigned,
        annotated.len(),
        unassigned
    );
    Ok(())
}
