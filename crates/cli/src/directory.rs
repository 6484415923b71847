//! `memberdir search | committee | scan | contacts`: read-only directory views.

use std::path::PathBuf;

use serde_json::json;

use memberdir_roster::committee::committee_sections;
use memberdir_roster::contacts::ContactCategory;
use memberdir_roster::directory::{filter_members, lookup_qr, QrLookup};
use memberdir_roster::loader::load_contacts;
use memberdir_roster::Member;

use crate::exit_codes::{EXIT_INVALID_CONFIG, EXIT_QR_NOT_FOUND};
use crate::roster::{load_directory, read_text, LoadedDirectory};
use crate::util::{or_not_available, pad_right};
use crate::CliError;

const NAME_COLUMN: usize = 32;

pub(crate) fn load_contact_categories(dir: &LoadedDirectory) -> Result<Vec<ContactCategory>, CliError> {
    let Some(ref relative) = dir.config.contacts else {
        return Err(CliError::new(EXIT_INVALID_CONFIG, "no contacts dataset configured")
            .with_hint("add `contacts = \"emergency.json\"` to the directory config"));
    };
    Ok(load_contacts(&read_text(&dir.path(relative))?)?)
}

fn print_member_line(m: &Member) {
    println!("  {} {}  {}", pad_right(&m.name, NAME_COLUMN), pad_right(&m.phone, 14), m.role);
}

fn print_member_detail(m: &Member) {
    println!("{}", m.name);
    println!("  role:        {}", m.role);
    if m.is_placeholder() {
        println!("  ({})", m.address);
    }
    println!("  phone:       {}", or_not_available(&m.phone));
    println!("  email:       {}", or_not_available(&m.email));
    println!("  address:     {}", m.address);
    println!("  blood group: {}", or_not_available(&m.blood_group));
    println!("  photo:       {}", m.photo_or_default());
    if let (Some(n), Some(name)) = (m.group_number, m.group_name.as_deref()) {
        println!("  group:       {name} ({n})");
    }
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

pub fn cmd_search(config_path: PathBuf, query: String, json_output: bool) -> Result<(), CliError> {
    let dir = load_directory(&config_path)?;
    let hits = filter_members(&dir.input.members, &query);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&hits).map_err(CliError::json)?);
    } else {
        for m in &hits {
            print_member_line(m);
        }
    }
    eprintln!("{} of {} member(s) match '{}'", hits.len(), dir.input.members.len(), query.trim());
    Ok(())
}

// ---------------------------------------------------------------------------
// committee
// ---------------------------------------------------------------------------

pub fn cmd_committee(config_path: PathBuf, json_output: bool) -> Result<(), CliError> {
    let dir = load_directory(&config_path)?;
    let sections = committee_sections(&dir.input.members);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&sections).map_err(CliError::json)?);
        return Ok(());
    }

    for section in &sections {
        println!("{} ({})", section.title, section.members.len());
        for m in &section.members {
            print_member_line(m);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// scan
// ---------------------------------------------------------------------------

pub fn cmd_scan(config_path: PathBuf, payload: String, json_output: bool) -> Result<(), CliError> {
    let dir = load_directory(&config_path)?;

    match lookup_qr(&payload, &dir.input.members) {
        QrLookup::Found(m) => {
            if json_output {
                let value = json!({ "kind": "member", "member": m });
                println!("{}", serde_json::to_string_pretty(&value).map_err(CliError::json)?);
            } else {
                print_member_detail(m);
            }
            Ok(())
        }
        QrLookup::NotFound(id) => Err(CliError::new(
            EXIT_QR_NOT_FOUND,
            format!("no member found with ID: {id}"),
        )),
        QrLookup::Foreign(data) => {
            if json_output {
                let value = json!({ "kind": "foreign", "data": data });
                println!("{}", serde_json::to_string_pretty(&value).map_err(CliError::json)?);
            } else {
                println!("QR code data: {data}");
            }
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// contacts
// ---------------------------------------------------------------------------

pub fn cmd_contacts(config_path: PathBuf, json_output: bool) -> Result<(), CliError> {
    let dir = load_directory(&config_path)?;
    let categories = load_contact_categories(&dir)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&categories).map_err(CliError::json)?);
        return Ok(());
    }

    for category in &categories {
        println!("{}", category.title);
        for c in &category.contacts {
            let uri = c.dial_uri().unwrap_or_default();
            println!("  {} {}  {}", pad_right(&c.name, NAME_COLUMN), pad_right(&c.phone, 14), uri);
        }
    }
    Ok(())
}
