//! `memberdir-roster`: Cooking-group roster reconciliation.
//!
//! Pure engine crate: receives pre-loaded member and roster datasets, returns
//! resolved groups and directory views. No CLI or file IO dependencies.

pub mod annotate;
pub mod committee;
pub mod config;
pub mod contacts;
pub mod directory;
pub mod engine;
pub mod error;
pub mod evidence;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod normalize;

pub use config::DirectoryConfig;
pub use engine::{build_groups, run};
pub use error::RosterError;
pub use matcher::{find_member_by_name, resolve_name, Resolution};
pub use model::{Group, GroupRosterEntry, Member, RosterInput, RosterReport};
pub use normalize::normalize_name;
