use serde::Deserialize;

use crate::error::RosterError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Directory config, usually `<name>.roster.toml`.
///
/// Dataset paths are relative to the config file's directory; resolving them
/// is the caller's job, the engine only sees loaded records.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryConfig {
    pub name: String,
    /// Canonical members JSON array.
    pub members: String,
    /// Cooking-group roster JSON array.
    pub roster: String,
    /// Emergency contact categories JSON array.
    #[serde(default)]
    pub contacts: Option<String>,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: Option<String>,
    #[serde(default)]
    pub csv: Option<String>,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl DirectoryConfig {
    pub fn from_toml(input: &str) -> Result<Self, RosterError> {
        let config: DirectoryConfig =
            toml::from_str(input).map_err(|e| RosterError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        if self.name.trim().is_empty() {
            return Err(RosterError::ConfigValidation("name must not be empty".into()));
        }

        let required = [("members", &self.members), ("roster", &self.roster)];
        for (key, path) in required {
            if path.trim().is_empty() {
                return Err(RosterError::ConfigValidation(format!(
                    "'{key}' path must not be empty"
                )));
            }
        }

        let optional = [
            ("contacts", &self.contacts),
            ("output.json", &self.output.json),
            ("output.csv", &self.output.csv),
        ];
        for (key, path) in optional {
            if matches!(path, Some(p) if p.trim().is_empty()) {
                return Err(RosterError::ConfigValidation(format!(
                    "'{key}' path must not be empty when set"
                )));
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
