//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, missing file) |
//! | 3-9     | directory        | Dataset findings (duplicates, misses)    |
//! | 10-19   | load             | Config / dataset / IO failures           |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Directory (3-9)
// =============================================================================

/// `validate` found member ids used more than once.
pub const EXIT_DUPLICATE_IDS: u8 = 3;

/// `groups --strict` produced placeholder members.
pub const EXIT_PLACEHOLDERS: u8 = 4;

/// `scan` decoded a member payload whose id is not in the dataset.
pub const EXIT_QR_NOT_FOUND: u8 = 5;

// =============================================================================
// Load (10-19)
// =============================================================================

/// Directory config could not be parsed or failed validation.
pub const EXIT_INVALID_CONFIG: u8 = 10;

/// A JSON dataset could not be parsed.
pub const EXIT_DATASET_PARSE: u8 = 11;

/// File read or write failed.
pub const EXIT_IO: u8 = 12;

/// Map an engine error to its exit code.
pub fn roster_exit_code(err: &memberdir_roster::RosterError) -> u8 {
    use memberdir_roster::RosterError;
    match err {
        RosterError::ConfigParse(_) | RosterError::ConfigValidation(_) => EXIT_INVALID_CONFIG,
        RosterError::DatasetParse { .. } => EXIT_DATASET_PARSE,
        RosterError::Io(_) => EXIT_IO,
    }
}
