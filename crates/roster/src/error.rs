use std::fmt;

#[derive(Debug)]
pub enum RosterError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty dataset path, etc.).
    ConfigValidation(String),
    /// A dataset could not be deserialized.
    DatasetParse { dataset: String, message: String },
    /// IO error (file read, etc.).
    Io(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::DatasetParse { dataset, message } => {
                write!(f, "dataset '{dataset}': {message}")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for RosterError {}
