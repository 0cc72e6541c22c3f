use std::fmt;

/// Result type for gpicker config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or saving the config file
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Config file is not valid TOML or does not match the config layout
    TomlParse(toml::de::Error),

    /// Config could not be written as TOML
    TomlSerialize(toml::ser::Error),

    /// Config location could not be determined, or a section is missing
    Config(String),

    /// Picker config present but invalid
    Picker(gpicker_types::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::TomlParse(err) => write!(f, "Failed to parse config: {}", err),
            Error::TomlSerialize(err) => write!(f, "Failed to write config: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Picker(err) => write!(f, "Picker config error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::TomlParse(err) => Some(err),
            Error::TomlSerialize(err) => Some(err),
            Error::Picker(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<gpicker_types::Error> for Error {
    fn from(err: gpicker_types::Error) -> Self {
        Error::Picker(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::TomlParse(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::TomlSerialize(err)
    }
}
