use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumdistError {
    #[error("Invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid resolution: {width}x{height} (minimum is 400x200)")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid bin count: {0} (must be at least 1)")]
    InvalidBinCount(usize),

    #[error("No items to bin")]
    EmptyInput,

    #[error("Invalid numeric key on line {line}: {value:?}")]
    Parse { line: usize, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl NumdistError {
    /// Short category name used as the heading of error reports.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "Range",
            Self::InvalidResolution { .. } => "Resolution",
            Self::InvalidBinCount(_) => "Bins",
            Self::EmptyInput => "Input",
            Self::Parse { .. } => "Parse",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
            Self::Image(_) => "Image",
        }
    }

    /// The primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::Parse { line, .. } => format!("line {line} has no numeric key"),
            other => other.to_string(),
        }
    }

    /// Underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::Parse { value, .. } => Some(format!("could not parse {value:?} as a number")),
            Self::TomlParse(e) => Some(e.message().to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidRange { .. } => {
                Some("Pass --min lower than --max, or omit both to derive the range from the data")
            }
            Self::InvalidResolution { .. } => Some("Use --width >= 400 and --height >= 200"),
            Self::InvalidBinCount(_) => Some("Use --bins with a positive number"),
            Self::EmptyInput => Some("Check that the input contains at least one data line"),
            Self::Parse { .. } => Some("Select the numeric field with --column and --delimiter"),
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format, or run `numdist config validate`")
            }
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                _ => None,
            },
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NumdistError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
