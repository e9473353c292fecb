use crate::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A class of downloadable resource the harvester knows how to discover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Jpg,
    Mp3,
    Pdf,
    Png,
}

impl FileKind {
    /// Every known kind, in the order they are searched by default
    pub const ALL: [FileKind; 4] = [FileKind::Jpg, FileKind::Mp3, FileKind::Pdf, FileKind::Png];

    /// Returns every known kind
    pub fn all() -> Vec<FileKind> {
        Self::ALL.to_vec()
    }

    /// File extension (without the dot) for this kind
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Mp3 => "mp3",
            Self::Pdf => "pdf",
            Self::Png => "png",
        }
    }

    /// Returns true for kinds referenced from `<img>` tags
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Jpg | Self::Png)
    }

    /// Returns true for kinds referenced from `<audio>` tags
    pub fn is_audio(&self) -> bool {
        matches!(self, Self::Mp3)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FileKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jpg" => Ok(Self::Jpg),
            "mp3" => Ok(Self::Mp3),
            "pdf" => Ok(Self::Pdf),
            "png" => Ok(Self::Png),
            _ => Err(ConfigError::UnknownFileKind(s.to_string())),
        }
    }
}
