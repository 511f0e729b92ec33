//! Error types for catalog loading and descriptor lookup.

use std::path::PathBuf;
use thiserror::Error;

/// One of the five catalog lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorTable {
    /// Module number → track.
    Track,
    /// Module number → title.
    Title,
    /// Module number → one-sentence description.
    Description,
    /// Module number → difficulty rating.
    Difficulty,
    /// Module number → estimated duration in minutes.
    Duration,
}

impl std::fmt::Display for DescriptorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Track => "track",
            Self::Title => "title",
            Self::Description => "description",
            Self::Difficulty => "difficulty",
            Self::Duration => "duration",
        };
        f.write_str(name)
    }
}

/// Catalog loading and lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A module number has no entry in one of the lookup tables.
    #[error("module {module} has no {table} entry in the catalog")]
    MissingDescriptor {
        /// Module number that failed to resolve.
        module: u8,
        /// Table the entry is missing from.
        table: DescriptorTable,
    },

    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path to the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Catalog YAML could not be parsed.
    #[error("catalog YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_table_display() {
        assert_eq!(DescriptorTable::Track.to_string(), "track");
        assert_eq!(DescriptorTable::Title.to_string(), "title");
        assert_eq!(DescriptorTable::Description.to_string(), "description");
        assert_eq!(DescriptorTable::Difficulty.to_string(), "difficulty");
        assert_eq!(DescriptorTable::Duration.to_string(), "duration");
    }

    #[test]
    fn missing_descriptor_display() {
        let err = CatalogError::MissingDescriptor {
            module: 17,
            table: DescriptorTable::Title,
        };
        assert_eq!(
            err.to_string(),
            "module 17 has no title entry in the catalog"
        );
    }
}
