//! Error types for engine and shell operations
//!
//! Malformed persisted JSON never reaches this module; the store swallows
//! it and substitutes defaults. Everything else is either propagated to the
//! immediate caller or, for catalog loading, fatal to startup.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine operations
#[derive(Debug)]
pub enum IsletError {
    /// Failed to read the upgrade catalog file
    CatalogRead {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The upgrade catalog file is not valid JSON for the expected shape
    CatalogParse {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Every candidate path for a tile image failed to load
    ImageFallbackExhausted {
        /// Candidate paths in the order they were tried
        candidates: Vec<PathBuf>,
    },

    /// Failed to save a rendered snapshot to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// No catalog upgrade targets the level after the current one
    UpgradeUnavailable {
        /// The island's current level
        current_level: u32,
    },

    /// The player's balance does not cover the upgrade cost
    InsufficientFunds {
        /// Cost of the requested upgrade
        cost: i64,
        /// Current balance
        balance: i64,
    },
}

impl fmt::Display for IsletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogRead { path, source } => {
                write!(
                    f,
                    "Failed to read upgrade catalog '{}': {source}",
                    path.display()
                )
            }
            Self::CatalogParse { path, source } => {
                write!(
                    f,
                    "Failed to parse upgrade catalog '{}': {source}",
                    path.display()
                )
            }
            Self::ImageFallbackExhausted { candidates } => {
                let tried: Vec<String> = candidates
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect();
                write!(
                    f,
                    "No compatible image sources found (tried: {})",
                    tried.join(", ")
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export snapshot to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::UpgradeUnavailable { current_level } => {
                write!(f, "No upgrade available for level {}", current_level + 1)
            }
            Self::InsufficientFunds { cost, balance } => {
                write!(f, "Insufficient funds: cost {cost}, balance {balance}")
            }
        }
    }
}

impl std::error::Error for IsletError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::CatalogParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, IsletError>;

#[cfg(test)]
mod tests {
    use super::IsletError;

    #[test]
    fn test_fallback_exhausted_names_every_candidate() {
        let error = IsletError::ImageFallbackExhausted {
            candidates: vec!["a/tile1.png".into(), "a/tile1.gif".into()],
        };
        let message = error.to_string();
        assert!(message.contains("a/tile1.png"));
        assert!(message.contains("a/tile1.gif"));
    }

    #[test]
    fn test_upgrade_unavailable_reports_the_target_level() {
        let error = IsletError::UpgradeUnavailable { current_level: 3 };
        assert!(error.to_string().contains("level 4"));
    }
}
