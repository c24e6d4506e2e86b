//! Image loading with format fallback and caching
//!
//! Tile images are resolved by convention from a base path: the primary
//! format is tried first, then the secondary format exactly once. Load
//! outcomes are cached keyed by resolved path, so repeated draws of the
//! same tile type touch the disk at most once per candidate.

use image::DynamicImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::io::configuration::IMAGE_EXTENSIONS;
use crate::io::error::{IsletError, Result};

/// Resolve the ordered candidate paths for a tile image base path
///
/// Any known image extension already present on the base path is stripped
/// before the candidate extensions are substituted in preference order.
pub fn candidate_paths(source: &Path) -> Vec<PathBuf> {
    let stripped = source
        .extension()
        .and_then(|extension| extension.to_str())
        .filter(|extension| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(extension))
        })
        .map_or_else(|| source.to_path_buf(), |_| source.with_extension(""));

    IMAGE_EXTENSIONS
        .iter()
        .map(|extension| stripped.with_extension(extension))
        .collect()
}

/// Image loader with a per-path cache of load outcomes
///
/// Failed loads are cached alongside successes so a missing candidate is
/// not retried on subsequent draws.
#[derive(Default)]
pub struct ImageLoader {
    cache: HashMap<PathBuf, Option<DynamicImage>>,
}

impl ImageLoader {
    /// Create a loader with an empty cache
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Load an image by base path, trying the secondary format exactly once
    ///
    /// # Errors
    ///
    /// Returns [`IsletError::ImageFallbackExhausted`] when no candidate
    /// loads successfully.
    pub fn load_with_fallback(&mut self, source: &Path) -> Result<&DynamicImage> {
        let candidates = candidate_paths(source);

        let mut resolved = None;
        for path in &candidates {
            if self.probe(path) {
                resolved = Some(path.clone());
                break;
            }
        }

        let Some(path) = resolved else {
            return Err(IsletError::ImageFallbackExhausted { candidates });
        };
        match self.cache.get(&path).and_then(Option::as_ref) {
            Some(image) => Ok(image),
            None => Err(IsletError::ImageFallbackExhausted { candidates }),
        }
    }

    /// Attempt a load, recording the outcome; true when the image is usable
    fn probe(&mut self, path: &Path) -> bool {
        if let Some(outcome) = self.cache.get(path) {
            return outcome.is_some();
        }
        let outcome = image::open(path).ok();
        let usable = outcome.is_some();
        self.cache.insert(path.to_path_buf(), outcome);
        usable
    }

    /// Number of cached load outcomes, including failures
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached outcome
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl std::fmt::Debug for ImageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageLoader")
            .field("cached", &self.cache.len())
            .finish()
    }
}
