//! Island snapshot composition and PNG export
//!
//! Renders the island's current tile layout onto an RGBA canvas and writes
//! it to disk. Tile artwork is resolved per tile type through the image
//! loader; tiles still in their entering state are skipped, matching their
//! hidden on-screen appearance.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use std::path::Path;

use crate::io::error::{IsletError, Result};
use crate::island::Island;
use crate::island::layout::centering_offset;
use crate::island::range::range_for_size;
use crate::render::loader::ImageLoader;

/// Draw a tile image onto the canvas at the given pixel position
///
/// The image is resolved with format fallback and resized to the requested
/// edge length before composition.
///
/// # Errors
///
/// Returns an error when neither image candidate for `source` loads.
pub fn draw_tile(
    canvas: &mut RgbaImage,
    loader: &mut ImageLoader,
    source: &Path,
    x: i64,
    y: i64,
    edge: u32,
) -> Result<()> {
    let artwork = loader.load_with_fallback(source)?;
    let resized = artwork.resize_exact(edge, edge, FilterType::Triangle);
    imageops::overlay(canvas, &resized.to_rgba8(), x, y);
    Ok(())
}

/// Render the island's revealed tiles to a PNG file
///
/// Tile artwork is looked up as `<asset root>/<tile type>` with format
/// fallback. Tiles are drawn in row-major order so overlap, if any, is
/// deterministic.
///
/// # Errors
///
/// Returns an error if:
/// - Any tile type's image candidates all fail to load
/// - The output's parent directory cannot be created
/// - The PNG cannot be written
pub fn export_island_png(
    island: &Island,
    loader: &mut ImageLoader,
    asset_root: &Path,
    output: &Path,
) -> Result<()> {
    let scale = island.tile_scale();
    let edge = (scale.ceil() as u32).max(1);

    let range = range_for_size(island.size());
    let origin = (f64::from(range.min) + centering_offset(island.size())) * scale;

    let span = island.size() * edge;
    let mut canvas = RgbaImage::new(span.max(1), span.max(1));

    let mut tiles: Vec<_> = island.tiles().filter(|tile| !tile.entering).collect();
    tiles.sort_by_key(|tile| tile.coord.row_major_key());

    for tile in tiles {
        let [px, py] = tile.position;
        let x = (px - origin).round() as i64;
        let y = (py - origin).round() as i64;
        draw_tile(
            &mut canvas,
            loader,
            &asset_root.join(&tile.kind),
            x,
            y,
            edge,
        )?;
    }

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| IsletError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create output directory",
            source,
        })?;
    }

    canvas
        .save(output)
        .map_err(|source| IsletError::ImageExport {
            path: output.to_path_buf(),
            source,
        })
}
