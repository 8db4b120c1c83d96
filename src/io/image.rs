//! PNG import and export of tile grids and component maps

use crate::algorithm::components::ConnectedComponents;
use crate::io::configuration::{COMPONENT_CHANNEL_FLOOR, MAX_GRID_DIMENSION, UNLABELED_COLOR};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::TileGrid;
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::path::Path;

/// Load a PNG as a tile grid
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The image is empty or larger than `MAX_GRID_DIMENSION` on either side
pub fn load_tile_grid(path: &Path) -> Result<TileGrid> {
    let img = image::open(path).map_err(|e| GridError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    tile_grid_from_image(&img.to_rgba8())
}

/// Convert an image into a tile grid with one tile type per distinct color
///
/// Palette entries are sorted by color value, so the same image always yields
/// the same tile references.
///
/// # Errors
///
/// Returns an error if the image has no pixels or exceeds
/// `MAX_GRID_DIMENSION` on either side
pub fn tile_grid_from_image(img: &RgbaImage) -> Result<TileGrid> {
    let (width, height) = (img.width() as usize, img.height() as usize);
    if width == 0 || height == 0 {
        return Err(GridError::InvalidSourceData {
            reason: "Image has no pixels".to_string(),
        });
    }
    if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "image size",
            &format!("{width}x{height}"),
            &format!("sides must not exceed {MAX_GRID_DIMENSION} cells"),
        ));
    }

    let palette: Vec<[u8; 4]> = img
        .pixels()
        .map(|pixel| pixel.0)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut tiles = Array2::zeros((height, width));
    for (x, y, pixel) in img.enumerate_pixels() {
        if let (Ok(index), Some(tile)) = (
            palette.binary_search(&pixel.0),
            tiles.get_mut((y as usize, x as usize)),
        ) {
            *tile = index + 1;
        }
    }

    Ok(TileGrid::from_tiles(tiles, palette))
}

/// Render a tile grid back into an image using its palette
pub fn tile_grid_to_image(grid: &TileGrid) -> RgbaImage {
    let mut img = RgbaImage::new(grid.width() as u32, grid.height() as u32);
    for p in grid.bounds().points() {
        let color = grid.color(p).unwrap_or(UNLABELED_COLOR);
        img.put_pixel(p.x as u32, p.y as u32, Rgba(color));
    }
    img
}

/// Reproducible, fully opaque colors for `count` components
pub fn component_palette(count: usize, seed: u64) -> Vec<[u8; 4]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut channel = || rng.random_range(COMPONENT_CHANNEL_FLOOR..=u8::MAX);
            [channel(), channel(), channel(), u8::MAX]
        })
        .collect()
}

/// Paint the most recent labeling of `components` with one color per component
///
/// The image covers the labeled region. Cells without a component, and
/// components beyond the end of `colors`, use `UNLABELED_COLOR`.
pub fn component_image(components: &ConnectedComponents, colors: &[[u8; 4]]) -> RgbaImage {
    let region = components.region();
    let mut img = RgbaImage::new(region.width() as u32, region.height() as u32);
    for p in region.points() {
        let color = components
            .label_of(p)
            .and_then(|id| colors.get(id))
            .copied()
            .unwrap_or(UNLABELED_COLOR);
        let offset = p - region.min;
        img.put_pixel(offset.x as u32, offset.y as u32, Rgba(color));
    }
    img
}

/// Save an image as PNG, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| GridError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Save a tile grid as PNG
///
/// # Errors
///
/// Returns an error if the image cannot be written, see `save_png`
pub fn export_tile_grid(grid: &TileGrid, output_path: &Path) -> Result<()> {
    save_png(&tile_grid_to_image(grid), output_path)
}
