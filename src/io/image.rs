//! Raster rendering of finished compositions and export to disk

use crate::algorithm::executor::Composition;
use crate::io::configuration::OUTPUT_FILE_NAME;
use crate::io::error::{MondrianError, Result, invalid_parameter};
use crate::io::palette::{BLACK, cell_rgb};
use crate::spatial::{Cell, Position};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

fn pixel_dimension(parameter: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|error| invalid_parameter(parameter, &value, &error))
        .and_then(|pixels| {
            if pixels == 0 {
                Err(invalid_parameter(parameter, &value, &"must be positive"))
            } else {
                Ok(pixels)
            }
        })
}

/// Render a composition to an image of exactly the canvas size
///
/// Interior cell `(x, y)` covers the `s × s` block at `(x·s, y·s)` where `s`
/// is the cell size; the perimeter ring is not drawn.
///
/// # Errors
///
/// Returns an error if:
/// - The canvas is empty or too large for an image buffer
/// - The cell size is zero
/// - Any cell is still `Empty` or carries a region marker
pub fn render(composition: &Composition) -> Result<RgbImage> {
    let (width, height) = composition.canvas;
    let image_width = pixel_dimension("width", width)?;
    let image_height = pixel_dimension("height", height)?;
    let cell_size = pixel_dimension("cell_size", composition.cell_size)?;

    let grid = &composition.grid;
    let unresolved = grid.count_matching(|cell| matches!(cell, Cell::Empty | Cell::RegionMarker(_)));
    if unresolved > 0 {
        return Err(invalid_parameter(
            "composition",
            &format!("{unresolved} unresolved cells"),
            &"every cell must carry a final color before rendering",
        ));
    }

    Ok(RgbImage::from_fn(image_width, image_height, |px, py| {
        let position = Position::new((px / cell_size) as usize + 1, (py / cell_size) as usize + 1);
        Rgb(grid.get(position).and_then(cell_rgb).unwrap_or(BLACK))
    }))
}

/// Path the wallpaper is written to inside `directory`
pub fn output_path(directory: &Path) -> PathBuf {
    directory.join(OUTPUT_FILE_NAME)
}

/// Render a composition and save it under the fixed wallpaper name
///
/// The image format follows the file extension. Returns the written path.
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails
/// - The directory cannot be created
/// - The image cannot be saved to the path
pub fn export_composition(composition: &Composition, directory: &Path) -> Result<PathBuf> {
    let img = render(composition)?;

    std::fs::create_dir_all(directory).map_err(|e| MondrianError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let path = output_path(directory);
    img.save(&path).map_err(|e| MondrianError::ImageExport {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}
