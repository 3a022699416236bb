//! PNG export of a finished grid, one pixel per cell

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{PATH_COLOR, WALL_COLOR};
use crate::io::error::{MazeError, Result};
use crate::spatial::{Cell, Grid};

/// Pixel color for a cell state
pub const fn cell_color(cell: Cell) -> Rgba<u8> {
    match cell {
        Cell::Path => Rgba(PATH_COLOR),
        Cell::Wall => Rgba(WALL_COLOR),
    }
}

/// Render the grid to an in-memory image
///
/// Pixel `(x, y)` shows the cell at row `y`, column `x`.
pub fn render_image(grid: &Grid) -> RgbaImage {
    let mut img = ImageBuffer::new(grid.width() as u32, grid.height() as u32);

    for ([row, col], cell) in grid.iter() {
        img.put_pixel(col as u32, row as u32, cell_color(cell));
    }

    img
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    render_image(grid)
        .save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
