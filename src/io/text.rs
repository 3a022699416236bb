//! Plain-text dump of a grid inside a one-cell frame

use std::fmt;

use crate::io::configuration::{BORDER_SYMBOL, PATH_SYMBOL, WALL_SYMBOL};
use crate::spatial::{Cell, Grid};

/// Symbol used for a cell state in the text dump
pub const fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Path => PATH_SYMBOL,
        Cell::Wall => WALL_SYMBOL,
    }
}

/// Render the grid as text, one line per row, framed by border symbols
///
/// The frame adds one row above and below and one column on each side, so a
/// `h x w` grid renders as `h + 2` lines of `w + 2` characters. Lines are
/// separated by `'\n'` with no trailing newline.
pub fn render_text(grid: &Grid) -> String {
    let framed_width = grid.width() + 2;
    let border_row: String = std::iter::repeat_n(BORDER_SYMBOL, framed_width).collect();

    let mut lines = Vec::with_capacity(grid.height() + 2);
    lines.push(border_row.clone());

    for row in grid.cells().rows() {
        let mut line = String::with_capacity(framed_width);
        line.push(BORDER_SYMBOL);
        line.extend(row.iter().map(|&cell| cell_symbol(cell)));
        line.push(BORDER_SYMBOL);
        lines.push(line);
    }

    lines.push(border_row);
    lines.join("\n")
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_text(self))
    }
}
