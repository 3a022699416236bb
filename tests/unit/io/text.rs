//! Tests for the framed text dump

#[cfg(test)]
mod tests {
    use braidmaze::io::configuration::{BORDER_SYMBOL, PATH_SYMBOL, WALL_SYMBOL};
    use braidmaze::io::text::{cell_symbol, render_text};
    use braidmaze::{Cell, Grid, MazeGenerator};

    // Tests the 3x3 maze with an open centre renders a framed square
    // Verified by dropping the bottom border row
    #[test]
    fn test_three_by_three_dump() {
        let mut generator = MazeGenerator::with_seed(3, 3, 1).expect("valid dimensions");
        generator.generate_from([1, 1]).expect("in bounds");

        assert_eq!(
            render_text(generator.grid()),
            "+++++\n+###+\n+#0#+\n+###+\n+++++"
        );
    }

    // Tests every line is framed and as wide as the grid plus two
    // Verified by omitting the trailing border symbol of each row
    #[test]
    fn test_dump_shape() {
        let mut generator = MazeGenerator::with_seed(7, 11, 5).expect("valid dimensions");
        generator.generate().expect("generation succeeds");

        let dump = render_text(generator.grid());
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 9);
        for line in &lines {
            assert_eq!(line.chars().count(), 13);
            assert!(line.starts_with(BORDER_SYMBOL));
            assert!(line.ends_with(BORDER_SYMBOL));
        }
        assert!(!dump.ends_with('\n'));

        let open = dump.chars().filter(|&c| c == PATH_SYMBOL).count();
        assert_eq!(open, generator.grid().open_count());
    }

    // Tests Display matches the text dump
    // Verified by formatting with Debug in Display
    #[test]
    fn test_display_matches_dump() {
        let grid = Grid::new(2, 2).expect("valid dimensions");

        assert_eq!(grid.to_string(), render_text(&grid));
        assert_eq!(grid.to_string(), "++++\n+##+\n+##+\n++++");
    }

    // Tests symbols follow configuration
    // Verified by swapping path and wall symbols
    #[test]
    fn test_cell_symbol() {
        assert_eq!(cell_symbol(Cell::Path), PATH_SYMBOL);
        assert_eq!(cell_symbol(Cell::Wall), WALL_SYMBOL);
    }
}
