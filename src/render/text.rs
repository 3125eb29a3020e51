// src/render/text.rs

use crate::map::{Cell, GridMap};
use std::fmt::Write;

const ANSI_RESET: &str = "\u{1b}[0m";
const ANSI_RED: &str = "\u{1b}[31m";
const ANSI_GREEN: &str = "\u{1b}[32m";

/// Renders `map` row by row as space-separated cell codes, walls in red and
/// path in green.
pub fn ansi(map: &GridMap) -> String {
    render(map, |cell| match cell {
        Cell::Wall => ANSI_RED,
        Cell::Path => ANSI_GREEN,
    })
}

/// Same layout as [`ansi`] without escape codes.
pub fn plain(map: &GridMap) -> String {
    render(map, |_| "")
}

fn render<F>(map: &GridMap, color: F) -> String
where
    F: Fn(Cell) -> &'static str,
{
    let mut out = String::with_capacity(map.width() * map.height() * 2);
    for y in 0..map.height() {
        for cell in map.row(y) {
            let prefix = color(cell);
            let suffix = if prefix.is_empty() { "" } else { ANSI_RESET };
            // Writing to a String cannot fail.
            let _ = write!(out, "{}{} {}", prefix, cell.code(), suffix);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GridMap {
        GridMap::from_columns(vec![vec![Cell::Path, Cell::Wall], vec![Cell::Path, Cell::Path]])
            .unwrap()
    }

    #[test]
    fn test_plain_layout() {
        assert_eq!(plain(&sample()), "0 0 \n1 0 \n");
    }

    #[test]
    fn test_ansi_colors() {
        let out = ansi(&sample());
        assert!(out.starts_with("\u{1b}[32m0 \u{1b}[0m"));
        assert!(out.contains("\u{1b}[31m1 \u{1b}[0m"));
        assert_eq!(out.lines().count(), 2);
    }
}
