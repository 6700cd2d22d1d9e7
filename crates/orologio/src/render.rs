//! Terminal rendering of the clock grid.
//!
//! The grid keeps the 12-unit column system: a cell spanning `columns`
//! units is `columns × CHARS_PER_COLUMN` characters wide, so every row
//! fills the same 96-character canvas regardless of its density. Cell
//! size governs vertical padding only.

use orologio_core::clock::FormattedClock;
use orologio_core::layout::{CellSize, RenderedGrid};

const CHARS_PER_COLUMN: usize = 8;

/// Blank lines above and below the three text lines of each cell.
fn padding(size: CellSize) -> usize {
    match size {
        CellSize::Big => 2,
        CellSize::Med => 1,
        CellSize::Small => 0,
    }
}

/// Renders one frame: rows top to bottom, cells side by side, with
/// name, time, and date centered in each cell.
///
/// Cells are paired with clocks by global index. A cell without a
/// matching clock stays blank; clocks beyond the last cell are ignored.
pub fn render_grid(grid: &RenderedGrid, clocks: &[FormattedClock]) -> String {
    let mut out = String::new();
    for row in &grid.rows {
        let pad = padding(row.size);
        let height = pad + 3 + pad;
        let mut lines = vec![String::new(); height];

        for cell in &row.cells {
            let width = cell.columns as usize * CHARS_PER_COLUMN;
            let (name, time, date) = match clocks.get(cell.index) {
                Some(c) => (c.name.as_str(), c.time.as_str(), c.date.as_str()),
                None => ("", "", ""),
            };
            for (i, line) in lines.iter_mut().enumerate() {
                let text = match i.checked_sub(pad) {
                    Some(0) => name,
                    Some(1) => time,
                    Some(2) => date,
                    _ => "",
                };
                line.push_str(&center(text, width));
            }
        }

        for line in lines {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Centers `text` in a field of `width` characters, truncating when it
/// doesn't fit.
fn center(text: &str, width: usize) -> String {
    let text: String = text.chars().take(width).collect();
    let len = text.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut field = String::with_capacity(width + text.len());
    field.extend(std::iter::repeat(' ').take(left));
    field.push_str(&text);
    field.extend(std::iter::repeat(' ').take(right));
    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use orologio_core::layout::{LayoutKey, LayoutTable, build_grid};
    use orologio_core::{ClockConfig, ClockEntry};

    fn four_grid() -> RenderedGrid {
        let config = ClockConfig {
            layout: LayoutKey::Four,
            clocks: vec![ClockEntry::new("GMT", "GMT"); 4],
        };
        build_grid(&config, &LayoutTable::builtin()).unwrap()
    }

    fn formatted(name: &str) -> FormattedClock {
        FormattedClock {
            name: name.into(),
            time: "12:00:00".into(),
            date: "Mon 1/15/24 J+0".into(),
        }
    }

    #[test]
    fn frame_contains_every_clock_in_order() {
        // Arrange
        let grid = four_grid();
        let clocks: Vec<FormattedClock> =
            ["GMT", "NY", "Paris", "Dubai"].iter().map(|n| formatted(n)).collect();

        // Act
        let frame = render_grid(&grid, &clocks);

        // Assert
        let gmt = frame.find("GMT").unwrap();
        let ny = frame.find("NY").unwrap();
        let paris = frame.find("Paris").unwrap();
        let dubai = frame.find("Dubai").unwrap();
        assert!(gmt < ny && ny < paris && paris < dubai);
    }

    #[test]
    fn big_rows_are_seven_lines_tall() {
        // Arrange
        let grid = four_grid();
        let clocks = vec![formatted("GMT"); 4];

        // Act
        let frame = render_grid(&grid, &clocks);

        // Assert — 2 rows × (7 content lines + 1 separator)
        assert_eq!(frame.lines().count(), 2 * 8 - 1);
    }

    #[test]
    fn missing_entries_leave_cells_blank() {
        // Arrange — 4-cell grid, only one clock configured
        let grid = four_grid();
        let clocks = vec![formatted("GMT")];

        // Act
        let frame = render_grid(&grid, &clocks);

        // Assert
        assert_eq!(frame.matches("12:00:00").count(), 1);
    }

    #[test]
    fn extra_entries_are_ignored() {
        // Arrange — 4-cell grid, six clocks configured
        let grid = four_grid();
        let clocks = vec![formatted("X"); 6];

        // Act
        let frame = render_grid(&grid, &clocks);

        // Assert
        assert_eq!(frame.matches("12:00:00").count(), 4);
    }

    #[test]
    fn center_pads_and_truncates() {
        // Arrange / Act / Assert
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("abcdefgh", 4), "abcd");
    }
}
