use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ClockConfig;
use crate::error::Error;

/// Total column units in one grid row. A cell in a row of `count` cells
/// spans `12 / count` units, so rows of different density line up.
pub const GRID_COLUMNS: u8 = 12;

/// Identifier for a built-in layout preset.
///
/// A closed set: the key is part of the persisted configuration, and an
/// unknown key in the document fails deserialization rather than
/// producing a half-built grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LayoutKey {
    /// Four clocks: two rows of two big cells.
    #[serde(rename = "4")]
    Four,
    /// Eight clocks: one row of two big cells, then two rows of three
    /// medium cells.
    #[serde(rename = "8")]
    Eight,
}

impl fmt::Display for LayoutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Four => "4",
            Self::Eight => "8",
        })
    }
}

/// Visual size of a clock cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSize {
    Big,
    Med,
    Small,
}

/// One row of a layout preset: how many cells, and at what size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpec {
    /// Number of clock cells in this row.
    pub count: u8,
    /// Size applied to every cell in this row.
    pub size: CellSize,
}

/// A layout preset: rows listed top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSpec {
    pub rows: Vec<RowSpec>,
}

impl LayoutSpec {
    /// Total number of cells the preset produces.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.count as usize).sum()
    }
}

/// Immutable mapping from layout key to preset.
///
/// Passed into [`build_grid`] rather than consulted as module state, so
/// tests can substitute a table that is missing a key or shaped
/// differently from the built-ins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTable {
    layouts: BTreeMap<LayoutKey, LayoutSpec>,
}

impl LayoutTable {
    pub fn new(layouts: BTreeMap<LayoutKey, LayoutSpec>) -> Self {
        Self { layouts }
    }

    /// The two built-in presets.
    ///
    /// ```text
    /// "4":  [big][big]        "8":  [ big  ][ big  ]
    ///       [big][big]              [med][med][med]
    ///                               [med][med][med]
    /// ```
    pub fn builtin() -> Self {
        let mut layouts = BTreeMap::new();
        layouts.insert(
            LayoutKey::Four,
            LayoutSpec {
                rows: vec![
                    RowSpec {
                        count: 2,
                        size: CellSize::Big,
                    },
                    RowSpec {
                        count: 2,
                        size: CellSize::Big,
                    },
                ],
            },
        );
        layouts.insert(
            LayoutKey::Eight,
            LayoutSpec {
                rows: vec![
                    RowSpec {
                        count: 2,
                        size: CellSize::Big,
                    },
                    RowSpec {
                        count: 3,
                        size: CellSize::Med,
                    },
                    RowSpec {
                        count: 3,
                        size: CellSize::Med,
                    },
                ],
            },
        );
        Self { layouts }
    }

    pub fn get(&self, key: LayoutKey) -> Option<&LayoutSpec> {
        self.layouts.get(&key)
    }
}

/// A cell placeholder in the rendered grid.
///
/// Carries the global position used to pair it with a clock entry at
/// refresh time; indices are contiguous, zero-based, and stable across
/// rebuilds of the same configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Global cell index, counted across rows in order.
    pub index: usize,
    pub size: CellSize,
    /// Width in grid units: `12 / row count`.
    pub columns: u8,
}

/// One rendered row: the preset row's size plus its cells in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub size: CellSize,
    pub cells: Vec<Cell>,
}

/// The static grid structure derived from a configuration.
///
/// Recomputed whenever the configuration is replaced; never mutated in
/// place. The per-tick refresh only rewrites cell contents, addressed
/// by [`Cell::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGrid {
    pub rows: Vec<RenderedRow>,
}

impl RenderedGrid {
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }
}

/// Builds the static grid structure for a configuration.
///
/// Walks the preset's rows in order; each row contributes `count` cells
/// tagged with the row's size and an incrementing global index.
///
/// The grid always has exactly as many cells as the preset defines:
/// clock entries beyond that are dropped at refresh time, and missing
/// entries leave trailing cells unfilled. Neither is an error.
pub fn build_grid(config: &ClockConfig, table: &LayoutTable) -> Result<RenderedGrid, Error> {
    let spec = table
        .get(config.layout)
        .ok_or(Error::UnknownLayout(config.layout))?;

    let mut index = 0;
    let mut rows = Vec::with_capacity(spec.rows.len());
    for row in &spec.rows {
        let columns = GRID_COLUMNS / row.count.max(1);
        let mut cells = Vec::with_capacity(row.count as usize);
        for _ in 0..row.count {
            cells.push(Cell {
                index,
                size: row.size,
                columns,
            });
            index += 1;
        }
        rows.push(RenderedRow {
            size: row.size,
            cells,
        });
    }
    Ok(RenderedGrid { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockEntry;

    fn config(layout: LayoutKey, clocks: usize) -> ClockConfig {
        ClockConfig {
            layout,
            clocks: (0..clocks)
                .map(|i| ClockEntry {
                    timezone: "GMT".into(),
                    name: format!("Clock {i}"),
                })
                .collect(),
        }
    }

    #[test]
    fn four_layout_yields_two_rows_of_two_big_cells() {
        // Arrange
        let config = config(LayoutKey::Four, 4);
        let table = LayoutTable::builtin();

        // Act
        let grid = build_grid(&config, &table).unwrap();

        // Assert
        assert_eq!(grid.rows.len(), 2);
        for row in &grid.rows {
            assert_eq!(row.size, CellSize::Big);
            assert_eq!(row.cells.len(), 2);
        }
        let indices: Vec<usize> = grid.rows.iter().flat_map(|r| &r.cells).map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn eight_layout_cell_indices_are_contiguous_and_zero_based() {
        // Arrange
        let config = config(LayoutKey::Eight, 8);
        let table = LayoutTable::builtin();

        // Act
        let grid = build_grid(&config, &table).unwrap();

        // Assert — 2 + 3 + 3 cells, indexed 0..8 in row order
        assert_eq!(grid.cell_count(), 8);
        let indices: Vec<usize> = grid.rows.iter().flat_map(|r| &r.cells).map(|c| c.index).collect();
        assert_eq!(indices, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn cell_columns_follow_the_twelve_unit_grid() {
        // Arrange
        let config = config(LayoutKey::Eight, 8);
        let table = LayoutTable::builtin();

        // Act
        let grid = build_grid(&config, &table).unwrap();

        // Assert — rows of 2 get 6 units per cell, rows of 3 get 4
        assert_eq!(grid.rows[0].cells[0].columns, 6);
        assert_eq!(grid.rows[1].cells[0].columns, 4);
        assert_eq!(grid.rows[2].cells[2].columns, 4);
    }

    #[test]
    fn build_grid_is_idempotent() {
        // Arrange
        let config = config(LayoutKey::Eight, 8);
        let table = LayoutTable::builtin();

        // Act
        let first = build_grid(&config, &table).unwrap();
        let second = build_grid(&config, &table).unwrap();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn missing_table_entry_is_an_explicit_error() {
        // Arrange — a table that only knows the "4" preset
        let mut layouts = BTreeMap::new();
        layouts.insert(
            LayoutKey::Four,
            LayoutSpec {
                rows: vec![RowSpec {
                    count: 2,
                    size: CellSize::Big,
                }],
            },
        );
        let table = LayoutTable::new(layouts);
        let config = config(LayoutKey::Eight, 8);

        // Act
        let result = build_grid(&config, &table);

        // Assert
        assert_eq!(result, Err(Error::UnknownLayout(LayoutKey::Eight)));
    }

    #[test]
    fn clock_count_mismatch_does_not_change_the_grid() {
        // Arrange — 2 clocks configured against the 8-cell preset
        let config = config(LayoutKey::Eight, 2);
        let table = LayoutTable::builtin();

        // Act
        let grid = build_grid(&config, &table).unwrap();

        // Assert — grid shape comes from the preset alone
        assert_eq!(grid.cell_count(), 8);
    }

    #[test]
    fn layout_key_serializes_as_its_short_name() {
        // Arrange / Act
        let four = serde_json::to_string(&LayoutKey::Four).unwrap();
        let eight: LayoutKey = serde_json::from_str("\"8\"").unwrap();

        // Assert
        assert_eq!(four, "\"4\"");
        assert_eq!(eight, LayoutKey::Eight);
    }
}
