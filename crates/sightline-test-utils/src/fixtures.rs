//! ASCII map fixtures.
//!
//! Maps are drawn one row per line, row 0 first. The glyph function
//! decides what each character becomes; a character it rejects is a
//! missing cell, and an empty line is a missing row.
//!
//! Standard maps for visibility tests:
//!
//! - [`PILLAR_ROOM`]: open room with a single wall pillar in the middle
//! - [`DIAGONAL_DOORWAY`]: two walls touching only at a corner
//! - [`WINDOWED_WALL`]: a wall with one transparent window cell
//! - [`RAGGED_CAVE`]: jagged rows with holes and a missing row

use crate::MockTile;

/// 7 × 5 room; the pillar is at `(3, 2)`.
pub const PILLAR_ROOM: &str = "\
#######
#.....#
#..#..#
#.....#
#######";

/// Walls at `(2, 1)` and `(1, 2)` meet at the corner `(1.5, 1.5)`.
pub const DIAGONAL_DOORWAY: &str = "\
....
..#.
.#..
....";

/// A wall across column 2 with a window at `(2, 1)`.
pub const WINDOWED_WALL: &str = "\
..#..
..=..
..#..";

/// Rows of widths 5, 3, (missing), 5 and 2; `(2, 3)` is a hole.
pub const RAGGED_CAVE: &str = "\
.....
...

.. ..
..";

/// Split `picture` into jagged rows, mapping each character with `glyph`.
pub fn ascii_rows<T>(picture: &str, glyph: impl Fn(char) -> Option<T>) -> Vec<Option<Vec<Option<T>>>> {
    picture
        .lines()
        .map(|line| (!line.is_empty()).then(|| line.chars().map(&glyph).collect()))
        .collect()
}

/// Glyphs for [`MockTile`]: `.` open, `#` wall, `=` window, `"` brush.
pub fn mock_glyph(glyph: char) -> Option<MockTile> {
    match glyph {
        '.' => Some(MockTile::OPEN),
        '#' => Some(MockTile::WALL),
        '=' => Some(MockTile::WINDOW),
        '"' => Some(MockTile::BRUSH),
        _ => None,
    }
}
