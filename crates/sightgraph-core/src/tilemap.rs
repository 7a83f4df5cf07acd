//! A boolean obstacle map that can be built from ASCII art.
//!
//! [`TileMap`] is the bundled [`Occupancy`] oracle: every cell outside the
//! map is reported as blocked.

use std::fmt;

use crate::geom::{Point, Range};
use crate::occupancy::Occupancy;

/// Characters treated as obstacles by [`TileMap::parse`].
pub const DEFAULT_WALLS: &str = "#";
/// Characters treated as open floor by [`TileMap::parse`].
pub const DEFAULT_FLOORS: &str = ".";

/// A fixed-size grid of blocked/open cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    blocked: Vec<bool>,
    width: i32,
    height: i32,
}

impl TileMap {
    /// Create an all-open map. Negative sizes are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            blocked: vec![false; (width * height) as usize],
            width,
            height,
        }
    }

    /// Parse a map where `#` is a wall and `.` is floor.
    ///
    /// See [`parse_with`](Self::parse_with) for format requirements.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        Self::parse_with(s, DEFAULT_WALLS, DEFAULT_FLOORS)
    }

    /// Parse a map with custom wall and floor characters.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Every line must have the same width, and every
    /// character must appear in either `walls` or `floors`.
    pub fn parse_with(s: &str, walls: &str, floors: &str) -> Result<Self, MapError> {
        let s = s.trim();
        let mut width: Option<i32> = None;
        let mut blocked = Vec::with_capacity(s.len());
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut x = 0;
            for ch in line.chars() {
                if walls.contains(ch) {
                    blocked.push(true);
                } else if floors.contains(ch) {
                    blocked.push(false);
                } else {
                    return Err(MapError::InvalidRune {
                        ch,
                        pos: Point::new(x, y as i32),
                    });
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(MapError::InconsistentSize {
                        line: y as i32,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            blocked,
            width: width.unwrap_or(0),
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// (width, height) of the map.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.range().contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Whether `p` is blocked. Cells outside the map are always blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.index(p).is_none_or(|i| self.blocked[i])
    }

    /// Set the state of an in-range cell. Returns `false` (and does nothing)
    /// when `p` is outside the map.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) -> bool {
        match self.index(p) {
            Some(i) => {
                self.blocked[i] = blocked;
                true
            }
            None => false,
        }
    }

    /// Number of blocked in-range cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Render the map as ASCII using `#` and `.`, with `marks` drawn on top.
    /// Marks outside the map are ignored; later marks win.
    pub fn render(&self, marks: &[(Point, char)]) -> String {
        let mut rows: Vec<Vec<char>> = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.is_blocked(Point::new(x, y)) { '#' } else { '.' })
                    .collect()
            })
            .collect();
        for &(p, ch) in marks {
            if self.range().contains(p) {
                rows[p.y as usize][p.x as usize] = ch;
            }
        }
        rows.into_iter()
            .map(|r| r.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Occupancy for TileMap {
    #[inline]
    fn has_collision(&self, cx: i32, cy: i32) -> bool {
        self.is_blocked(Point::new(cx, cy))
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

/// Errors that can occur when parsing a [`TileMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A line's width differs from the first line's.
    InconsistentSize { line: i32, expected: i32, found: i32 },
    /// A character that is neither a wall nor a floor was found.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(
                    f,
                    "map contains invalid rune \u{201c}{ch}\u{201d} at ({}, {})",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for MapError {}
