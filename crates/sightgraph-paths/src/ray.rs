//! Line of sight between cell centers.
//!
//! The traversal is a supercover walk computed with exact integer
//! arithmetic: it visits every cell whose interior the segment between the
//! two cell centers crosses. Because the visited set is defined purely by
//! geometry, walking A→B and B→A checks the same cells, which makes
//! [`cast_ray`] symmetric.
//!
//! When the segment passes exactly through a grid vertex, the two cells
//! beside that vertex are only touched at a point. [`DiagonalGaps`] decides
//! whether a pair of blocked side cells stops the ray.

use sightgraph_core::Point;

use crate::config::DiagonalGaps;

/// One step of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineStep {
    /// The cell entered by this step.
    pub(crate) cell: Point,
    /// The two cells squeezed between when the step crosses a vertex.
    pub(crate) squeezed: Option<[Point; 2]>,
}

/// Iterator over the cells traversed by the segment between two cell
/// centers, starting with `from` and ending with `to`.
#[derive(Debug, Clone)]
pub struct LineCells {
    cur: Point,
    step: Point,
    n: Point,
    i: Point,
    at_start: bool,
}

impl LineCells {
    /// Start a traversal from `from` to `to`.
    pub fn new(from: Point, to: Point) -> Self {
        let d = to - from;
        Self {
            cur: from,
            step: Point::new(d.x.signum(), d.y.signum()),
            n: Point::new(d.x.abs(), d.y.abs()),
            i: Point::ZERO,
            at_start: true,
        }
    }

    /// Advance past the current cell. Does not yield the start cell.
    pub(crate) fn advance(&mut self) -> Option<LineStep> {
        self.at_start = false;
        if self.i.x >= self.n.x && self.i.y >= self.n.y {
            return None;
        }
        // Compare the parameter at which the segment reaches the next
        // vertical boundary, (0.5 + ix) / nx, with the next horizontal one,
        // (0.5 + iy) / ny, cross-multiplied to stay in integers.
        let decision = i64::from(1 + 2 * self.i.x) * i64::from(self.n.y)
            - i64::from(1 + 2 * self.i.y) * i64::from(self.n.x);
        let mut squeezed = None;
        if decision == 0 {
            squeezed = Some([
                self.cur.shift(self.step.x, 0),
                self.cur.shift(0, self.step.y),
            ]);
            self.cur = self.cur + self.step;
            self.i = self.i.shift(1, 1);
        } else if decision < 0 {
            self.cur = self.cur.shift(self.step.x, 0);
            self.i = self.i.shift(1, 0);
        } else {
            self.cur = self.cur.shift(0, self.step.y);
            self.i = self.i.shift(0, 1);
        }
        Some(LineStep {
            cell: self.cur,
            squeezed,
        })
    }
}

impl Iterator for LineCells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.at_start {
            self.at_start = false;
            return Some(self.cur);
        }
        self.advance().map(|s| s.cell)
    }
}

/// Cells traversed by the segment from `from` to `to`, endpoints included.
pub fn line_cells(from: Point, to: Point) -> LineCells {
    LineCells::new(from, to)
}

/// Whether the segment from `from` to `to` crosses only cells for which
/// `can_pass` holds, using the default [`DiagonalGaps::Blocked`] rule.
///
/// `from == to` is always visible.
pub fn cast_ray(from: Point, to: Point, can_pass: impl Fn(Point) -> bool) -> bool {
    cast_ray_with(from, to, DiagonalGaps::Blocked, can_pass)
}

/// [`cast_ray`] with an explicit diagonal-gap rule.
pub fn cast_ray_with(
    from: Point,
    to: Point,
    gaps: DiagonalGaps,
    can_pass: impl Fn(Point) -> bool,
) -> bool {
    if from == to {
        return true;
    }
    if !can_pass(from) {
        return false;
    }
    let mut line = LineCells::new(from, to);
    while let Some(step) = line.advance() {
        if let (DiagonalGaps::Blocked, Some([a, b])) = (gaps, step.squeezed) {
            if !can_pass(a) && !can_pass(b) {
                return false;
            }
        }
        if !can_pass(step.cell) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
        line_cells(from.into(), to.into()).map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn single_cell() {
        assert_eq!(cells((2, 3), (2, 3)), vec![(2, 3)]);
    }

    #[test]
    fn horizontal_and_vertical() {
        assert_eq!(cells((0, 0), (3, 0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(cells((1, 2), (1, -1)), vec![(1, 2), (1, 1), (1, 0), (1, -1)]);
    }

    #[test]
    fn pure_diagonal_steps_through_vertices() {
        assert_eq!(cells((0, 0), (3, 3)), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn shallow_line_supercover() {
        // The segment (0.5,0.5)→(3.5,1.5) crosses x=1 at y≈0.67, passes
        // the vertex (2,1) exactly, and crosses x=3 at y≈1.33.
        assert_eq!(cells((0, 0), (3, 1)), vec![(0, 0), (1, 0), (2, 1), (3, 1)]);
    }

    #[test]
    fn steep_line_without_vertex() {
        assert_eq!(cells((0, 0), (1, 2)), vec![(0, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn traversal_is_symmetric() {
        for &(a, b) in &[((0, 0), (5, 2)), ((3, 1), (-2, 4)), ((0, 0), (7, 3)), ((1, 1), (4, 4))] {
            let mut fwd = cells(a, b);
            let mut back = cells(b, a);
            fwd.sort();
            back.sort();
            assert_eq!(fwd, back, "{a:?} <-> {b:?}");
        }
    }

    #[test]
    fn blocked_cell_stops_ray() {
        let wall = |p: Point| p != Point::new(2, 0);
        assert!(!cast_ray(Point::new(0, 0), Point::new(4, 0), wall));
        assert!(cast_ray(Point::new(0, 1), Point::new(4, 1), wall));
    }

    #[test]
    fn blocked_endpoints_stop_ray() {
        let open = |p: Point| p != Point::new(3, 3);
        assert!(!cast_ray(Point::new(0, 3), Point::new(3, 3), open));
        assert!(!cast_ray(Point::new(3, 3), Point::new(0, 3), open));
    }

    #[test]
    fn same_cell_is_always_visible() {
        assert!(cast_ray(Point::new(1, 1), Point::new(1, 1), |_| false));
    }

    #[test]
    fn diagonal_gap_rule() {
        // (1,0) and (0,1) touch diagonally; the ray (0,0)→(1,1) squeezes
        // between them.
        let blocked = [Point::new(1, 0), Point::new(0, 1)];
        let can_pass = |p: Point| !blocked.contains(&p);
        let (a, b) = (Point::new(0, 0), Point::new(1, 1));
        assert!(!cast_ray_with(a, b, DiagonalGaps::Blocked, can_pass));
        assert!(!cast_ray_with(b, a, DiagonalGaps::Blocked, can_pass));
        assert!(cast_ray_with(a, b, DiagonalGaps::Open, can_pass));

        // One side open is not a gap.
        let one = |p: Point| p != Point::new(1, 0);
        assert!(cast_ray(a, b, one));
    }
}
