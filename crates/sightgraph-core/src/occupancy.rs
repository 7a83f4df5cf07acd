use crate::geom::Point;

/// Occupancy oracle: reports whether a grid cell is blocked.
///
/// Implementations must be pure and deterministic, and must define a
/// consistent policy for cells outside the map (usually: blocked). The
/// pathfinder has no boundary logic of its own.
///
/// Any `Fn(i32, i32) -> bool` closure is an oracle.
pub trait Occupancy {
    /// Whether cell `(cx, cy)` is blocked.
    fn has_collision(&self, cx: i32, cy: i32) -> bool;

    /// Convenience wrapper over [`has_collision`](Self::has_collision).
    #[inline]
    fn blocked(&self, p: Point) -> bool {
        self.has_collision(p.x, p.y)
    }
}

impl<F> Occupancy for F
where
    F: Fn(i32, i32) -> bool,
{
    #[inline]
    fn has_collision(&self, cx: i32, cy: i32) -> bool {
        self(cx, cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_an_oracle() {
        let walls = |x: i32, y: i32| x == 2 || y < 0;
        assert!(walls.has_collision(2, 7));
        assert!(walls.blocked(Point::new(0, -1)));
        assert!(!walls.blocked(Point::new(1, 1)));
    }
}
