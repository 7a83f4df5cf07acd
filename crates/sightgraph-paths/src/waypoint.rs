use sightgraph_core::Point;

/// A path waypoint: a cell plus a sub-cell offset (cell center by default).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub cx: i32,
    pub cy: i32,
    pub xr: f64,
    pub yr: f64,
}

impl Waypoint {
    /// A waypoint at the center of cell `(cx, cy)`.
    #[inline]
    pub const fn new(cx: i32, cy: i32) -> Self {
        Self {
            cx,
            cy,
            xr: 0.5,
            yr: 0.5,
        }
    }

    /// The waypoint's cell.
    #[inline]
    pub const fn point(self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Position in cell units, offset included.
    #[inline]
    pub fn center(self) -> (f64, f64) {
        (f64::from(self.cx) + self.xr, f64::from(self.cy) + self.yr)
    }

    /// Position in pixels for square cells of `cell_size` pixels.
    #[inline]
    pub fn pixel(self, cell_size: f64) -> (f64, f64) {
        let (x, y) = self.center();
        (x * cell_size, y * cell_size)
    }
}

impl From<Point> for Waypoint {
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Length of the polyline that starts at the center of `from` and visits
/// every waypoint in order.
pub fn path_length(from: Point, path: &[Waypoint]) -> f64 {
    let mut prev = Waypoint::from(from).center();
    let mut total = 0.0;
    for wp in path {
        let cur = wp.center();
        total += (cur.0 - prev.0).hypot(cur.1 - prev.1);
        prev = cur;
    }
    total
}
