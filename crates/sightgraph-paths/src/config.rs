use sightgraph_core::Point;

/// Edge cost and heuristic used by the best-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostMetric {
    /// Squared Euclidean distance, for both accumulated cost and estimate.
    ///
    /// Sums of squared segment lengths are not proportional to path length,
    /// so this favours many short hops over few long ones and does not
    /// always return the geometrically shortest route.
    #[default]
    SquaredEuclidean,
    /// True Euclidean distance.
    Euclidean,
}

impl CostMetric {
    /// Cost between two cells under this metric.
    #[inline]
    pub fn cost(self, a: Point, b: Point) -> f64 {
        match self {
            Self::SquaredEuclidean => a.dist_sqr(b),
            Self::Euclidean => a.dist(b),
        }
    }
}

/// How a ray behaves when it passes exactly through the shared corner of two
/// diagonally-touching cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagonalGaps {
    /// The ray is stopped when both cells beside the corner are blocked.
    #[default]
    Blocked,
    /// The ray squeezes through; only the cells it enters are checked.
    Open,
}

/// Build and query options for a [`VisibilityGraph`](crate::VisibilityGraph).
///
/// The same options apply to every ray cast of a graph: corner linking,
/// endpoint linking, the direct-sight shortcut and path compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    pub metric: CostMetric,
    pub diagonal_gaps: DiagonalGaps,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = GraphConfig::default();
        assert_eq!(cfg.metric, CostMetric::SquaredEuclidean);
        assert_eq!(cfg.diagonal_gaps, DiagonalGaps::Blocked);
    }

    #[test]
    fn metric_costs() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(CostMetric::SquaredEuclidean.cost(a, b), 25.0);
        assert_eq!(CostMetric::Euclidean.cost(a, b), 5.0);
        assert_eq!(CostMetric::Euclidean.cost(a, a), 0.0);
    }
}
