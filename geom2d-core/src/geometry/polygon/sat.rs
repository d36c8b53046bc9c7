use log::{debug, trace};

use crate::{direction::Direction, math::interval::Interval};

use super::Polygon;

impl Polygon {
    /// Unit normal of each edge. Degenerate (zero-length) edges have no normal and are skipped.
    pub fn separating_axes(&self) -> impl Iterator<Item = Direction> + '_ {
        self.edges()
            .filter_map(|edge| edge.direction())
            .map(|dir| dir.normal())
    }

    /// Extent of the vertices' projections onto `axis`; `None` without vertices.
    pub fn project(&self, axis: &Direction) -> Option<Interval> {
        Interval::hull(self.vertices.iter().map(|p| p.project(axis)))
    }

    /// Separating Axis Theorem over the edge normals of both polygons.
    ///
    /// Stops at the first axis whose projections are disjoint. Touching intervals
    /// overlap, so polygons sharing an edge or vertex intersect. Only exact for convex polygons.
    pub fn intersect_polygon(&self, o: &Polygon) -> bool {
        for axis in self.separating_axes().chain(o.separating_axes()) {
            match (self.project(&axis), o.project(&axis)) {
                (Some(a), Some(b)) if a.overlaps(&b) => {
                    trace!("Polygon::intersect_polygon: axis {} overlaps: {} {}", axis, a, b);
                }
                (a, b) => {
                    debug!("Polygon::intersect_polygon: separating axis {}: {:?} {:?}", axis, a, b);
                    return false;
                }
            }
        }
        // No axes at all (e.g. every edge degenerate) falls through to overlap,
        // unless one side has no vertices to project.
        !self.vertices.is_empty() && !o.vertices.is_empty()
    }
}
