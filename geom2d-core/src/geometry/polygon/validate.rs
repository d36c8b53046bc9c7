use std::f64::consts::TAU;

use itertools::Itertools;
use log::debug;

use crate::{error::GeometryError, math::is_zero::IsZero, point::Point};

use super::Polygon;

/// Slack on the total turning angle of a convex loop (exactly one full turn).
const TURN_TOLERANCE: f64 = 1e-9;

impl Polygon {
    /// Validating constructor: at least 3 finite vertices, non-zero area,
    /// counter-clockwise winding, and convex (collinear vertices allowed).
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        let polygon = Polygon { vertices };
        polygon.validate().map_err(|err| {
            debug!("Polygon::new: rejecting {}: {}", polygon, err);
            err
        })?;
        Ok(polygon)
    }

    fn validate(&self) -> Result<(), GeometryError> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices(n));
        }
        if self.vertices.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeometryError::Degenerate);
        }
        if self.edges().any(|e| e.is_degenerate()) {
            return Err(GeometryError::Degenerate);
        }
        let area = self.signed_area();
        if area.is_zero() {
            return Err(GeometryError::Degenerate);
        }
        if area.lt_zero() {
            return Err(GeometryError::ClockwiseWinding);
        }
        self.check_convex()
    }

    /// Turn at each vertex as `(vertex index, cross, signed angle)`, starting at vertex 1.
    fn turns(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        let n = self.vertices.len();
        self.vertices
            .iter()
            .circular_tuple_windows()
            .enumerate()
            .map(move |(i, (a, b, c))| {
                let e0 = *b - *a;
                let e1 = *c - *b;
                let cross = e0.cross(&e1);
                ((i + 1) % n, cross, cross.atan2(e0.dot(&e1)))
            })
    }

    /// Every turn is left (or straight), and the turns add up to a single revolution.
    ///
    /// The second condition rejects loops like a pentagram, which only ever turn left
    /// but wind around twice.
    fn check_convex(&self) -> Result<(), GeometryError> {
        let mut total_turn = 0f64;
        for (index, cross, turn) in self.turns() {
            if cross.lt_zero() {
                return Err(GeometryError::NotConvex { index });
            }
            total_turn += turn;
            if total_turn > TAU + TURN_TOLERANCE {
                return Err(GeometryError::NotConvex { index });
            }
        }
        Ok(())
    }

    /// Convex in either winding: all non-straight turns share one sign and add up to
    /// a single revolution. Collinear vertices are allowed; a loop with no turns isn't convex.
    ///
    /// Unlike [`Polygon::new`], a clockwise polygon can pass.
    pub fn is_convex(&self) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        let mut sign = 0f64;
        let mut total_turn = 0f64;
        for (_, cross, turn) in self.turns() {
            if !cross.is_zero() {
                if sign * cross < 0. {
                    return false;
                }
                sign = cross.signum();
            }
            total_turn += turn;
        }
        !sign.is_zero() && (total_turn.abs() - TAU).abs() <= TURN_TOLERANCE
    }
}
