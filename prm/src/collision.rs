use log::trace;
use nalgebra as na;

use crate::error::{ PrmError, Result };
use crate::obstacle::ObstacleField;
use crate::sequence::VanDerCorput;
use crate::utils::*;

pub const DEFAULT_EDGE_CHECK_PRECISION: f64 = 10.0;
pub const DEFAULT_EDGE_CHECK_BASE: u32 = 2;

/// Validates straight edges by probing points along them.
///
/// The probes are placed at the fractions given by a fresh Van der Corput sequence, starting
/// at the origin of the edge, and probing stops once the next fraction would land within
/// `precision` of the far end. This is an approximation: probes end up spaced at most about
/// `2 * precision` apart, so obstacles thinner than that may slip between them.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeChecker {
    precision: f64,
    fractions: VanDerCorput,
}

impl Default for EdgeChecker {
    fn default() -> Self {
        EdgeChecker {
            precision: DEFAULT_EDGE_CHECK_PRECISION,
            fractions: VanDerCorput::default(),
        }
    }
}

impl EdgeChecker {
    pub fn new(precision: f64, base: u32) -> Result<Self> {
        if !(precision.is_finite() && precision > 0.0) {
            return Err(PrmError::InvalidPrecision(precision));
        }
        let fractions = VanDerCorput::new(base)?;
        Ok(EdgeChecker { precision, fractions })
    }

    #[inline(always)]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    #[inline(always)]
    pub fn base(&self) -> u32 {
        self.fractions.base()
    }

    pub fn is_edge_valid<F>(&self, p1: &na::Point2<f64>, p2: &na::Point2<f64>, field: &F) -> bool
    where
        F: ObstacleField + ?Sized,
    {
        let total_distance = na::distance(p1, p2);

        // Every edge starts from a fresh sequence.
        for t in self.fractions.clone() {
            if t * total_distance >= total_distance - self.precision {
                break;
            }

            let probe = lerp(p1, p2, t);
            if field.contains_point(&probe) {
                trace!(
                    "edge ({:.2}, {:.2}) -> ({:.2}, {:.2}) blocked at ({:.2}, {:.2})",
                    p1.x, p1.y, p2.x, p2.y, probe.x, probe.y
                );
                return false;
            }
        }

        true
    }
}

/// Checks an edge with the default precision and base.
pub fn is_edge_valid<F>(p1: &na::Point2<f64>, p2: &na::Point2<f64>, field: &F) -> bool
where
    F: ObstacleField + ?Sized,
{
    EdgeChecker::default().is_edge_valid(p1, p2, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::{ObstacleMap, Rectangle};

    fn point2(x: f64, y: f64) -> na::Point2<f64> {
        na::Point2::new(x, y)
    }

    fn map_with(obstacles: &[(f64, f64, f64, f64)]) -> ObstacleMap {
        ObstacleMap::new(100.0, 100.0).unwrap().extend_obstacles(
            obstacles
                .iter()
                .map(|&(x, y, w, h)| Rectangle::new(x, y, w, h).unwrap()),
        )
    }

    #[test]
    fn clear_corridor_is_valid() {
        let map = map_with(&[(40.0, 60.0, 20.0, 40.0), (40.0, 0.0, 20.0, 40.0)]);
        assert!(is_edge_valid(&point2(10.0, 50.0), &point2(90.0, 50.0), &map));
    }

    #[test]
    fn wide_obstacle_across_edge_is_invalid() {
        let map = map_with(&[(40.0, 0.0, 20.0, 100.0)]);
        assert!(!is_edge_valid(&point2(10.0, 50.0), &point2(90.0, 50.0), &map));
        assert!(!is_edge_valid(&point2(90.0, 50.0), &point2(10.0, 50.0), &map));
    }

    #[test]
    fn thin_obstacle_can_be_missed() {
        let map = map_with(&[(40.0, 0.0, 2.0, 100.0)]);
        assert!(is_edge_valid(&point2(10.0, 50.0), &point2(90.0, 50.0), &map));

        let fine = EdgeChecker::new(0.5, 2).unwrap();
        assert!(!fine.is_edge_valid(&point2(10.0, 50.0), &point2(90.0, 50.0), &map));
    }

    #[test]
    fn edges_shorter_than_precision_are_not_probed() {
        // Both endpoints are inside the obstacle, but nothing gets probed.
        let map = map_with(&[(0.0, 0.0, 100.0, 100.0)]);
        assert!(is_edge_valid(&point2(50.0, 50.0), &point2(55.0, 50.0), &map));
        assert!(is_edge_valid(&point2(50.0, 50.0), &point2(50.0, 50.0), &map));
    }

    #[test]
    fn origin_is_the_first_probe() {
        let map = map_with(&[(0.0, 0.0, 20.0, 20.0)]);
        assert!(!is_edge_valid(&point2(10.0, 10.0), &point2(90.0, 90.0), &map));
    }

    #[test]
    fn rejects_bad_configuration() {
        assert_eq!(EdgeChecker::new(0.0, 2), Err(PrmError::InvalidPrecision(0.0)));
        assert!(matches!(
            EdgeChecker::new(f64::NAN, 2),
            Err(PrmError::InvalidPrecision(_))
        ));
        assert_eq!(EdgeChecker::new(1.0, 1), Err(PrmError::InvalidBase(1)));

        let checker = EdgeChecker::new(2.5, 3).unwrap();
        assert_eq!(checker.precision(), 2.5);
        assert_eq!(checker.base(), 3);
    }
}
