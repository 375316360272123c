use nalgebra as na;

use crate::error::{ PrmError, Result };

// NOTE: obstacles only answer point containment. Segments are checked by probing points
//       along them, see `collision`.

pub trait Obstacle {
    /// Whether `p` is strictly inside the obstacle. Points on the boundary are outside.
    fn is_inside(&self, p: &na::Point2<f64>) -> bool;
}

/// The view of the world the roadmap builder needs: the map extents, used to scale
/// samples, and a point containment oracle. Implementations must be deterministic.
pub trait ObstacleField {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn contains_point(&self, point: &na::Point2<f64>) -> bool;
}

impl<T> ObstacleField for &T
where
    T: ObstacleField + ?Sized,
{
    #[inline(always)]
    fn width(&self) -> f64 {
        (**self).width()
    }

    #[inline(always)]
    fn height(&self) -> f64 {
        (**self).height()
    }

    #[inline(always)]
    fn contains_point(&self, point: &na::Point2<f64>) -> bool {
        (**self).contains_point(point)
    }
}

/// An axis aligned rectangle, anchored at its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    corner: na::Point2<f64>,
    size: na::Vector2<f64>,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        let valid = [x, y, width, height]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);

        if !valid {
            return Err(PrmError::InvalidObstacle { x, y, width, height });
        }

        Ok(Rectangle {
            corner: na::Point2::new(x, y),
            size: na::Vector2::new(width, height),
        })
    }

    #[inline(always)]
    pub fn corner(&self) -> na::Point2<f64> {
        self.corner
    }

    #[inline(always)]
    pub fn size(&self) -> na::Vector2<f64> {
        self.size
    }

    /// The corner opposite to `corner()`.
    pub fn far_corner(&self) -> na::Point2<f64> {
        self.corner + self.size
    }
}

impl Obstacle for Rectangle {
    fn is_inside(&self, p: &na::Point2<f64>) -> bool {
        itertools::izip!(p.iter(), self.corner.iter(), self.size.iter())
            .all(|(&p_coord, &corner_coord, &sz)| corner_coord < p_coord && p_coord < corner_coord + sz)
    }
}

/// A fixed map of rectangular obstacles over `[0, width] x [0, height]`.
#[derive(Debug, Clone)]
pub struct ObstacleMap {
    width: f64,
    height: f64,
    obstacles: Vec<Rectangle>,
}

impl ObstacleMap {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(PrmError::InvalidMapSize { width, height });
        }

        Ok(ObstacleMap {
            width,
            height,
            obstacles: Vec::new(),
        })
    }

    pub fn with_obstacle(mut self, obstacle: Rectangle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    pub fn extend_obstacles(mut self, obstacles: impl IntoIterator<Item = Rectangle>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    pub fn obstacles(&self) -> &[Rectangle] {
        self.obstacles.as_slice()
    }
}

impl ObstacleField for ObstacleMap {
    #[inline(always)]
    fn width(&self) -> f64 {
        self.width
    }

    #[inline(always)]
    fn height(&self) -> f64 {
        self.height
    }

    fn contains_point(&self, point: &na::Point2<f64>) -> bool {
        self.obstacles.iter().any(|o| o.is_inside(point))
    }
}
