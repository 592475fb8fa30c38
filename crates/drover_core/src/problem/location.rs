use geo::{Distance, Euclidean};
use serde::{Deserialize, Serialize};

/// A 2-D coordinate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Location {
    point: geo::Point,
}

impl Location {
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self {
            point: geo::Point::new(x, y),
        }
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn euclidean_distance(&self, to: &Location) -> f64 {
        Euclidean.distance(self.point, to.point)
    }
}
