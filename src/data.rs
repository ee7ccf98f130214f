mod directed_edge;
mod point;
mod point_set;
pub mod polygon;
mod rectangle;

pub use directed_edge::*;
pub use point::Point;
pub use point_set::PointSet;
pub use rectangle::BoundingRectangle;

#[doc(inline)]
pub use crate::data::polygon::{EdgeIter, Polygon};

/// Where a point lies relative to a boundary. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
  Inside,
  Outside,
}

impl Classification {
  pub fn from_inside(inside: bool) -> Classification {
    if inside {
      Classification::Inside
    } else {
      Classification::Outside
    }
  }

  pub fn is_inside(self) -> bool {
    self == Classification::Inside
  }
}
