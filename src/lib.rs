// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Classify scatter points against a map boundary.
//!
//! A [`Boundary`](boundary::Boundary) owns a named boundary polygon and a
//! lazily loaded [`PointSet`](data::PointSet). The [`Controller`](controller::Controller)
//! loads the points, classifies every one of them as
//! [`Inside`](data::Classification::Inside) or [`Outside`](data::Classification::Outside)
//! and hands one marker per point to an injected [`View`](view::View), which is
//! later used to implement the "all / inside / outside" filter.
use std::cmp::Ordering;
use std::ops::BitXor;

pub mod boundary;
pub mod classify;
pub mod config;
pub mod controller;
pub mod data;
mod orientation;
pub mod source;
pub mod view;

pub use orientation::Orientation;

pub use source::LoadError;

/// A boundary polygon was rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidBoundaryError {
  /// A polygon needs at least three vertices.
  InsufficientVertices,
  /// The map boundary must be a quadrilateral.
  VertexCount { expected: usize, found: usize },
  NonFiniteCoordinate,
}

impl std::fmt::Display for InvalidBoundaryError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      InvalidBoundaryError::InsufficientVertices => write!(f, "Insufficient vertices"),
      InvalidBoundaryError::VertexCount { expected, found } => write!(
        f,
        "Boundary must have exactly {} vertices, found {}",
        expected, found
      ),
      InvalidBoundaryError::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
    }
  }
}

impl std::error::Error for InvalidBoundaryError {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

/// Coordinate type of points and polygons.
pub trait PolygonScalar: std::fmt::Debug + TotalOrd + PartialOrd + Clone {
  /// False for NaN and infinities. Always true for integers.
  fn is_finite_coordinate(&self) -> bool;
  /// Compare the slope of `p->q` against `p->r`. `Greater` means that
  /// `p->q->r` is a counter-clockwise turn.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong:ty ) => {
    impl TotalOrd for $ty {
      fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
      }
    }

    impl PolygonScalar for $ty {
      fn is_finite_coordinate(&self) -> bool {
        true
      }

      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // Absolute difference along with its sign.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (<$ulong>::from(b.wrapping_sub(a) as $uty), true)
          } else {
            (<$ulong>::from(a.wrapping_sub(b) as $uty), false)
          }
        }
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], p[1]);
        let ux_vy_neg = ux_neg.bitxor(vy_neg) && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], p[0]);
        let uy_vx_neg = uy_neg.bitxor(vx_neg) && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }
    }
  };
}

fn orient2d_ordering(p: [f64; 2], q: [f64; 2], r: [f64; 2]) -> Ordering {
  let orient = geometry_predicates::predicates::orient2d(p, q, r);
  if orient > 0.0 {
    Ordering::Greater
  } else if orient < 0.0 {
    Ordering::Less
  } else {
    Ordering::Equal
  }
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl PolygonScalar for $ty {
        fn is_finite_coordinate(&self) -> bool {
          self.is_finite()
        }

        // Exact orientation through the adaptive predicates of `geometry_predicates`.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          orient2d_ordering(
            [p[0].into(), p[1].into()],
            [q[0].into(), q[1].into()],
            [r[0].into(), r[1].into()],
          )
        }
      }
    )*
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
floating_precision!(f64);

#[cfg(test)]
pub mod testing;
