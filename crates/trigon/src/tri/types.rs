//! Core triangle types and tolerances.
//!
//! - `TriCfg`: classification tolerance and display precision.
//! - `Triangle`: validated side triple (strict triangle inequality).
//! - `TriangleKind`: equilateral / isosceles / scalene.
//! - `InvalidTriangle`: why construction was rejected.

use serde::Serialize;
use std::fmt;

/// Tolerances and display precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriCfg {
    /// Relative tolerance for side equality, scaled by the longest side. `0.0` is exact.
    pub eps_equal: f64,
    /// Decimals kept by `Triangle::report`.
    pub precision: u32,
}

impl Default for TriCfg {
    fn default() -> Self {
        Self {
            eps_equal: 1e-12,
            precision: 4,
        }
    }
}

/// Classification by side equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TriangleKind {
    /// All three sides equal.
    Equilateral,
    /// Exactly two sides equal.
    Isosceles,
    /// All sides distinct.
    Scalene,
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TriangleKind::Equilateral => "Equilateral",
            TriangleKind::Isosceles => "Isosceles",
            TriangleKind::Scalene => "Scalene",
        })
    }
}

/// Rejection reasons for `Triangle::new`. Side indexes are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidTriangle {
    /// Side is NaN or infinite.
    NonFinite { index: usize },
    /// Side is zero or negative.
    NonPositive { index: usize },
    /// Side is not strictly shorter than the sum of the other two.
    Inequality { index: usize },
}

impl fmt::Display for InvalidTriangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTriangle::NonFinite { index } => write!(f, "side {} is not finite", index),
            InvalidTriangle::NonPositive { index } => {
                write!(f, "side {} must be positive", index)
            }
            InvalidTriangle::Inequality { index } => write!(
                f,
                "side {} is not shorter than the sum of the other two (triangle inequality)",
                index
            ),
        }
    }
}

impl std::error::Error for InvalidTriangle {}

/// Triangle given by three side lengths.
///
/// Invariant: all sides are finite, positive, and `a + b > c` for every
/// permutation. Fields are private so the invariant cannot be broken after
/// construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub(super) a: f64,
    pub(super) b: f64,
    pub(super) c: f64,
}

impl Triangle {
    /// Validate and build. Fails with the first violated condition in side order.
    pub fn new(side1: f64, side2: f64, side3: f64) -> Result<Self, InvalidTriangle> {
        let sides = [side1, side2, side3];
        for (k, &s) in sides.iter().enumerate() {
            if !s.is_finite() {
                return Err(InvalidTriangle::NonFinite { index: k + 1 });
            }
            if s <= 0.0 {
                return Err(InvalidTriangle::NonPositive { index: k + 1 });
            }
        }
        for k in 0..3 {
            let others = sides[(k + 1) % 3] + sides[(k + 2) % 3];
            if others <= sides[k] {
                return Err(InvalidTriangle::Inequality { index: k + 1 });
            }
        }
        Ok(Self {
            a: side1,
            b: side2,
            c: side3,
        })
    }

    /// Same as `new` on a side array.
    #[inline]
    pub fn from_sides(sides: [f64; 3]) -> Result<Self, InvalidTriangle> {
        Self::new(sides[0], sides[1], sides[2])
    }

    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
}

impl TryFrom<[f64; 3]> for Triangle {
    type Error = InvalidTriangle;

    fn try_from(sides: [f64; 3]) -> Result<Self, Self::Error> {
        Self::from_sides(sides)
    }
}
