//! Triangle validation and closed-form properties.
//!
//! Layout
//! - `tri`: the `Triangle` value object, classification, derived quantities,
//!   and the rounded `Report` used by the console driver.
//! - `tri::rand`: seeded sampler of valid triangles (tests, benches, `sample`).
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod tri;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: nalgebra::Vector2<f64>, b: nalgebra::Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
