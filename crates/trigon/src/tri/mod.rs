//! Triangles given by three side lengths.
//!
//! Purpose
//! - `Triangle` is an immutable value that only exists if the strict triangle
//!   inequality holds for all three pairings.
//! - Derived quantities are closed-form: Heron area, law-of-cosines angles,
//!   altitudes, incircle radius, circumcircle area.
//!
//! Conventions
//! - Sides are indexed 1..=3 in messages and in `InvalidTriangle`.
//! - Per-side triples (`angles`, `heights`) follow side order; the angle at
//!   index k is the one opposite side k.
//!
//! References
//! - Code cross-refs: `Triangle`, `TriCfg`, `Report`, `rand::draw_triangle`

mod props;
pub mod rand;
mod report;
mod types;
mod util;

pub use report::Report;
pub use types::{InvalidTriangle, TriCfg, Triangle, TriangleKind};
pub use util::{round_to, MAX_DECIMALS};
