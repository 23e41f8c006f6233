use serde::Serialize;
use std::fmt;

use super::types::{TriCfg, Triangle, TriangleKind};
use super::util::round_to;

/// All derived values of a triangle, rounded for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub kind: TriangleKind,
    pub sides: [f64; 3],
    pub area: f64,
    pub perimeter: f64,
    pub semiperimeter: f64,
    pub angles: [f64; 3],
    pub heights: [f64; 3],
    pub incircle_radius: f64,
    pub circumcircle_area: f64,
}

impl Triangle {
    /// Evaluate every property and round to `cfg.precision` decimals.
    pub fn report(&self, cfg: &TriCfg) -> Report {
        let p = cfg.precision;
        let r = |x: f64| round_to(x, p);
        let angles = self.angles();
        let heights = self.heights();
        Report {
            kind: self.classify_eps(cfg.eps_equal),
            sides: self.sides(),
            area: r(self.area()),
            perimeter: r(self.perimeter()),
            semiperimeter: r(self.semiperimeter()),
            angles: [r(angles.x), r(angles.y), r(angles.z)],
            heights: [r(heights.x), r(heights.y), r(heights.z)],
            incircle_radius: r(self.incircle_radius()),
            circumcircle_area: r(self.circumcircle_area()),
        }
    }
}

struct Triple<'a>(&'a [f64; 3]);

impl fmt::Display for Triple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "[{}, {}, {}]", x, y, z)
    }
}

/// Console block printed after the prompts (starts with a blank line).
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Type: {}", self.kind)?;
        writeln!(f, "Area: {}", self.area)?;
        writeln!(f, "Perimeter: {}", self.perimeter)?;
        writeln!(f, "Semiperimeter: {}", self.semiperimeter)?;
        writeln!(f, "Angles (in order): {}", Triple(&self.angles))?;
        writeln!(f, "Heights (in order): {}", Triple(&self.heights))?;
        writeln!(f, "Incircle Radius: {}", self.incircle_radius)?;
        write!(f, "Circumcircle Area: {}", self.circumcircle_area)
    }
}
