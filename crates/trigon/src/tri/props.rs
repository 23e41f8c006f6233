//! Derived quantities of a validated `Triangle`.
//!
//! All formulas are closed-form in the side lengths. They are evaluated on
//! sides divided by a power of two near the longest side (exact, so results
//! for moderate inputs are unchanged) and scaled back at the end. Squares of
//! the scaled sides stay below 4, so no intermediate term overflows and only
//! sides below ~1e-154 of the longest one lose their squares to underflow.

use nalgebra::{Vector2, Vector3};
use std::f64::consts::PI;

use super::types::{TriCfg, Triangle, TriangleKind};
use super::util::{approx_eq, pow2_scale, sorted_desc};

/// Sides divided by `scale`, with the Heron area of that scaled triangle.
struct Scaled {
    scale: f64,
    sides: [f64; 3],
    area: f64,
}

impl Scaled {
    fn of(t: &Triangle) -> Self {
        let scale = pow2_scale(t.a.max(t.b).max(t.c));
        let sides = [t.a / scale, t.b / scale, t.c / scale];
        Self {
            scale,
            sides,
            area: heron(sides),
        }
    }
}

/// Heron's formula `sqrt(s(s-a)(s-b)(s-c))`, evaluated on sides sorted
/// descending as `¼·sqrt((a+(b+c))(c-(a-b))(c+(a-b))(a+(b-c)))`.
/// The parenthesization must stay as written. The two factors that vanish
/// for needle triangles get separate roots so a tiny side cannot underflow
/// their product.
fn heron(sides: [f64; 3]) -> f64 {
    let [a, b, c] = sorted_desc(sides);
    let wide = (a + (b + c)) * (a + (b - c));
    let near = (c - (a - b)).max(0.0).sqrt() * (c + (a - b)).max(0.0).sqrt();
    0.25 * wide.sqrt() * near
}

impl Triangle {
    /// Classification with the default tolerance.
    pub fn classify(&self) -> TriangleKind {
        self.classify_eps(TriCfg::default().eps_equal)
    }

    /// Classification with relative side-equality tolerance `eps`.
    pub fn classify_eps(&self, eps: f64) -> TriangleKind {
        let scale = self.a.max(self.b).max(self.c);
        let ab = approx_eq(self.a, self.b, eps, scale);
        let bc = approx_eq(self.b, self.c, eps, scale);
        let ac = approx_eq(self.a, self.c, eps, scale);
        if ab && bc {
            TriangleKind::Equilateral
        } else if ab || bc || ac {
            TriangleKind::Isosceles
        } else {
            TriangleKind::Scalene
        }
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    #[inline]
    pub fn semiperimeter(&self) -> f64 {
        self.perimeter() / 2.0
    }

    /// Heron area. Infinite only when the true area exceeds `f64::MAX`.
    pub fn area(&self) -> f64 {
        let s = Scaled::of(self);
        s.area * s.scale * s.scale
    }

    /// Interior angles in degrees; entry k is opposite side k.
    ///
    /// Law of cosines with the sine taken from the area:
    /// `tan X = 4·area / (y² + z² − x²)`, so `atan2` covers the whole
    /// `[0°, 180°]` range without a domain clamp.
    pub fn angles(&self) -> Vector3<f64> {
        let s = Scaled::of(self);
        let [a, b, c] = s.sides;
        let four_area = 4.0 * s.area;
        let opposite = |x: f64, y: f64, z: f64| -> f64 {
            four_area.atan2(y * y + z * z - x * x).to_degrees()
        };
        Vector3::new(opposite(a, b, c), opposite(b, a, c), opposite(c, a, b))
    }

    /// Altitudes `2·area/side`; entry k is the height onto side k.
    pub fn heights(&self) -> Vector3<f64> {
        let s = Scaled::of(self);
        let h = |side: f64| 2.0 * s.area / side * s.scale;
        Vector3::new(h(s.sides[0]), h(s.sides[1]), h(s.sides[2]))
    }

    /// `area / semiperimeter`.
    pub fn incircle_radius(&self) -> f64 {
        let s = Scaled::of(self);
        let [a, b, c] = s.sides;
        s.area / ((a + b + c) / 2.0) * s.scale
    }

    /// `abc / (4·area)`.
    pub fn circumradius(&self) -> f64 {
        let s = Scaled::of(self);
        let [a, b, c] = s.sides;
        (a * b * c) / (4.0 * s.area) * s.scale
    }

    #[inline]
    pub fn circumcircle_area(&self) -> f64 {
        let r = self.circumradius();
        PI * r * r
    }

    /// Planar embedding `[P1, P2, P3]` with vertex k opposite side k.
    ///
    /// `P1 = (0,0)`, `P2 = (side3, 0)`, `P3` in the upper half-plane with
    /// `|P1P3| = side2` and `|P2P3| = side1`.
    pub fn vertices(&self) -> [Vector2<f64>; 3] {
        let s = Scaled::of(self);
        let [a, b, c] = s.sides;
        let x = (b * b + c * c - a * a) / (2.0 * c) * s.scale;
        // y is the altitude onto side3, consistent with `heights`.
        let y = 2.0 * s.area / c * s.scale;
        [Vector2::zeros(), Vector2::new(self.c, 0.0), Vector2::new(x, y)]
    }
}
