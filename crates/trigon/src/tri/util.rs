/// Largest decimal precision `round_to` honours; more digits than this exceed f64 resolution.
pub const MAX_DECIMALS: u32 = 15;

/// Round `x` to `decimals` places (half away from zero). Non-finite values pass through.
///
/// `decimals` above `MAX_DECIMALS` round like `MAX_DECIMALS`.
pub fn round_to(x: f64, decimals: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    let r = scaled.round() / scale;
    // avoid printing "-0"
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Power of two `2^floor(log2 m)` for finite positive `m`; dividing by it is exact.
#[inline]
pub(super) fn pow2_scale(m: f64) -> f64 {
    // 2^-1022 is the smallest power `powi` reaches without its reciprocal overflowing
    let e = (m.log2().floor() as i32).clamp(-1022, 1023);
    2f64.powi(e)
}

/// `|x - y| <= eps * scale`; `eps == 0` means exact equality.
#[inline]
pub(super) fn approx_eq(x: f64, y: f64, eps: f64, scale: f64) -> bool {
    x == y || (x - y).abs() <= eps * scale
}

/// Sides sorted so that `s[0] >= s[1] >= s[2]`.
#[inline]
pub(super) fn sorted_desc(mut s: [f64; 3]) -> [f64; 3] {
    s.sort_by(|x, y| y.partial_cmp(x).unwrap_or(std::cmp::Ordering::Equal));
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_four_places() {
        assert_eq!(round_to(1.234_56, 4), 1.2346);
        assert_eq!(round_to(2.0, 4), 2.0);
        assert_eq!(round_to(-0.000_01, 4), 0.0);
        assert!(round_to(f64::NAN, 4).is_nan());
        assert_eq!(round_to(f64::INFINITY, 4), f64::INFINITY);
    }

    #[test]
    fn pow2_scale_brackets_the_input() {
        assert_eq!(pow2_scale(5.0), 4.0);
        assert_eq!(pow2_scale(1.0), 1.0);
        assert_eq!(pow2_scale(0.3), 0.25);
        for m in [1e-300, 1e-100, 1e100, 1e160, f64::MAX] {
            let r = m / pow2_scale(m);
            assert!(r >= 0.5 && r < 2.0, "{m}: {r}");
        }
        // subnormal inputs scale by the smallest normal power instead
        assert_eq!(pow2_scale(1e-320), 2f64.powi(-1022));
    }

    #[test]
    fn precision_is_capped() {
        assert_eq!(round_to(0.1, 40), round_to(0.1, MAX_DECIMALS));
    }

    #[test]
    fn sorted_and_equal() {
        assert_eq!(sorted_desc([1.0, 3.0, 2.0]), [3.0, 2.0, 1.0]);
        assert!(approx_eq(1.0, 1.0 + 1e-14, 1e-12, 1.0));
        assert!(!approx_eq(1.0, 1.0 + 1e-14, 0.0, 1.0));
    }
}
