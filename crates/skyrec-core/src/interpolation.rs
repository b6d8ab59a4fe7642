//! Numeric interpolation functions
//!
//! Linear and cubic Hermite blends, plus circular variants that resolve the
//! shortest angular path before blending:
//! - [`hermite180`] for quantities in a ±180 range (bank, longitude)
//! - [`hermite360`] for quantities in a [0, 360) range (compass heading)
//!
//! Also refer to: <http://paulbourke.net/miscellaneous/interpolation/>

/// Linearly interpolates between `p1` and `p2`.
///
/// `mu` is the interpolation factor in `[0.0, 1.0]`.
pub fn linear(p1: f64, p2: f64, mu: f64) -> f64 {
    p1 + mu * (p2 - p1)
}

/// Interpolates between `y1` and `y2` using cubic Hermite interpolation,
/// with `y0` and `y3` as tangent support values.
///
/// `mu` is the interpolation factor in `[0.0, 1.0]`. A `tension` of 0 yields
/// Catmull-Rom behavior; 1 is high, -1 is low.
pub fn hermite(y0: f64, y1: f64, y2: f64, y3: f64, mu: f64, tension: f64) -> f64 {
    let mu2 = mu * mu;
    let mu3 = mu2 * mu;

    let m0 = (y1 - y0) * (1.0 - tension) / 2.0 + (y2 - y1) * (1.0 - tension) / 2.0;
    let m1 = (y2 - y1) * (1.0 - tension) / 2.0 + (y3 - y2) * (1.0 - tension) / 2.0;

    let a0 = 2.0 * mu3 - 3.0 * mu2 + 1.0;
    let a1 = mu3 - 2.0 * mu2 + mu;
    let a2 = mu3 - mu2;
    let a3 = -2.0 * mu3 + 3.0 * mu2;

    a0 * y1 + a1 * m0 + a2 * m1 + a3 * y2
}

/// Normalizes `y1` against the previous value `y0`, both from a
/// "modulo 180" domain (values in `[-180, 180)`).
///
/// The normalization removes the modulo operation and extends the domain
/// beyond the ±180 boundaries, so a series like `165, 175, -175, -165`
/// becomes `165, 175, 185, 195` and is then suitable for interpolation.
pub fn normalize_180(y0: f64, y1: f64) -> f64 {
    if (y1 > 0.0) != (y0 > 0.0) && (y1 - y0).abs() > 180.0 {
        y0.signum() * (360.0 - y1.abs())
    } else {
        y1
    }
}

/// Interpolates circular values in a `[-180, 180)` range using cubic
/// Hermite interpolation.
///
/// A transition like `179 -> -179` is treated as a 2-degree step, not a
/// 358-degree one.
pub fn hermite180(y0: f64, y1: f64, y2: f64, y3: f64, mu: f64, tension: f64) -> f64 {
    // Unwrap the support values into a continuous domain first
    let y1n = normalize_180(y0, y1);
    let y2n = normalize_180(y1n, y2);
    let y3n = normalize_180(y2n, y3);

    let v = hermite(y0, y1n, y2n, y3n, mu, tension);
    if v < -180.0 {
        v + 360.0
    } else if v >= 180.0 {
        v - 360.0
    } else {
        v
    }
}

/// Interpolates circular values in a `[0, 360)` range using cubic Hermite
/// interpolation.
pub fn hermite360(y0: f64, y1: f64, y2: f64, y3: f64, mu: f64, tension: f64) -> f64 {
    hermite180(
        y0 - 180.0,
        y1 - 180.0,
        y2 - 180.0,
        y3 - 180.0,
        mu,
        tension,
    ) + 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        assert_eq!(linear(2.0, 4.0, 0.0), 2.0);
        assert_eq!(linear(2.0, 4.0, 1.0), 4.0);
        assert_eq!(linear(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn test_hermite_identity_at_endpoints() {
        let (y0, y1, y2, y3) = (0.0, 1.0, 2.0, 3.0);
        assert!((hermite(y0, y1, y2, y3, 0.0, 0.0) - y1).abs() < 1e-12);
        assert!((hermite(y0, y1, y2, y3, 1.0, 0.0) - y2).abs() < 1e-12);
    }

    #[test]
    fn test_hermite_is_linear_on_linear_data() {
        // Catmull-Rom reproduces straight lines exactly
        let v = hermite(0.0, 10.0, 20.0, 30.0, 0.25, 0.0);
        assert!((v - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_180() {
        assert_eq!(normalize_180(10.0, 20.0), 20.0);
        assert_eq!(normalize_180(160.0, 170.0), 170.0);
        assert_eq!(normalize_180(170.0, -20.0), 340.0);
        assert_eq!(normalize_180(-20.0, -10.0), -10.0);
        assert_eq!(normalize_180(-170.0, 20.0), -340.0);
    }

    #[test]
    fn test_hermite180_across_meridian() {
        // 179 -> -179 is a 2-degree step across the boundary
        let v = hermite180(178.0, 179.0, -179.0, -178.0, 0.5, 0.0);
        // Midway is 180, wrapped into [-180, 180)
        assert!((v - (-180.0)).abs() < 1e-9 || (v - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_hermite360_across_north() {
        let v = hermite360(340.0, 350.0, 10.0, 20.0, 0.5, 0.0);
        // Midway between 350 and 10 is due north
        assert!((v - 0.0).abs() < 1e-9 || (v - 360.0).abs() < 1e-9);
    }
}
