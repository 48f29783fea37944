// Interpolation utilities - scalar curve evaluation
//
// Collection of stateless interpolation functions over scalars. Callers
// wanting vector interpolation apply these per component.
//
// Closed forms follow http://paulbourke.net/miscellaneous/interpolation/

/// Linear interpolation between `y1` and `y2` at parameter `mu`.
///
/// `mu` is nominally in [0,1]; values outside that range are accepted
/// and produce linear extrapolation beyond the endpoints. No clamping.
///
/// # Example
/// ```
/// use dead_reckoning::interpolation::linear_interpolate;
/// assert_eq!(linear_interpolate(0.0, 10.0, 0.5), 5.0);
/// ```
#[inline]
pub fn linear_interpolate(y1: f64, y2: f64, mu: f64) -> f64 {
    y1 * (1.0 - mu) + y2 * mu
}

/// Cubic interpolation between `y1` and `y2`, with `y0` and `y3` as the
/// outer control points flanking the segment.
///
/// `y0` and `y3` may be synthetic values derived from the slope at each
/// endpoint (e.g. velocity-based extrapolation). `mu` outside [0,1]
/// extrapolates the curve.
pub fn cubic_interpolate(y0: f64, y1: f64, y2: f64, y3: f64, mu: f64) -> f64 {
    let mu2 = mu * mu;
    let a0 = y3 - y2 - y0 + y1;
    let a1 = y0 - y1 - a0;
    let a2 = y2 - y0;
    let a3 = y1;

    a0 * mu * mu2 + a1 * mu2 + a2 * mu + a3
}

/// Catmull-Rom spline interpolation between `y1` and `y2`, with `y0`
/// and `y3` as the outer control points.
///
/// Same control-point layout as [`cubic_interpolate`] but with the
/// Catmull-Rom basis, which gives a smoother tangent across segments.
pub fn catmull_rom_spline_interpolate(y0: f64, y1: f64, y2: f64, y3: f64, mu: f64) -> f64 {
    let mu2 = mu * mu;
    let a0 = -0.5 * y0 + 1.5 * y1 - 1.5 * y2 + 0.5 * y3;
    let a1 = y0 - 2.5 * y1 + 2.0 * y2 - 0.5 * y3;
    let a2 = -0.5 * y0 + 0.5 * y2;
    let a3 = y1;

    a0 * mu * mu2 + a1 * mu2 + a2 * mu + a3
}

/// Hermite interpolation between `y1` and `y2` with outer points `y0`
/// and `y3` and tangent shaping controls.
///
/// Tension: 1 is tight, 0 normal, -1 loose.
/// Bias: 0 is even, positive skews the tangent toward the first
/// segment, negative toward the second.
pub fn hermite_interpolate(
    y0: f64,
    y1: f64,
    y2: f64,
    y3: f64,
    mu: f64,
    tension: f64,
    bias: f64,
) -> f64 {
    let mu2 = mu * mu;
    let mu3 = mu2 * mu;

    let mut m0 = (y1 - y0) * (1.0 + bias) * (1.0 - tension) / 2.0;
    m0 += (y2 - y1) * (1.0 - bias) * (1.0 - tension) / 2.0;
    let mut m1 = (y2 - y1) * (1.0 + bias) * (1.0 - tension) / 2.0;
    m1 += (y3 - y2) * (1.0 - bias) * (1.0 - tension) / 2.0;

    let a0 = 2.0 * mu3 - 3.0 * mu2 + 1.0;
    let a1 = mu3 - 2.0 * mu2 + mu;
    let a2 = mu3 - mu2;
    let a3 = -2.0 * mu3 + 3.0 * mu2;

    a0 * y1 + a1 * m0 + a2 * m1 + a3 * y2
}
