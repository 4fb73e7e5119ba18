//! Mathematical utilities for the radiation calculations.

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// π/2, the zenith angle of the horizon
pub const FRAC_PI_2: f64 = core::f64::consts::FRAC_PI_2;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps a value into the half-open range [0, period).
pub fn wrap_0_to(value: f64, period: f64) -> f64 {
    let wrapped = value % period;
    if wrapped < 0.0 {
        // -1e-17 % 24 + 24 rounds up to 24 exactly
        let shifted = wrapped + period;
        if shifted >= period { 0.0 } else { shifted }
    } else {
        wrapped
    }
}

/// Wraps an angle in degrees into [-180, 180).
pub fn normalize_degrees_signed(degrees: f64) -> f64 {
    wrap_0_to(degrees + 180.0, 360.0) - 180.0
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes e^x using the appropriate function for the compilation target.
#[inline]
pub fn exp(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.exp();

    #[cfg(not(feature = "std"))]
    return libm::exp(x);
}

/// Computes x^y for a real exponent.
#[inline]
pub fn powf(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.powf(y);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, y);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Arccosine with the argument clamped to [-1, 1] first.
///
/// Rounding can push `cos` products slightly past ±1; those are silently pulled back.
#[inline]
pub fn acos_clamped(x: f64) -> f64 {
    acos(x.clamp(-1.0, 1.0))
}
