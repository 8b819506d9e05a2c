//! Per-component scalar functions
//!
//! Powers, roots and logarithms are computed in `f64` and cast back toward
//! zero. The cast saturates, so infinities clamp to `i32::MIN`/`i32::MAX`
//! and NaN becomes 0.

use std::f64::consts::PI;

use crate::error::{MathError, MathResult};
use crate::vec4i::round_to_int;
use crate::{Axes, Vec4i};

/// The golden ratio
pub(crate) const PHI: f64 = 1.618_033_988_749_895;

#[inline]
fn per_f64(v: Vec4i, f: impl Fn(f64) -> f64) -> Vec4i {
    v.map(|c| f(c as f64) as i32)
}

impl Vec4i {
    #[inline]
    pub fn abs(self) -> Self {
        self.map(i32::wrapping_abs)
    }

    in_place!(abs_in_place => abs());

    /// Component-wise multiplication
    #[inline]
    pub fn upscale(self, scale: Self) -> Self {
        self * scale
    }

    in_place!(upscale_in_place => upscale(scale: Self));

    /// Component-wise division; panics if a component of `scale` is zero
    #[inline]
    pub fn downscale(self, scale: Self) -> Self {
        self / scale
    }

    in_place!(downscale_in_place => downscale(scale: Self));

    // ==================== Powers and roots ====================

    /// Raise each component to the matching component of `power`
    pub fn pow(self, power: Self) -> Self {
        self.zip_map(power, |c, p| (c as f64).powf(p as f64) as i32)
    }

    pub fn powi(self, power: i32) -> Self {
        per_f64(self, |c| c.powi(power))
    }

    pub fn powf(self, power: f32) -> Self {
        self.powf64(power as f64)
    }

    pub fn powf64(self, power: f64) -> Self {
        per_f64(self, |c| c.powf(power))
    }

    in_place!(pow_in_place => pow(power: Self));
    in_place!(powi_in_place => powi(power: i32));
    in_place!(powf_in_place => powf(power: f32));
    in_place!(powf64_in_place => powf64(power: f64));

    /// Square root of each component; negative components give 0
    pub fn sqrt(self) -> Self {
        per_f64(self, f64::sqrt)
    }

    /// Cube root of each component, keeping its sign
    pub fn cbrt(self) -> Self {
        per_f64(self, f64::cbrt)
    }

    /// `n`th root of each component
    pub fn root(self, n: i32) -> Self {
        self.rootf64(n as f64)
    }

    pub fn rootf(self, n: f32) -> Self {
        self.rootf64(n as f64)
    }

    pub fn rootf64(self, n: f64) -> Self {
        per_f64(self, |c| c.powf(1.0 / n))
    }

    in_place!(sqrt_in_place => sqrt());
    in_place!(cbrt_in_place => cbrt());
    in_place!(root_in_place => root(n: i32));
    in_place!(rootf_in_place => rootf(n: f32));
    in_place!(rootf64_in_place => rootf64(n: f64));

    // ==================== Logarithms ====================

    /// Logarithm of each component in the given base
    pub fn log(self, base: i32) -> Self {
        let base = base as f64;
        per_f64(self, |c| c.log(base))
    }

    /// Natural logarithm
    pub fn ln(self) -> Self {
        per_f64(self, f64::ln)
    }

    pub fn log_pi(self) -> Self {
        per_f64(self, |c| c.log(PI))
    }

    pub fn log_phi(self) -> Self {
        per_f64(self, |c| c.log(PHI))
    }

    pub fn log10(self) -> Self {
        per_f64(self, f64::log10)
    }

    pub fn log2(self) -> Self {
        per_f64(self, f64::log2)
    }

    in_place!(log_in_place => log(base: i32));
    in_place!(ln_in_place => ln());
    in_place!(log_pi_in_place => log_pi());
    in_place!(log_phi_in_place => log_phi());
    in_place!(log10_in_place => log10());
    in_place!(log2_in_place => log2());

    /// Factorial of each component
    ///
    /// Components of 0 or 1 give 1. The product wraps on overflow.
    /// Fails with [`MathError::InvalidOperation`] if any component is negative.
    pub fn factorial(self) -> MathResult<Self> {
        if self.contains_less_than(0) {
            return Err(MathError::invalid_operation(
                "factorial of a vector with negative components",
            ));
        }
        Ok(self.map(|c| (2..=c).fold(1i32, i32::wrapping_mul)))
    }

    /// Mutating [`factorial`](Self::factorial); the receiver is left untouched on error
    pub fn factorial_in_place(&mut self) -> MathResult<Self> {
        *self = self.factorial()?;
        Ok(*self)
    }

    // ==================== Extrema ====================

    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, i32::min)
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, i32::max)
    }

    /// Component-wise integer average, truncated toward zero
    #[inline]
    pub fn mid(self, other: Self) -> Self {
        self.zip_map(other, |a, b| ((a as i64 + b as i64) / 2) as i32)
    }

    /// Each component divided by 4, rounded to nearest (ties to even)
    pub fn center(self) -> Self {
        self.map(|c| round_to_int(c as f32 / 4.0))
    }

    /// [`center`](Self::center) with the sign flipped on the selected axes
    pub fn mirr_center(self, mirrored: Axes) -> Self {
        let factors = Vec4i::from(mirrored.sign_factors());
        self.center() * factors
    }

    in_place!(center_in_place => center());
    in_place!(mirr_center_in_place => mirr_center(mirrored: Axes));

    // ==================== Clamping ====================

    /// Clamp each component between the matching components of `min` and `max`
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            clamp_i32(self.x, min.x, max.x),
            clamp_i32(self.y, min.y, max.y),
            clamp_i32(self.z, min.z, max.z),
            clamp_i32(self.w, min.w, max.w),
        )
    }

    /// Clamp every component to `[min, max]`
    pub fn clamp_scalar(self, min: i32, max: i32) -> Self {
        self.map(|c| clamp_i32(c, min, max))
    }

    /// Clamp every component to `[0, 1]`
    pub fn clamp01(self) -> Self {
        self.clamp_scalar(0, 1)
    }

    /// Clamp every component to `[-1, 1]`
    pub fn clamp_unit(self) -> Self {
        self.clamp_scalar(-1, 1)
    }

    in_place!(clamp_in_place => clamp(min: Self, max: Self));
    in_place!(clamp_scalar_in_place => clamp_scalar(min: i32, max: i32));
    in_place!(clamp01_in_place => clamp01());
    in_place!(clamp_unit_in_place => clamp_unit());

    // ==================== Sign ====================

    /// -1, 0 or 1 per component
    #[inline]
    pub fn sign(self) -> Self {
        self.map(i32::signum)
    }

    /// Like [`sign`](Self::sign) but zero maps to 1
    #[inline]
    pub fn sign_positive_zero(self) -> Self {
        self.map(|c| if c < 0 { -1 } else { 1 })
    }

    /// Like [`sign`](Self::sign) but zero maps to -1
    #[inline]
    pub fn sign_negative_zero(self) -> Self {
        self.map(|c| if c > 0 { 1 } else { -1 })
    }

    in_place!(sign_in_place => sign());
    in_place!(sign_positive_zero_in_place => sign_positive_zero());
    in_place!(sign_negative_zero_in_place => sign_negative_zero());
}

/// Clamp where `min` wins when `min > max` (never panics)
#[inline]
fn clamp_i32(v: i32, min: i32, max: i32) -> i32 {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}
