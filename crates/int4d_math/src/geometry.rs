//! Geometric operations on [`Vec4i`]
//!
//! Products (`dot`, `cross` and friends) stay in wrapping `i32` arithmetic.
//! Lengths and angles are measured in floating point, with the squared sum
//! accumulated in `i128` so large components do not overflow first.
//!
//! Whenever a float result has to become a vector again it is rounded to
//! the nearest integer (ties to even) for normalisation, interpolation and
//! magnitude clamping, and truncated toward zero everywhere else.

use std::f64::consts::{E, PI};

use crate::error::{MathError, MathResult};
use crate::scalar::PHI;
use crate::vec4i::round_to_int;
use crate::Vec4i;

/// Degrees per radian, at `f32` precision
const RAD_TO_DEG: f32 = 57.29578;

/// Below this `|a|·|b|` the angle between two vectors is reported as 0
const ANGLE_EPSILON: f64 = 1e-15;

#[inline]
fn wrapping_dot4(a: [i32; 4], b: [i32; 4]) -> i32 {
    a.iter()
        .zip(b.iter())
        .fold(0i32, |acc, (&p, &q)| acc.wrapping_add(p.wrapping_mul(q)))
}

#[inline]
fn sqr_len_wide(v: [i128; 4]) -> i128 {
    v.iter().map(|c| c * c).sum()
}

/// `p0 / p1 / p2 / p3`, or `None` if any step divides by zero or overflows
#[inline]
fn chained_quotient(p0: i32, p1: i32, p2: i32, p3: i32) -> Option<i32> {
    p0.checked_div(p1)?.checked_div(p2)?.checked_div(p3)
}

impl Vec4i {
    // ==================== Products ====================

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> i32 {
        wrapping_dot4(self.to_array(), other.to_array())
    }

    /// Dot product with the y, z and w contributions negated
    #[inline]
    pub fn antidot(self, other: Self) -> i32 {
        let xx = self.x.wrapping_mul(other.x);
        xx.wrapping_sub(self.y.wrapping_mul(other.y))
            .wrapping_sub(self.z.wrapping_mul(other.z))
            .wrapping_sub(self.w.wrapping_mul(other.w))
    }

    /// 4D cross analogue built from the cyclic component pairs
    /// (yz, zw, wx, xy)
    ///
    /// This is not the 3D cross product: it is bilinear and antisymmetric
    /// but the result is not generally orthogonal to either input.
    pub fn cross(self, other: Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.y.wrapping_mul(b.z).wrapping_sub(a.z.wrapping_mul(b.y)),
            a.z.wrapping_mul(b.w).wrapping_sub(a.w.wrapping_mul(b.z)),
            a.w.wrapping_mul(b.x).wrapping_sub(a.x.wrapping_mul(b.w)),
            a.x.wrapping_mul(b.y).wrapping_sub(a.y.wrapping_mul(b.x)),
        )
    }

    /// [`cross`](Self::cross) with each difference replaced by a sum
    pub fn anticross(self, other: Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.y.wrapping_mul(b.z).wrapping_add(a.z.wrapping_mul(b.y)),
            a.z.wrapping_mul(b.w).wrapping_add(a.w.wrapping_mul(b.z)),
            a.w.wrapping_mul(b.x).wrapping_add(a.x.wrapping_mul(b.w)),
            a.x.wrapping_mul(b.y).wrapping_add(a.y.wrapping_mul(b.x)),
        )
    }

    /// Permuted products of the components, one permutation per output slot
    ///
    /// Slot order: identity, (xy)(zw), (xz)(yw), (xw)(yz). Each slot sums the
    /// four products of `self` with the permuted `other`.
    pub fn sum(self, other: Self) -> Self {
        self.permuted_products(other, |acc, p| acc.wrapping_add(p), 0)
    }

    /// Like [`sum`](Self::sum) but the first product is reduced by the other three
    pub fn difference(self, other: Self) -> Self {
        let [p0, p1, p2, p3] = self.permutation_table(other);
        let diff = |r: [i32; 4]| {
            r[0].wrapping_sub(r[1]).wrapping_sub(r[2]).wrapping_sub(r[3])
        };
        Self::new(diff(p0), diff(p1), diff(p2), diff(p3))
    }

    /// Like [`sum`](Self::sum) but the four products are multiplied together
    pub fn product(self, other: Self) -> Self {
        self.permuted_products(other, |acc, p| acc.wrapping_mul(p), 1)
    }

    /// Like [`difference`](Self::difference) but with chained division
    ///
    /// `None` when any divisor in the chain is zero.
    pub fn quotient(self, other: Self) -> Option<Self> {
        let [p0, p1, p2, p3] = self.permutation_table(other);
        let q = |r: [i32; 4]| chained_quotient(r[0], r[1], r[2], r[3]);
        Some(Self::new(q(p0)?, q(p1)?, q(p2)?, q(p3)?))
    }

    fn permutation_table(self, b: Self) -> [[i32; 4]; 4] {
        let a = self;
        let m = i32::wrapping_mul;
        [
            [m(a.x, b.x), m(a.y, b.y), m(a.z, b.z), m(a.w, b.w)],
            [m(a.x, b.y), m(a.y, b.x), m(a.z, b.w), m(a.w, b.z)],
            [m(a.x, b.z), m(a.y, b.w), m(a.z, b.x), m(a.w, b.y)],
            [m(a.x, b.w), m(a.y, b.z), m(a.z, b.y), m(a.w, b.x)],
        ]
    }

    fn permuted_products(self, other: Self, combine: impl Fn(i32, i32) -> i32, init: i32) -> Self {
        let rows = self.permutation_table(other);
        let reduce = |r: [i32; 4]| r.iter().fold(init, |acc, &p| combine(acc, p));
        Self::new(reduce(rows[0]), reduce(rows[1]), reduce(rows[2]), reduce(rows[3]))
    }

    // ==================== Magnitudes ====================

    fn sqr_len(self) -> i128 {
        sqr_len_wide(self.to_array().map(i128::from))
    }

    /// Squared length
    #[inline]
    pub fn sqr_magnitude(self) -> f64 {
        self.sqr_len() as f64
    }

    /// Length (magnitude)
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.sqr_magnitude().sqrt()
    }

    /// Distance from the zero vector; the same value as [`magnitude`](Self::magnitude)
    #[inline]
    pub fn distance_from_zero(self) -> f64 {
        self.magnitude()
    }

    /// Magnitude cubed
    pub fn cbc_magnitude(self) -> f64 {
        self.pow_magnitude(3.0)
    }

    /// Magnitude raised to e
    pub fn nat_magnitude(self) -> f64 {
        self.pow_magnitude(E)
    }

    /// Magnitude raised to π
    pub fn pi_magnitude(self) -> f64 {
        self.pow_magnitude(PI)
    }

    /// Magnitude raised to the golden ratio
    pub fn phi_magnitude(self) -> f64 {
        self.pow_magnitude(PHI)
    }

    /// Magnitude raised to `power`
    pub fn pow_magnitude(self, power: f64) -> f64 {
        self.magnitude().powf(power)
    }

    /// `m^m` where `m` is the magnitude
    pub fn exp_magnitude(self) -> f64 {
        self_power(self.magnitude())
    }

    pub fn exp_sqr_magnitude(self) -> f64 {
        self_power(self.sqr_magnitude())
    }

    pub fn exp_cbc_magnitude(self) -> f64 {
        self_power(self.cbc_magnitude())
    }

    pub fn exp_nat_magnitude(self) -> f64 {
        self_power(self.nat_magnitude())
    }

    pub fn exp_pi_magnitude(self) -> f64 {
        self_power(self.pi_magnitude())
    }

    pub fn exp_phi_magnitude(self) -> f64 {
        self_power(self.phi_magnitude())
    }

    pub fn exp_pow_magnitude(self, power: f64) -> f64 {
        self_power(self.pow_magnitude(power))
    }

    // ==================== Normalisation ====================

    /// Each component divided by the magnitude and rounded to nearest
    ///
    /// The zero vector is returned unchanged.
    pub fn normalized(self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            let inv = 1.0 / mag;
            self.map(|c| round_to_int((c as f64 * inv) as f32))
        } else {
            self
        }
    }

    in_place!(normalize => normalized());

    /// Rescale so the magnitude does not exceed `max_length`
    ///
    /// Vectors already within the bound are returned unchanged.
    pub fn clamp_magnitude(self, max_length: i32) -> Self {
        let max = max_length as i128;
        if self.sqr_len() > max * max {
            let mag = self.magnitude();
            let scale = max_length as f64;
            self.map(|c| round_to_int((c as f64 / mag * scale) as f32))
        } else {
            self
        }
    }

    in_place!(clamp_magnitude_in_place => clamp_magnitude(max_length: i32));

    /// Gram-Schmidt on two vectors with integer normalisation
    ///
    /// Returns the normalised normal and the normalised tangent with the
    /// normal's share removed.
    pub fn ortho_normalize2(normal: Self, tangent: Self) -> (Self, Self) {
        let n = normal.normalized();
        let t = (tangent - n * n.dot(tangent)).normalized();
        (n, t)
    }

    /// Three-vector variant of [`ortho_normalize2`](Self::ortho_normalize2)
    pub fn ortho_normalize3(normal: Self, tangent: Self, binormal: Self) -> (Self, Self, Self) {
        let (n, t) = Self::ortho_normalize2(normal, tangent);
        let b = (binormal - n * n.dot(binormal) - t * t.dot(binormal)).normalized();
        (n, t, b)
    }

    // ==================== Reflection and projection ====================

    /// Reflect off the plane defined by `normal`: `self - 2·dot(normal, self)·normal`
    pub fn reflect(self, normal: Self) -> Self {
        let factor = normal.dot(self).wrapping_mul(-2);
        normal * factor + self
    }

    /// Projection onto `on_normal`, or zero if `on_normal` is the zero vector
    pub fn project(self, on_normal: Self) -> Self {
        let denom = on_normal.dot(on_normal);
        if denom < 1 {
            return Self::ZERO;
        }
        let num = self.dot(on_normal);
        on_normal.map(|c| c.wrapping_mul(num) / denom)
    }

    /// Projection onto the plane with the given normal, or zero if the
    /// normal is the zero vector
    pub fn project_on_plane(self, plane_normal: Self) -> Self {
        let denom = plane_normal.dot(plane_normal);
        if denom < 1 {
            return Self::ZERO;
        }
        let num = self.dot(plane_normal);
        self - plane_normal.map(|c| c.wrapping_mul(num) / denom)
    }

    in_place!(reflect_in_place => reflect(normal: Self));
    in_place!(project_in_place => project(on_normal: Self));
    in_place!(project_on_plane_in_place => project_on_plane(plane_normal: Self));

    // ==================== Angles ====================

    /// Unsigned angle in degrees
    pub fn angle(self, to: Self) -> f32 {
        self.rad_angle(to) * RAD_TO_DEG
    }

    /// Unsigned angle in radians
    pub fn rad_angle(self, to: Self) -> f32 {
        let denom = (self.sqr_magnitude() * to.sqr_magnitude()).sqrt();
        if denom < ANGLE_EPSILON {
            return 0.0;
        }
        let cos = (self.dot(to) as f64 / denom).clamp(-1.0, 1.0);
        cos.acos() as f32
    }

    /// Angle in degrees, negative when `dot(axis, cross(self, to)) < 0`
    pub fn signed_angle(self, to: Self, axis: Self) -> f32 {
        self.angle(to) * self.winding_sign(to, axis)
    }

    /// Angle in radians, negative when `dot(axis, cross(self, to)) < 0`
    pub fn signed_rad_angle(self, to: Self, axis: Self) -> f32 {
        self.rad_angle(to) * self.winding_sign(to, axis)
    }

    fn winding_sign(self, to: Self, axis: Self) -> f32 {
        // Evaluated in float so the determinant term cannot overflow.
        let (a, b) = (self.to_f32_array(), to.to_f32_array());
        let c = [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[3] - a[3] * b[2],
            a[3] * b[0] - a[0] * b[3],
            a[0] * b[1] - a[1] * b[0],
        ];
        let n = axis.to_f32_array();
        let det = n[0] * c[0] + n[1] * c[1] + n[2] * c[2] + n[3] * c[3];
        if det >= 0.0 {
            1.0
        } else {
            -1.0
        }
    }

    // ==================== Distance ====================

    /// Euclidean distance between two points
    pub fn distance(self, other: Self) -> f64 {
        let d = [
            other.x as i128 - self.x as i128,
            other.y as i128 - self.y as i128,
            other.z as i128 - self.z as i128,
            other.w as i128 - self.w as i128,
        ];
        (sqr_len_wide(d) as f64).sqrt()
    }

    /// Ratio of the displacement length to twice itself
    ///
    /// Always 0.5 for distinct points and NaN when both points coincide.
    pub fn slope(self, other: Self) -> f64 {
        let sq = self.distance(other).powi(2);
        if sq == 0.0 {
            return f64::NAN;
        }
        sq.sqrt() / (4.0 * sq).sqrt()
    }

    // ==================== Interpolation ====================

    /// Linear interpolation with `t` clamped to `[0, 1]`
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.lerp_unclamped(other, t.clamp(0.0, 1.0))
    }

    /// Linear interpolation, extrapolating for `t` outside `[0, 1]`
    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        self.zip_map(other, |a, b| {
            let (a, b) = (a as f32, b as f32);
            round_to_int(a + (b - a) * t)
        })
    }

    /// Interpolant of `v` along the segment `self -> other`
    ///
    /// Returns 0 for a degenerate segment. Fails with
    /// [`MathError::InvalidArgument`] when interpolating back with the
    /// recovered `t` does not land on `v`.
    pub fn inverse_lerp(self, other: Self, v: Self) -> MathResult<f32> {
        if self == other {
            return Ok(0.0);
        }
        let t = self.inverse_lerp_unbounded(other, v).clamp(0.0, 1.0);
        if self.lerp_unclamped(other, t) == v {
            Ok(t)
        } else {
            Err(MathError::invalid_argument(format!(
                "{} does not lie on the segment from {} to {}",
                v, self, other
            )))
        }
    }

    /// Interpolant of `v` projected onto the line through `self` and `other`
    ///
    /// Not clamped and not checked for lying on the line.
    pub fn inverse_lerp_unbounded(self, other: Self, v: Self) -> f32 {
        if self == other {
            return 0.0;
        }
        let delta = other - self;
        ((v - self).dot(delta) as f64 / delta.dot(delta) as f64) as f32
    }

    /// Great-circle interpolation on the 4D hypersphere, `t` clamped to `[0, 1]`
    pub fn hyperslerp(self, other: Self, t: f32) -> Self {
        self.hyperslerp_unclamped(other, t.clamp(0.0, 1.0))
    }

    /// Great-circle interpolation on the 4D hypersphere
    ///
    /// The angle comes from `acos(dot)` with the dot product clamped to
    /// `[-1, 1]`, so the inputs are expected to be unit (axis) vectors.
    pub fn hyperslerp_unclamped(self, other: Self, t: f32) -> Self {
        let dot = (self.dot(other) as f64).clamp(-1.0, 1.0);
        let theta = dot.acos() * t as f64;
        let relative = (other - self * dot).normalized();
        self * theta.cos() + relative * theta.sin()
    }

    // ==================== Triangulation ====================

    /// Pseudo-intersection of the three normal planes through `a`, `b`, `c`
    ///
    /// Returns zero when the points coincide, are collinear, or the
    /// determinant-style denominator vanishes. With the cyclic
    /// [`cross`](Self::cross) the three plane normals are always equal, so
    /// the denominator is zero for every input.
    pub fn triangulate(a: Self, b: Self, c: Self) -> Self {
        if a == b && b == c {
            return Self::ZERO;
        }
        let ab = b - a;
        let ac = c - a;
        let n1 = ab.cross(ac);
        if n1 == Self::ZERO {
            return Self::ZERO;
        }
        let n2 = (c - b).cross(a - b);
        let n3 = (a - c).cross(b - c);
        let n23 = n2.cross(n3);
        let denom = n1.dot(n23);
        if denom == 0 {
            return Self::ZERO;
        }
        let num = n23 * n1.w.wrapping_neg() - n3.cross(n1) * n2.w - n1.cross(n2) * n3.w;
        num / denom
    }
}

#[inline]
fn self_power(m: f64) -> f64 {
    m.powf(m)
}
