//! Comparison helpers
//!
//! `==` and `!=` on [`Vec4i`] are plain value equality and its complement.
//! Everything here is a named operation instead: the "all components
//! differ" test, approximate comparison against float coordinates, per
//! component 0/1 masks, and all-components ordering tests.

use crate::Vec4i;

/// Unity-style approximate float equality
#[inline]
pub(crate) fn approximately(a: f32, b: f32, relative: f32, absolute_scale: f32) -> bool {
    (b - a).abs() < (relative * a.abs().max(b.abs())).max(f32::EPSILON * absolute_scale)
}

const DEFAULT_RELATIVE_EPSILON: f32 = 1e-6;
const DEFAULT_ABSOLUTE_SCALE: f32 = 8.0;

#[inline]
fn flag(b: bool) -> i32 {
    b as i32
}

impl Vec4i {
    /// True only when every component differs from the matching one in `other`
    #[inline]
    pub fn all_ne(self, other: Self) -> bool {
        self.x != other.x && self.y != other.y && self.z != other.z && self.w != other.w
    }

    /// True when at least one component differs (same as `!=`)
    #[inline]
    pub fn any_ne(self, other: Self) -> bool {
        self != other
    }

    /// True when every component equals `value`
    #[inline]
    pub fn all_eq_scalar(self, value: i32) -> bool {
        self == Self::splat(value)
    }

    /// Every component approximately equals the matching float coordinate
    pub fn approx_eq_f32(self, other: [f32; 4]) -> bool {
        self.approx_eq_f32_with(other, DEFAULT_RELATIVE_EPSILON, DEFAULT_ABSOLUTE_SCALE)
    }

    /// Every component is NOT approximately equal to its float coordinate
    pub fn approx_ne_f32(self, other: [f32; 4]) -> bool {
        self.to_f32_array()
            .iter()
            .zip(other.iter())
            .all(|(&a, &b)| !approximately(a, b, DEFAULT_RELATIVE_EPSILON, DEFAULT_ABSOLUTE_SCALE))
    }

    /// [`approx_eq_f32`](Self::approx_eq_f32) with explicit tolerances
    ///
    /// Two values match when `|b - a| < max(relative * max(|a|, |b|), f32::EPSILON * absolute_scale)`.
    pub fn approx_eq_f32_with(self, other: [f32; 4], relative: f32, absolute_scale: f32) -> bool {
        self.to_f32_array()
            .iter()
            .zip(other.iter())
            .all(|(&a, &b)| approximately(a, b, relative, absolute_scale))
    }

    // ==================== Masks ====================

    /// 1 where the component equals `value`, 0 elsewhere
    #[inline]
    pub fn mask_eq(self, value: i32) -> Self {
        self.map(|c| flag(c == value))
    }

    /// 1 where the component differs from `value`, 0 elsewhere
    #[inline]
    pub fn mask_ne(self, value: i32) -> Self {
        self.map(|c| flag(c != value))
    }

    /// 1 where the component equals the matching component of `other`
    #[inline]
    pub fn mask_eq_each(self, other: Self) -> Self {
        self.zip_map(other, |a, b| flag(a == b))
    }

    /// 1 where the component differs from the matching component of `other`
    #[inline]
    pub fn mask_ne_each(self, other: Self) -> Self {
        self.zip_map(other, |a, b| flag(a != b))
    }

    /// 1 where the component is zero
    #[inline]
    pub fn zero_mask(self) -> Self {
        self.mask_eq(0)
    }

    /// 1 where the component is non-zero
    #[inline]
    pub fn nonzero_mask(self) -> Self {
        self.mask_ne(0)
    }

    // ==================== Ordering ====================

    #[inline]
    pub fn all_gt(self, other: Self) -> bool {
        self.x > other.x && self.y > other.y && self.z > other.z && self.w > other.w
    }

    #[inline]
    pub fn all_lt(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z && self.w < other.w
    }

    #[inline]
    pub fn all_ge(self, other: Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z && self.w >= other.w
    }

    #[inline]
    pub fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z && self.w <= other.w
    }

    /// Sum of the four per-component comparisons (-1, 0 or 1 each)
    ///
    /// Ranges over -4..=4. Zero does not imply equality.
    pub fn compare_to(self, other: Self) -> i32 {
        self.zip_map(other, |a, b| a.cmp(&b) as i32).iter().sum()
    }

    /// Sum of the per-component comparisons against a single value
    pub fn compare_to_scalar(self, value: i32) -> i32 {
        self.compare_to(Self::splat(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_value_equality() {
        let a = Vec4i::new(1, 2, 3, 4);
        assert_eq!(a, Vec4i::new(1, 2, 3, 4));
        assert!(a != Vec4i::new(1, 2, 3, 5));
    }

    #[test]
    fn test_all_ne_vs_any_ne() {
        let a = Vec4i::new(1, 2, 3, 4);
        let one_diff = Vec4i::new(1, 2, 3, 5);
        let all_diff = Vec4i::new(5, 6, 7, 8);
        assert!(a.any_ne(one_diff));
        assert!(!a.all_ne(one_diff));
        assert!(a.all_ne(all_diff));
        assert!(!a.any_ne(a));
    }

    #[test]
    fn test_all_eq_scalar() {
        assert!(Vec4i::splat(3).all_eq_scalar(3));
        assert!(!Vec4i::new(3, 3, 3, 4).all_eq_scalar(3));
    }

    #[test]
    fn test_approx_eq_f32() {
        let v = Vec4i::new(1, 2, 3, 4);
        assert!(v.approx_eq_f32([1.0, 2.0, 3.0, 4.0]));
        assert!(v.approx_eq_f32([1.0, 2.0, 3.0, 4.000_000_1]));
        assert!(!v.approx_eq_f32([1.0, 2.0, 3.0, 4.1]));
    }

    #[test]
    fn test_approx_ne_f32_requires_all_to_differ() {
        let v = Vec4i::new(1, 2, 3, 4);
        assert!(v.approx_ne_f32([1.5, 2.5, 3.5, 4.5]));
        assert!(!v.approx_ne_f32([1.0, 2.5, 3.5, 4.5]));
    }

    #[test]
    fn test_masks() {
        let v = Vec4i::new(0, 5, 0, -2);
        assert_eq!(v.mask_eq(0), Vec4i::new(1, 0, 1, 0));
        assert_eq!(v.mask_ne(0), Vec4i::new(0, 1, 0, 1));
        assert_eq!(v.zero_mask(), v.mask_eq(0));
        assert_eq!(v.nonzero_mask(), v.mask_ne(0));
        assert_eq!(v.mask_eq(5), Vec4i::new(0, 1, 0, 0));
        let other = Vec4i::new(0, 4, 1, -2);
        assert_eq!(v.mask_eq_each(other), Vec4i::new(1, 0, 0, 1));
        assert_eq!(v.mask_ne_each(other), Vec4i::new(0, 1, 1, 0));
    }

    #[test]
    fn test_ordering_requires_all_components() {
        let a = Vec4i::new(2, 2, 2, 2);
        let b = Vec4i::new(1, 1, 1, 1);
        let mixed = Vec4i::new(3, 1, 1, 1);
        assert!(a.all_gt(b));
        assert!(b.all_lt(a));
        assert!(!mixed.all_gt(a));
        assert!(!mixed.all_lt(a));
        assert!(a.all_ge(a));
        assert!(a.all_le(a));
        assert!(!a.all_gt(a));
    }

    #[test]
    fn test_compare_to() {
        let a = Vec4i::new(1, 2, 3, 4);
        assert_eq!(a.compare_to(a), 0);
        assert_eq!(a.compare_to(Vec4i::ZERO), 4);
        assert_eq!(a.compare_to(Vec4i::new(2, 2, 2, 2)), 1);
        assert_eq!(a.compare_to_scalar(10), -4);
    }
}
