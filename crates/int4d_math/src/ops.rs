//! Operator overloads for [`Vec4i`]
//!
//! Integer arithmetic wraps on overflow (two's complement), shifts mask the
//! amount to 5 bits, and integer division or remainder by zero panics like
//! the primitive operators do. Float operands are applied in floating point
//! and the result is cast back toward zero, never rounded.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::Vec4i;

/// Implements `$trait<Vec4i>` and `$trait<i32>` for Vec4i through a wrapping
/// integer method, plus the matching compound-assign trait.
macro_rules! int_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident) => {
        impl $trait for Vec4i {
            type Output = Self;
            #[inline]
            fn $method(self, other: Self) -> Self {
                self.zip_map(other, i32::$op)
            }
        }

        impl $trait<i32> for Vec4i {
            type Output = Self;
            #[inline]
            fn $method(self, scalar: i32) -> Self {
                self.map(|c| c.$op(scalar))
            }
        }

        impl $assign_trait for Vec4i {
            #[inline]
            fn $assign_method(&mut self, other: Self) {
                *self = $trait::$method(*self, other);
            }
        }

        impl $assign_trait<i32> for Vec4i {
            #[inline]
            fn $assign_method(&mut self, scalar: i32) {
                *self = $trait::$method(*self, scalar);
            }
        }
    };
}

/// Implements `$trait<f32>` and `$trait<f64>` for Vec4i: compute in float,
/// truncate back to integer.
macro_rules! float_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait<f32> for Vec4i {
            type Output = Self;
            #[inline]
            fn $method(self, scalar: f32) -> Self {
                self.map(|c| (c as f32 $op scalar) as i32)
            }
        }

        impl $trait<f64> for Vec4i {
            type Output = Self;
            #[inline]
            fn $method(self, scalar: f64) -> Self {
                self.map(|c| (c as f64 $op scalar) as i32)
            }
        }

        impl $assign_trait<f32> for Vec4i {
            #[inline]
            fn $assign_method(&mut self, scalar: f32) {
                *self = $trait::$method(*self, scalar);
            }
        }

        impl $assign_trait<f64> for Vec4i {
            #[inline]
            fn $assign_method(&mut self, scalar: f64) {
                *self = $trait::$method(*self, scalar);
            }
        }
    };
}

int_binop!(Add, add, AddAssign, add_assign, wrapping_add);
int_binop!(Sub, sub, SubAssign, sub_assign, wrapping_sub);
int_binop!(Mul, mul, MulAssign, mul_assign, wrapping_mul);
int_binop!(Div, div, DivAssign, div_assign, wrapping_div);
int_binop!(Rem, rem, RemAssign, rem_assign, wrapping_rem);

float_binop!(Mul, mul, MulAssign, mul_assign, *);
float_binop!(Div, div, DivAssign, div_assign, /);
float_binop!(Rem, rem, RemAssign, rem_assign, %);

// Scalar on the left

impl Mul<Vec4i> for i32 {
    type Output = Vec4i;
    #[inline]
    fn mul(self, v: Vec4i) -> Vec4i {
        v.map(|c| self.wrapping_mul(c))
    }
}

impl Mul<Vec4i> for f32 {
    type Output = Vec4i;
    #[inline]
    fn mul(self, v: Vec4i) -> Vec4i {
        v.map(|c| (self * c as f32) as i32)
    }
}

impl Mul<Vec4i> for f64 {
    type Output = Vec4i;
    #[inline]
    fn mul(self, v: Vec4i) -> Vec4i {
        v.map(|c| (self * c as f64) as i32)
    }
}

impl Neg for Vec4i {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(i32::wrapping_neg)
    }
}

// Bitwise

impl BitAnd for Vec4i {
    type Output = Self;
    #[inline]
    fn bitand(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a & b)
    }
}

impl BitOr for Vec4i {
    type Output = Self;
    #[inline]
    fn bitor(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a | b)
    }
}

impl BitXor for Vec4i {
    type Output = Self;
    #[inline]
    fn bitxor(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a ^ b)
    }
}

impl BitAndAssign for Vec4i {
    #[inline]
    fn bitand_assign(&mut self, other: Self) {
        *self = *self & other;
    }
}

impl BitOrAssign for Vec4i {
    #[inline]
    fn bitor_assign(&mut self, other: Self) {
        *self = *self | other;
    }
}

impl BitXorAssign for Vec4i {
    #[inline]
    fn bitxor_assign(&mut self, other: Self) {
        *self = *self ^ other;
    }
}

/// Bitwise complement of every component
///
/// For the logical "is zero" mask use [`Vec4i::zero_mask`].
impl Not for Vec4i {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        self.map(|c| !c)
    }
}

impl Shl<u32> for Vec4i {
    type Output = Self;
    #[inline]
    fn shl(self, amount: u32) -> Self {
        self.map(|c| c.wrapping_shl(amount))
    }
}

impl Shr<u32> for Vec4i {
    type Output = Self;
    /// Arithmetic (sign-extending) shift
    #[inline]
    fn shr(self, amount: u32) -> Self {
        self.map(|c| c.wrapping_shr(amount))
    }
}

impl ShlAssign<u32> for Vec4i {
    #[inline]
    fn shl_assign(&mut self, amount: u32) {
        *self = *self << amount;
    }
}

impl ShrAssign<u32> for Vec4i {
    #[inline]
    fn shr_assign(&mut self, amount: u32) {
        *self = *self >> amount;
    }
}

impl Vec4i {
    /// Add one to every component and return the new value
    #[inline]
    pub fn inc(&mut self) -> Self {
        *self += 1;
        *self
    }

    /// Subtract one from every component and return the new value
    #[inline]
    pub fn dec(&mut self) -> Self {
        *self -= 1;
        *self
    }

    /// Add one to every component and return the previous value
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let old = *self;
        *self += 1;
        old
    }

    /// Subtract one from every component and return the previous value
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let old = *self;
        *self -= 1;
        old
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let c = Vec4i::new(1, 2, 3, 4) + Vec4i::new(10, 20, 30, 40);
        assert_eq!(c, Vec4i::new(11, 22, 33, 44));
        assert_eq!(Vec4i::new(1, 2, 3, 4) + 1, Vec4i::new(2, 3, 4, 5));
    }

    #[test]
    fn test_identities() {
        let v = Vec4i::new(-7, 0, 13, 99);
        assert_eq!(v + Vec4i::ZERO, v);
        assert_eq!(v * Vec4i::ONE, v);
        assert_eq!(v - v, Vec4i::ZERO);
    }

    #[test]
    fn test_sub_and_neg() {
        let a = Vec4i::new(5, 6, 7, 8);
        assert_eq!(a - Vec4i::new(1, 2, 3, 4), Vec4i::splat(4));
        assert_eq!(a - 5, Vec4i::new(0, 1, 2, 3));
        assert_eq!(-a, Vec4i::new(-5, -6, -7, -8));
    }

    #[test]
    fn test_mul_scalar_both_sides() {
        let v = Vec4i::new(1, 2, 3, 4);
        assert_eq!(v * 2, Vec4i::new(2, 4, 6, 8));
        assert_eq!(2 * v, v * 2);
        assert_eq!(v * Vec4i::new(2, 3, 4, 5), Vec4i::new(2, 6, 12, 20));
    }

    #[test]
    fn test_float_ops_truncate_toward_zero() {
        let v = Vec4i::new(3, -3, 5, -5);
        assert_eq!(v * 0.5f32, Vec4i::new(1, -1, 2, -2));
        assert_eq!(v * 0.5f64, Vec4i::new(1, -1, 2, -2));
        assert_eq!(0.5f32 * v, Vec4i::new(1, -1, 2, -2));
        assert_eq!(0.5f64 * v, Vec4i::new(1, -1, 2, -2));
        assert_eq!(v / 2.0f32, Vec4i::new(1, -1, 2, -2));
        assert_eq!(v / 2.0f64, Vec4i::new(1, -1, 2, -2));
        assert_eq!(Vec4i::new(7, -7, 8, 1) % 2.5f64, Vec4i::new(2, -2, 0, 1));
    }

    #[test]
    fn test_integer_div_rem_truncate() {
        let v = Vec4i::new(7, -7, 9, -9);
        assert_eq!(v / 2, Vec4i::new(3, -3, 4, -4));
        assert_eq!(v % 2, Vec4i::new(1, -1, 1, -1));
        assert_eq!(v / Vec4i::new(7, 7, 3, 3), Vec4i::new(1, -1, 3, -3));
        assert_eq!(v % Vec4i::new(4, 4, 4, 4), Vec4i::new(3, -3, 1, -1));
    }

    #[test]
    #[should_panic]
    fn test_integer_div_by_zero_panics() {
        let _ = Vec4i::ONE / Vec4i::new(1, 1, 0, 1);
    }

    #[test]
    fn test_wrapping_overflow() {
        let v = Vec4i::splat(i32::MAX);
        assert_eq!(v + 1, Vec4i::splat(i32::MIN));
        assert_eq!(-Vec4i::splat(i32::MIN), Vec4i::splat(i32::MIN));
    }

    #[test]
    fn test_compound_assign() {
        let mut v = Vec4i::new(1, 2, 3, 4);
        v += Vec4i::ONE;
        v *= 2;
        v -= 1;
        assert_eq!(v, Vec4i::new(3, 5, 7, 9));
        v /= 2.0f32;
        assert_eq!(v, Vec4i::new(1, 2, 3, 4));
        v %= 3;
        assert_eq!(v, Vec4i::new(1, 2, 0, 1));
    }

    #[test]
    fn test_increment_decrement() {
        let mut v = Vec4i::new(0, 1, 2, 3);
        assert_eq!(v.inc(), Vec4i::new(1, 2, 3, 4));
        assert_eq!(v.post_inc(), Vec4i::new(1, 2, 3, 4));
        assert_eq!(v, Vec4i::new(2, 3, 4, 5));
        assert_eq!(v.dec(), Vec4i::new(1, 2, 3, 4));
        assert_eq!(v.post_dec(), Vec4i::new(1, 2, 3, 4));
        assert_eq!(v, Vec4i::new(0, 1, 2, 3));
    }

    #[test]
    fn test_bitwise() {
        let a = Vec4i::new(0b1100, 0b1010, -1, 0);
        let b = Vec4i::new(0b1010, 0b0110, 5, 0);
        assert_eq!(a & b, Vec4i::new(0b1000, 0b0010, 5, 0));
        assert_eq!(a | b, Vec4i::new(0b1110, 0b1110, -1, 0));
        assert_eq!(a ^ b, Vec4i::new(0b0110, 0b1100, !5, 0));
        assert_eq!(!Vec4i::new(0, -1, 1, 5), Vec4i::new(-1, 0, -2, -6));
    }

    #[test]
    fn test_shifts() {
        let v = Vec4i::new(1, 2, -8, 3);
        assert_eq!(v << 2, Vec4i::new(4, 8, -32, 12));
        assert_eq!(v >> 1, Vec4i::new(0, 1, -4, 1));
        // Amount is masked to 5 bits.
        assert_eq!(v << 33, v << 1);
        let mut w = v;
        w <<= 1;
        w >>= 1;
        assert_eq!(w, v);
    }
}
