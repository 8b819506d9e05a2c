//! 4D integer vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::lower::{Vec2i, Vec3i};

/// 4D integer vector with x, y, z, w components
///
/// A plain value type: copied on assignment, compared by value. Use
/// [`AnchoredVec4i`](crate::AnchoredVec4i) to track a resettable origin.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl Vec4i {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);
    pub const ONE: Self = Self::new(1, 1, 1, 1);
    pub const UP: Self = Self::new(0, 1, 0, 0);
    pub const DOWN: Self = Self::new(0, -1, 0, 0);
    pub const LEFT: Self = Self::new(-1, 0, 0, 0);
    pub const RIGHT: Self = Self::new(1, 0, 0, 0);
    pub const FORWARD: Self = Self::new(0, 0, 1, 0);
    pub const BACK: Self = Self::new(0, 0, -1, 0);
    /// Negative W (kata)
    pub const OUTWARD: Self = Self::new(0, 0, 0, -1);
    /// Positive W (ana)
    pub const INWARD: Self = Self::new(0, 0, 0, 1);

    /// Create a new Vec4i
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    /// Create with w set to zero
    #[inline]
    pub const fn from_xyz(x: i32, y: i32, z: i32) -> Self {
        Self::new(x, y, z, 0)
    }

    /// Create with z and w set to zero
    #[inline]
    pub const fn from_xy(x: i32, y: i32) -> Self {
        Self::new(x, y, 0, 0)
    }

    /// Create with y, z and w set to zero
    #[inline]
    pub const fn from_x(x: i32) -> Self {
        Self::new(x, 0, 0, 0)
    }

    /// All four components set to `v`
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Extend a 3D vector with the given w
    #[inline]
    pub const fn from_vec3(v: Vec3i, w: i32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Extend a 2D vector with the given z and w
    #[inline]
    pub const fn from_vec2(v: Vec2i, z: i32, w: i32) -> Self {
        Self::new(v.x, v.y, z, w)
    }

    /// `a` supplies x, y and `b` supplies z, w
    #[inline]
    pub const fn from_vec2_pair(a: Vec2i, b: Vec2i) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Narrow to the xyz components
    #[inline]
    pub const fn xyz(self) -> Vec3i {
        Vec3i::new(self.x, self.y, self.z)
    }

    /// Narrow to the xy components
    #[inline]
    pub const fn xy(self) -> Vec2i {
        Vec2i::new(self.x, self.y)
    }

    #[inline]
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: i32) {
        self.z = z;
    }

    #[inline]
    pub fn set_w(&mut self, w: i32) {
        self.w = w;
    }

    /// Overwrite all four components
    #[inline]
    pub fn set_all(&mut self, x: i32, y: i32, z: i32, w: i32) {
        *self = Self::new(x, y, z, w);
    }

    /// Copy another vector's components into this one and return them
    #[inline]
    pub fn copy_from(&mut self, other: Self) -> Self {
        *self = other;
        other
    }

    /// Component by index: 0, 1, 2, 3 map to x, y, z, w
    pub fn get(&self, index: usize) -> MathResult<i32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(MathError::IndexOutOfRange { index }),
        }
    }

    /// Write a component by index
    pub fn set(&mut self, index: usize, value: i32) -> MathResult<()> {
        *self.slot_mut(index)? = value;
        Ok(())
    }

    fn slot_mut(&mut self, index: usize) -> MathResult<&mut i32> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            3 => Ok(&mut self.w),
            _ => Err(MathError::IndexOutOfRange { index }),
        }
    }

    /// Apply `f` to each component
    #[inline]
    pub fn map(self, mut f: impl FnMut(i32) -> i32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    /// Apply `f` to each pair of matching components
    #[inline]
    pub fn zip_map(self, other: Self, mut f: impl FnMut(i32, i32) -> i32) -> Self {
        Self::new(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
            f(self.w, other.w),
        )
    }

    /// Replace the receiver with `f(self)` and return the new value
    #[inline]
    pub fn apply(&mut self, f: impl FnOnce(Self) -> Self) -> Self {
        *self = f(*self);
        *self
    }

    // ==================== Array / sequence views ====================

    #[inline]
    pub const fn to_array(self) -> [i32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn to_vec(self) -> Vec<i32> {
        self.to_array().to_vec()
    }

    /// Like [`to_vec`](Self::to_vec) with a caller-chosen capacity
    ///
    /// The capacity must hold at least the four components.
    pub fn to_vec_with_capacity(self, capacity: usize) -> MathResult<Vec<i32>> {
        if capacity < 4 {
            return Err(MathError::invalid_argument(format!(
                "capacity {} is smaller than the 4 components of a Vec4i",
                capacity
            )));
        }
        let mut out = Vec::with_capacity(capacity);
        out.extend_from_slice(&self.to_array());
        Ok(out)
    }

    /// Components in x, y, z, w order
    #[inline]
    pub fn iter(self) -> std::array::IntoIter<i32, 4> {
        self.to_array().into_iter()
    }

    /// Components paired with their 0-based slot
    pub fn iter_indexed(self) -> impl Iterator<Item = (usize, i32)> {
        self.iter().enumerate()
    }

    /// Collect exactly four integers into a vector
    pub fn try_from_iter<I: IntoIterator<Item = i32>>(iter: I) -> MathResult<Self> {
        let mut out = [0i32; 4];
        let mut count = 0usize;
        for value in iter {
            if count == 4 {
                return Err(MathError::invalid_argument(
                    "more than 4 values supplied when building a Vec4i",
                ));
            }
            out[count] = value;
            count += 1;
        }
        if count != 4 {
            return Err(MathError::invalid_argument(format!(
                "expected 4 values when building a Vec4i, got {}",
                count
            )));
        }
        Ok(Self::from(out))
    }

    // ==================== Float / byte-channel conversions ====================

    #[inline]
    pub fn to_f32_array(self) -> [f32; 4] {
        [self.x as f32, self.y as f32, self.z as f32, self.w as f32]
    }

    /// Cast each float toward zero (saturating, NaN becomes 0)
    #[inline]
    pub fn from_f32_truncated(v: [f32; 4]) -> Self {
        Self::new(v[0] as i32, v[1] as i32, v[2] as i32, v[3] as i32)
    }

    pub fn floor_to_int(v: [f32; 4]) -> Self {
        Self::from_f32_truncated(v.map(f32::floor))
    }

    pub fn ceil_to_int(v: [f32; 4]) -> Self {
        Self::from_f32_truncated(v.map(f32::ceil))
    }

    /// Round each float to the nearest integer, ties to even
    pub fn round_to_int(v: [f32; 4]) -> Self {
        Self::new(
            round_to_int(v[0]),
            round_to_int(v[1]),
            round_to_int(v[2]),
            round_to_int(v[3]),
        )
    }

    /// Treat RGBA channels as x, y, z, w
    #[inline]
    pub fn from_rgba(c: [u8; 4]) -> Self {
        Self::new(c[0] as i32, c[1] as i32, c[2] as i32, c[3] as i32)
    }

    /// Keep the low 8 bits of each component as an RGBA channel
    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.x as u8, self.y as u8, self.z as u8, self.w as u8]
    }

    // ==================== Hashing ====================

    /// Mixed 32-bit hash of the components
    ///
    /// Each later component is rotated further before xor so that
    /// permutations of the same values land on different hashes.
    pub fn hash_code(&self) -> i32 {
        let y = self.y as u32;
        let z = self.z as u32;
        let w = self.w as u32;
        let mixed = (self.x as u32)
            ^ (y << 2)
            ^ (y >> 30)
            ^ (z << 4)
            ^ (z >> 28)
            ^ (w << 6)
            ^ (w >> 26);
        mixed as i32
    }
}

/// Nearest integer with ties going to the even neighbour
#[inline]
pub(crate) fn round_to_int(v: f32) -> i32 {
    v.round_ties_even() as i32
}

impl std::hash::Hash for Vec4i {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl std::fmt::Display for Vec4i {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl std::ops::Index<usize> for Vec4i {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("{}", MathError::IndexOutOfRange { index }),
        }
    }
}

impl std::ops::IndexMut<usize> for Vec4i {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        match self.slot_mut(index) {
            Ok(slot) => slot,
            Err(err) => panic!("{}", err),
        }
    }
}

impl IntoIterator for Vec4i {
    type Item = i32;
    type IntoIter = std::array::IntoIter<i32, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Vec4i {
    type Item = i32;
    type IntoIter = std::array::IntoIter<i32, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec3i> for Vec4i {
    fn from(v: Vec3i) -> Self {
        Self::from_vec3(v, 0)
    }
}

impl From<Vec2i> for Vec4i {
    fn from(v: Vec2i) -> Self {
        Self::from_vec2(v, 0, 0)
    }
}

impl From<[i32; 4]> for Vec4i {
    fn from(a: [i32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Vec4i> for [i32; 4] {
    fn from(v: Vec4i) -> Self {
        v.to_array()
    }
}

impl From<(i32, i32, i32, i32)> for Vec4i {
    fn from((x, y, z, w): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vec4i> for (i32, i32, i32, i32) {
    fn from(v: Vec4i) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}

impl TryFrom<&[i32]> for Vec4i {
    type Error = MathError;

    fn try_from(slice: &[i32]) -> MathResult<Self> {
        match slice {
            [x, y, z, w] => Ok(Self::new(*x, *y, *z, *w)),
            _ => Err(MathError::invalid_argument(format!(
                "integer slice must have length 4 to convert to Vec4i, got {}",
                slice.len()
            ))),
        }
    }
}
