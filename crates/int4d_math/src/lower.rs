//! 2D and 3D integer vectors
//!
//! These exist so a [`Vec4i`](crate::Vec4i) can be assembled from, or
//! narrowed to, lower-dimensional coordinates.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// 2D integer vector
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Checked component access
    pub fn get(&self, index: usize) -> MathResult<i32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(MathError::IndexOutOfRange { index }),
        }
    }

    /// Checked component write
    pub fn set(&mut self, index: usize, value: i32) -> MathResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(MathError::IndexOutOfRange { index }),
        }
        Ok(())
    }
}

/// 3D integer vector
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3i {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Drop the z component
    #[inline]
    pub const fn xy(self) -> Vec2i {
        Vec2i::new(self.x, self.y)
    }

    pub fn get(&self, index: usize) -> MathResult<i32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::IndexOutOfRange { index }),
        }
    }

    pub fn set(&mut self, index: usize, value: i32) -> MathResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(MathError::IndexOutOfRange { index }),
        }
        Ok(())
    }
}

impl From<Vec2i> for Vec3i {
    fn from(v: Vec2i) -> Self {
        Self::new(v.x, v.y, 0)
    }
}
