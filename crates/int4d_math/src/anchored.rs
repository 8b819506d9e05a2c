//! Vectors with a resettable origin point

use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::Vec4i;

/// A [`Vec4i`] paired with a recorded origin it can be reset to
///
/// The origin is captured at construction and only changes through
/// [`set_origin_here`](Self::set_origin_here),
/// [`set_origin_to`](Self::set_origin_to) or the replace methods. Mutating
/// the value (directly or through `DerefMut`) never moves it.
///
/// Equality and hashing compare both the value and the origin. Compare
/// [`value`](Self::value) when only the position matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchoredVec4i {
    value: Vec4i,
    origin: Vec4i,
}

fn replace_matching(v: Vec4i, old: i32, new: i32) -> Vec4i {
    v.map(|c| if c == old { new } else { c })
}

impl AnchoredVec4i {
    /// Wrap `value`, recording it as the origin
    #[inline]
    pub const fn new(value: Vec4i) -> Self {
        Self { value, origin: value }
    }

    #[inline]
    pub const fn with_origin(value: Vec4i, origin: Vec4i) -> Self {
        Self { value, origin }
    }

    #[inline]
    pub fn value(&self) -> Vec4i {
        self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut Vec4i {
        &mut self.value
    }

    #[inline]
    pub fn origin(&self) -> Vec4i {
        self.origin
    }

    /// Move the value back to the origin and return it
    pub fn reset(&mut self) -> Vec4i {
        self.value = self.origin;
        self.value
    }

    /// Record the current value as the origin and return it
    pub fn set_origin_here(&mut self) -> Vec4i {
        self.origin = self.value;
        self.origin
    }

    pub fn set_origin_to(&mut self, origin: Vec4i) -> Vec4i {
        self.origin = origin;
        self.origin
    }

    /// Replace every component equal to `old` with `new`, in both the value
    /// and the origin
    pub fn replace(&mut self, old: i32, new: i32) -> Self {
        if old != new {
            self.value = replace_matching(self.value, old, new);
            self.origin = replace_matching(self.origin, old, new);
        }
        *self
    }

    /// Like [`replace`](Self::replace) but only touches the value
    pub fn replace_value(&mut self, old: i32, new: i32) -> Self {
        if old != new {
            self.value = replace_matching(self.value, old, new);
        }
        *self
    }

    /// Like [`replace`](Self::replace) but only touches the origin
    pub fn replace_origin(&mut self, old: i32, new: i32) -> Self {
        if old != new {
            self.origin = replace_matching(self.origin, old, new);
        }
        *self
    }

    /// Offset of the value from its origin
    #[inline]
    pub fn displacement(&self) -> Vec4i {
        self.value - self.origin
    }
}

impl Deref for AnchoredVec4i {
    type Target = Vec4i;

    fn deref(&self) -> &Vec4i {
        &self.value
    }
}

impl DerefMut for AnchoredVec4i {
    fn deref_mut(&mut self) -> &mut Vec4i {
        &mut self.value
    }
}

impl From<Vec4i> for AnchoredVec4i {
    fn from(value: Vec4i) -> Self {
        Self::new(value)
    }
}

impl From<AnchoredVec4i> for Vec4i {
    fn from(anchored: AnchoredVec4i) -> Self {
        anchored.value
    }
}

/// Formats the value only
impl fmt::Display for AnchoredVec4i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
