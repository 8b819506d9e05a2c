//! 4D Integer Mathematics Library
//!
//! This crate provides a 4D integer vector value type and everything that
//! operates on it.
//!
//! ## Core Types
//!
//! - [`Vec4i`] - 4D integer vector with x, y, z, w components
//! - [`AnchoredVec4i`] - A `Vec4i` paired with a resettable origin point
//! - [`Vec2i`], [`Vec3i`] - Lower-dimensional helpers for construction
//! - [`Axes`] - Axis selection flags
//!
//! ## Supporting Types
//!
//! - [`MathError`] - Error taxonomy for fallible operations
//! - [`NumberFormat`], [`NumberLocale`] - Component formatting
//! - [`ByteSerializable`] - Fixed-layout byte encoding

/// Generates a mutating twin of a pure method: the receiver is replaced by
/// the pure result, which is also returned.
macro_rules! in_place {
    ($(#[$meta:meta])* $name:ident => $pure:ident($($arg:ident: $ty:ty),*)) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(&mut self, $($arg: $ty),*) -> Self {
            *self = self.$pure($($arg),*);
            *self
        }
    };
}

mod vec4i;
mod ops;
mod compare;
mod scalar;
mod geometry;
mod contains;
mod anchored;
mod lower;
pub mod axes;
pub mod error;
pub mod format;
pub mod sequence;

pub use vec4i::Vec4i;
pub use anchored::AnchoredVec4i;
pub use lower::{Vec2i, Vec3i};
pub use axes::Axes;
pub use error::{MathError, MathResult};
pub use format::{NumberFormat, NumberLocale};
pub use sequence::{as_ints, cast_ints, ints_from_vectors, vectors_from_ints, ByteSerializable};
