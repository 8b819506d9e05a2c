//! Int4D - 4D integer vectors
//!
//! This crate ties together the workspace:
//! - [`int4d_math`]: the [`Vec4i`] value type and everything that operates on it
//! - [`inspector`]: property-editor style field bindings
//! - [`config`]: layered configuration for formatting, comparison and layout

pub mod config;

pub use int4d_inspector as inspector;
pub use int4d_math::{
    as_ints, cast_ints, ints_from_vectors, vectors_from_ints, AnchoredVec4i, Axes,
    ByteSerializable, MathError, MathResult, NumberFormat, NumberLocale, Vec2i, Vec3i, Vec4i,
};
