//! Flat integer sequences and byte encoding
//!
//! Vectors flatten to integers in x, y, z, w order, four per vector. The
//! byte form is the same layout with each integer stored little-endian.

use crate::error::{MathError, MathResult};
use crate::{AnchoredVec4i, Vec4i};

/// Bytes in one encoded [`Vec4i`]
pub const VEC4I_BYTES: usize = 16;

/// Values that encode to and decode from a fixed-length byte sequence
pub trait ByteSerializable: Sized {
    /// Exact length of the encoded form
    const ENCODED_LEN: usize;

    fn to_bytes(&self) -> Vec<u8>;

    /// Decode, failing with [`MathError::InvalidArgument`] unless `bytes`
    /// is exactly [`ENCODED_LEN`](Self::ENCODED_LEN) long
    fn from_bytes(bytes: &[u8]) -> MathResult<Self>;
}

fn check_len(bytes: &[u8], expected: usize, what: &str) -> MathResult<()> {
    if bytes.len() != expected {
        return Err(MathError::invalid_argument(format!(
            "{} requires exactly {} bytes, got {}",
            what,
            expected,
            bytes.len()
        )));
    }
    Ok(())
}

fn decode_vec4i(bytes: &[u8]) -> Vec4i {
    let mut comps = [0i32; 4];
    for (slot, chunk) in comps.iter_mut().zip(bytes.chunks_exact(4)) {
        *slot = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Vec4i::from(comps)
}

impl ByteSerializable for Vec4i {
    const ENCODED_LEN: usize = VEC4I_BYTES;

    fn to_bytes(&self) -> Vec<u8> {
        self.iter().flat_map(i32::to_le_bytes).collect()
    }

    fn from_bytes(bytes: &[u8]) -> MathResult<Self> {
        check_len(bytes, Self::ENCODED_LEN, "Vec4i")?;
        Ok(decode_vec4i(bytes))
    }
}

/// Value first, then origin
impl ByteSerializable for AnchoredVec4i {
    const ENCODED_LEN: usize = 2 * VEC4I_BYTES;

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.value().to_bytes();
        out.extend(self.origin().to_bytes());
        out
    }

    fn from_bytes(bytes: &[u8]) -> MathResult<Self> {
        check_len(bytes, Self::ENCODED_LEN, "AnchoredVec4i")?;
        let (value, origin) = bytes.split_at(VEC4I_BYTES);
        Ok(AnchoredVec4i::with_origin(decode_vec4i(value), decode_vec4i(origin)))
    }
}

/// Group a flat integer sequence into vectors, four integers each
///
/// Fails with [`MathError::InvalidArgument`] unless the length is a
/// multiple of 4.
pub fn vectors_from_ints(ints: &[i32]) -> MathResult<Vec<Vec4i>> {
    Ok(cast_ints(ints)?.to_vec())
}

/// Flatten vectors into integers in x, y, z, w order
pub fn ints_from_vectors(vectors: &[Vec4i]) -> Vec<i32> {
    as_ints(vectors).to_vec()
}

/// Reinterpret a flat integer slice as vectors without copying
pub fn cast_ints(ints: &[i32]) -> MathResult<&[Vec4i]> {
    bytemuck::try_cast_slice(ints).map_err(|_| {
        MathError::invalid_argument(format!(
            "integer sequence length must be a multiple of 4, got {}",
            ints.len()
        ))
    })
}

/// View vectors as a flat integer slice without copying
pub fn as_ints(vectors: &[Vec4i]) -> &[i32] {
    bytemuck::cast_slice(vectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4i_bytes_are_little_endian() {
        let v = Vec4i::new(1, -1, 256, 0);
        let bytes = v.to_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[4..8], &[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(&bytes[8..12], &[0, 1, 0, 0]);
        assert_eq!(Vec4i::from_bytes(&bytes), Ok(v));
    }

    #[test]
    fn test_wrong_byte_length() {
        assert!(matches!(Vec4i::from_bytes(&[0; 15]), Err(MathError::InvalidArgument(_))));
        assert!(matches!(
            AnchoredVec4i::from_bytes(&[0; 16]),
            Err(MathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_anchored_bytes_keep_origin() {
        let a = AnchoredVec4i::with_origin(Vec4i::new(1, 2, 3, 4), Vec4i::new(-5, 6, -7, 8));
        let bytes = a.to_bytes();
        assert_eq!(bytes.len(), AnchoredVec4i::ENCODED_LEN);
        assert_eq!(&bytes[..16], Vec4i::new(1, 2, 3, 4).to_bytes().as_slice());
        let decoded = AnchoredVec4i::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.origin(), Vec4i::new(-5, 6, -7, 8));
        assert_eq!(decoded, a);
    }

    #[test]
    fn test_vectors_from_ints() {
        let ints = [1, 2, 3, 4, 5, 6, 7, 8];
        let vs = vectors_from_ints(&ints).unwrap();
        assert_eq!(vs, vec![Vec4i::new(1, 2, 3, 4), Vec4i::new(5, 6, 7, 8)]);
        assert_eq!(ints_from_vectors(&vs), ints.to_vec());
        assert_eq!(vectors_from_ints(&[]).unwrap(), Vec::<Vec4i>::new());
    }

    #[test]
    fn test_vectors_from_ints_rejects_partial() {
        assert!(matches!(
            vectors_from_ints(&[1, 2, 3, 4, 5]),
            Err(MathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_copy_views() {
        let vs = [Vec4i::new(1, 2, 3, 4), Vec4i::new(5, 6, 7, 8)];
        let flat = as_ints(&vs);
        assert_eq!(flat, &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(cast_ints(flat).unwrap(), &vs);
    }
}
