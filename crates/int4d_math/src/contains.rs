//! Containment predicates
//!
//! Queries about which values appear among a vector's components. The
//! multi-value forms take a slice of candidates and reject slices that are
//! too short (and, for the AND forms, too long) with
//! [`MathError::InvalidArgument`].

use crate::error::{MathError, MathResult};
use crate::Vec4i;

fn require_at_least_two(op: &str, values: &[i32]) -> MathResult<()> {
    if values.len() < 2 {
        return Err(MathError::invalid_argument(format!(
            "{} requires at least two values, got {}",
            op,
            values.len()
        )));
    }
    Ok(())
}

fn require_two_to_four(op: &str, values: &[i32]) -> MathResult<()> {
    require_at_least_two(op, values)?;
    if values.len() > 4 {
        return Err(MathError::invalid_argument(format!(
            "{} accepts at most four values, got {}",
            op,
            values.len()
        )));
    }
    Ok(())
}

impl Vec4i {
    /// True if any component equals `value`
    #[inline]
    pub fn contains(self, value: i32) -> bool {
        self.x == value || self.y == value || self.z == value || self.w == value
    }

    #[inline]
    pub fn does_not_contain(self, value: i32) -> bool {
        !self.contains(value)
    }

    fn match_count(self, values: &[i32]) -> usize {
        values.iter().filter(|&&v| self.contains(v)).count()
    }

    /// True if any of `values` appears in some component
    pub fn contains_or(self, values: &[i32]) -> MathResult<bool> {
        require_at_least_two("contains_or", values)?;
        Ok(values.iter().any(|&v| self.contains(v)))
    }

    /// True if exactly one of `values` appears in some component
    pub fn contains_xor(self, values: &[i32]) -> MathResult<bool> {
        require_at_least_two("contains_xor", values)?;
        Ok(self.match_count(values) == 1)
    }

    /// True if every one of `values` appears in some component
    ///
    /// Accepts two to four values.
    pub fn contains_and(self, values: &[i32]) -> MathResult<bool> {
        require_two_to_four("contains_and", values)?;
        Ok(values.iter().all(|&v| self.contains(v)))
    }

    /// True if at least one of `values` is absent from every component
    pub fn does_not_contain_or(self, values: &[i32]) -> MathResult<bool> {
        require_at_least_two("does_not_contain_or", values)?;
        Ok(values.iter().any(|&v| self.does_not_contain(v)))
    }

    /// True unless exactly one of `values` appears
    pub fn does_not_contain_xor(self, values: &[i32]) -> MathResult<bool> {
        require_at_least_two("does_not_contain_xor", values)?;
        Ok(self.match_count(values) != 1)
    }

    /// True if none of `values` appears in any component
    ///
    /// Accepts two to four values.
    pub fn does_not_contain_and(self, values: &[i32]) -> MathResult<bool> {
        require_two_to_four("does_not_contain_and", values)?;
        Ok(values.iter().all(|&v| self.does_not_contain(v)))
    }

    // ==================== Thresholds ====================

    #[inline]
    pub fn contains_less_than(self, value: i32) -> bool {
        self.iter().any(|c| c < value)
    }

    #[inline]
    pub fn contains_greater_than(self, value: i32) -> bool {
        self.iter().any(|c| c > value)
    }

    #[inline]
    pub fn contains_less_than_equal(self, value: i32) -> bool {
        self.iter().any(|c| c <= value)
    }

    #[inline]
    pub fn contains_greater_than_equal(self, value: i32) -> bool {
        self.iter().any(|c| c >= value)
    }
}
