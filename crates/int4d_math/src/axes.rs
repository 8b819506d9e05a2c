//! Axis selection flags

use bitflags::bitflags;

bitflags! {
    /// A set of the four vector axes
    ///
    /// Used to pick which components an operation mirrors.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// No axes
        const NONE = 0;
        const X = 1 << 0;
        const Y = 1 << 1;
        const Z = 1 << 2;
        const W = 1 << 3;
        /// Every axis
        const ALL = Self::X.bits() | Self::Y.bits() | Self::Z.bits() | Self::W.bits();
    }
}

impl Axes {
    /// Build from per-axis booleans in x, y, z, w order
    pub fn from_bools(x: bool, y: bool, z: bool, w: bool) -> Self {
        let mut axes = Axes::NONE;
        axes.set(Axes::X, x);
        axes.set(Axes::Y, y);
        axes.set(Axes::Z, z);
        axes.set(Axes::W, w);
        axes
    }

    /// Per-component multiplier: -1 for selected axes, 1 otherwise
    pub(crate) fn sign_factors(self) -> [i32; 4] {
        let f = |axis: Axes| if self.contains(axis) { -1 } else { 1 };
        [f(Axes::X), f(Axes::Y), f(Axes::Z), f(Axes::W)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bools() {
        let axes = Axes::from_bools(true, false, false, true);
        assert!(axes.contains(Axes::X));
        assert!(axes.contains(Axes::W));
        assert!(!axes.contains(Axes::Y));
        assert_eq!(Axes::from_bools(true, true, true, true), Axes::ALL);
    }

    #[test]
    fn test_sign_factors() {
        assert_eq!((Axes::Y | Axes::Z).sign_factors(), [1, -1, -1, 1]);
        assert_eq!(Axes::NONE.sign_factors(), [1, 1, 1, 1]);
    }
}
