//! Edge weight types.
//!
//! Floating-point weights use IEEE infinity for "no path", which already
//! absorbs any addition. Integer weights have no infinity, so `MAX` plays
//! that role and addition saturates instead of wrapping.

/// A weight usable in a [`DistanceMatrix`](crate::DistanceMatrix).
pub trait Distance: Copy + PartialOrd {
    /// Weight of the empty path.
    const ZERO: Self;
    /// Weight meaning "no path".
    const UNREACHABLE: Self;

    /// Weight of two paths joined end to end.
    #[must_use]
    fn join(self, other: Self) -> Self;

    /// Returns true if this weight means "no path".
    fn is_unreachable(self) -> bool;
}

macro_rules! float_distance {
    ($($t:ty),*) => {$(
        impl Distance for $t {
            const ZERO: Self = 0.0;
            const UNREACHABLE: Self = <$t>::INFINITY;

            fn join(self, other: Self) -> Self {
                self + other
            }

            fn is_unreachable(self) -> bool {
                self == <$t>::INFINITY
            }
        }
    )*};
}

macro_rules! integer_distance {
    ($($t:ty),*) => {$(
        impl Distance for $t {
            const ZERO: Self = 0;
            const UNREACHABLE: Self = <$t>::MAX;

            fn join(self, other: Self) -> Self {
                if self == Self::UNREACHABLE || other == Self::UNREACHABLE {
                    Self::UNREACHABLE
                } else {
                    self.saturating_add(other)
                }
            }

            fn is_unreachable(self) -> bool {
                self == Self::UNREACHABLE
            }
        }
    )*};
}

float_distance!(f32, f64);
integer_distance!(u16, u32, u64, usize, i32, i64);
