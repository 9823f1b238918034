use crate::{Bits, Float};

const ROUNDING_FACTOR: Float = 1e12;

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping
/// the sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two channel slices describe the same values.
///
/// This macro normalizes both slices channel by channel with the same
/// normalization [`to_eq_bits`] applies and compares the resulting bit
/// strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the channels below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_channels {
    ($cs1:expr , $cs2:expr $(,)?) => {
        let (cs1, cs2) = ($cs1, $cs2);
        let bits1: Vec<_> = cs1.iter().map(|c| $crate::core::to_eq_bits(*c)).collect();
        let bits2: Vec<_> = cs2.iter().map(|c| $crate::core::to_eq_bits(*c)).collect();
        assert_eq!(bits1, bits2, "channels differ:\n{:?}\n{:?}", cs1, cs2);
    };
}

#[cfg(test)]
pub(crate) use assert_same_channels;

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a
/// bit string. It is only public because the [`assert_close_enough`] test
/// macro uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Normalize the four channels of a color for equality testing and hashing.
///
/// The canonical sRGB channels and alpha all have unit range, so unlike
/// polar-coordinate color spaces no rotation or scaling is necessary before
/// reducing precision.
#[inline]
pub(crate) fn to_eq_channels(coordinates: &[Float; 3], alpha: Float) -> [Bits; 4] {
    [
        to_eq_bits(coordinates[0]),
        to_eq_bits(coordinates[1]),
        to_eq_bits(coordinates[2]),
        to_eq_bits(alpha),
    ]
}

// ====================================================================================================================
