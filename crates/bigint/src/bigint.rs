//! Big integer type and basic observers.

use zeroize::Zeroize;

/// Limb type for the magnitude representation.
pub type Limb = u32;
/// Double-width type for carry and borrow intermediates.
pub type DoubleLimb = u64;

/// Bits per limb.
pub const LIMB_BITS: usize = 32;
/// The magnitude base, 2^32.
pub(crate) const LIMB_BASE: DoubleLimb = (Limb::MAX as DoubleLimb) + 1;

/// A heap-allocated signed big integer that is zeroized on drop.
///
/// Internally represented as a sign flag plus a little-endian array of `u32`
/// limbs holding the absolute value. The magnitude never carries leading zero
/// limbs; zero is the empty magnitude, and its sign flag is ignored by every
/// observer.
#[derive(Clone, Default, Zeroize)]
#[zeroize(drop)]
pub struct BigInt {
    /// Little-endian limbs (limbs[0] is the least significant).
    pub(crate) limbs: Vec<Limb>,
    /// True if the number is negative. May be stale when the magnitude is
    /// empty; observers mask it.
    pub(crate) negative: bool,
}

impl BigInt {
    /// Create a zero-valued BigInt.
    pub fn zero() -> Self {
        Self {
            limbs: Vec::new(),
            negative: false,
        }
    }

    /// Create a BigInt from an unsigned 64-bit magnitude and a sign.
    pub fn from_sign_magnitude(magnitude: u64, negative: bool) -> Self {
        let mut limbs = Vec::new();
        if magnitude != 0 {
            limbs.push(magnitude as Limb);
            let high = (magnitude >> LIMB_BITS) as Limb;
            if high != 0 {
                limbs.push(high);
            }
        }
        Self { limbs, negative }
    }

    /// Return true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Return true if this number is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Flip the sign. Zero stays zero for every observer.
    pub fn negate(&mut self) {
        self.negative = !self.negative;
    }

    /// Return the number of significant bits (0 for zero).
    pub fn bit_len(&self) -> usize {
        match self.limbs.last() {
            Some(top) => self.limbs.len() * LIMB_BITS - top.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Remove leading zero limbs.
    pub(crate) fn trim(&mut self) {
        while let Some(&0) = self.limbs.last() {
            self.limbs.pop();
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_sign_magnitude(value as u64, false)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                // unsigned_abs maps the most-negative input to its exact
                // magnitude
                BigInt::from_sign_magnitude(value.unsigned_abs() as u64, value < 0)
            }
        }
    )*};
}

impl_from_unsigned!(u16, u32, u64);
impl_from_signed!(i16, i32, i64);

impl std::fmt::Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigInt({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let z = BigInt::zero();
        assert!(z.is_zero());
        assert!(!z.is_negative());
        assert_eq!(z.bit_len(), 0);
        assert_eq!(z, BigInt::default());
    }

    #[test]
    fn test_negated_zero_is_zero() {
        let mut z = BigInt::zero();
        z.negate();
        assert!(z.is_zero());
        assert!(!z.is_negative());
        assert_eq!(z, BigInt::zero());
    }

    #[test]
    fn test_from_sign_magnitude() {
        let n = BigInt::from_sign_magnitude(0xFF, false);
        assert_eq!(n.bit_len(), 8);
        assert!(!n.is_negative());

        let wide = BigInt::from_sign_magnitude(u64::MAX, true);
        assert_eq!(wide.bit_len(), 64);
        assert!(wide.is_negative());
    }

    #[test]
    fn test_from_integer_types() {
        assert_eq!(BigInt::from(0u16), BigInt::zero());
        assert_eq!(BigInt::from(12345u32).to_string(), "12345");
        assert_eq!(BigInt::from(-12345i32).to_string(), "-12345");
        assert_eq!(BigInt::from(i16::MIN).to_string(), "-32768");
        assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn test_from_most_negative_i64() {
        let n = BigInt::from(i64::MIN);
        assert!(n.is_negative());
        assert_eq!(n.bit_len(), 64);
        assert_eq!(n.to_string(), "-9223372036854775808");
    }

    #[test]
    fn test_clone_is_independent() {
        let a = BigInt::from(7u32);
        let mut b = a.clone();
        b += &BigInt::from(1u32);
        assert_eq!(a.to_string(), "7");
        assert_eq!(b.to_string(), "8");
    }

    #[test]
    fn test_bit_len_multi_limb() {
        let n = BigInt::from(1u64 << 40);
        assert_eq!(n.bit_len(), 41);
    }

    #[test]
    fn test_debug_wraps_decimal() {
        let n = BigInt::from(-42i32);
        assert_eq!(format!("{n:?}"), "BigInt(-42)");
    }
}
