//! Equality and sign-aware total ordering.

use std::cmp::Ordering;

use crate::bigint::BigInt;

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.is_negative() == other.is_negative() && self.limbs == other.limbs
    }
}

impl Eq for BigInt {}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (negative, _) => {
                let magnitude = if self.limbs.len() != other.limbs.len() {
                    self.limbs.len().cmp(&other.limbs.len())
                } else {
                    // high-to-low lexicographic limb comparison
                    self.limbs.iter().rev().cmp(other.limbs.iter().rev())
                };
                if negative {
                    magnitude.reverse()
                } else {
                    magnitude
                }
            }
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
