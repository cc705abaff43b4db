//! Truncating division and remainder via Knuth's Algorithm D over base 2^32.

use std::ops::{DivAssign, RemAssign};

use crate::bigint::{BigInt, DoubleLimb, Limb, LIMB_BASE, LIMB_BITS};
use crate::error::BigIntError;
use crate::ops::forward_binop;

impl BigInt {
    /// Truncating division with remainder.
    ///
    /// Returns `(q, r)` such that `q * divisor + r == self` with
    /// `|r| < |divisor|` and `r` taking the dividend's sign (truncation
    /// toward zero). Neither operand is mutated.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if self.is_zero() || self.limbs.len() < divisor.limbs.len() {
            return Ok((BigInt::zero(), self.clone()));
        }

        let rem_sign = self.is_negative();
        let quot_sign = self.is_negative() != divisor.is_negative();

        let mut a = self.clone();
        let mut b = divisor.clone();
        a.negative = false;
        b.negative = false;

        // normalise so the divisor's top limb has its high bit set; this
        // bounds the quotient-digit estimate error to two corrections
        let k = b.limbs.last().map_or(0, |top| top.leading_zeros());
        a <<= k;
        b <<= k;

        let m = a.limbs.len() - b.limbs.len();
        let b_top = b.limbs[b.limbs.len() - 1] as DoubleLimb;

        let mut q = vec![0 as Limb; m + 1];
        b.prepend_zeros(m);

        // the highest quotient limb can only be 0 or 1
        if a >= b {
            q[m] = 1;
            a.abs_sub(&b, usize::MAX);
        }

        for pos in (0..m).rev() {
            // align the divisor one limb lower
            b.limbs.remove(0);
            let bl = b.limbs.len();
            let al = a.limbs.len();

            // estimate the digit from the dividend limbs at the divisor's
            // current alignment; the estimate never undershoots
            let mut digit: Limb = if al < bl {
                0
            } else if al == bl {
                (a.limbs[al - 1] as DoubleLimb / b_top) as Limb
            } else {
                let top_two = ((a.limbs[al - 1] as DoubleLimb) << LIMB_BITS)
                    | a.limbs[al - 2] as DoubleLimb;
                (top_two / b_top).min(LIMB_BASE - 1) as Limb
            };

            if digit != 0 {
                let mut step = b.clone();
                step.abs_mul_int(digit);
                a -= &step;
                while a.is_negative() {
                    digit -= 1;
                    a += &b;
                }
            }
            q[pos] = digit;
        }

        // the residual is the remainder, still carrying the normalisation
        // shift
        a.trim();
        a.abs_divide_int(1 << k);
        a.negative = rem_sign;

        let mut quot = BigInt {
            limbs: q,
            negative: quot_sign,
        };
        quot.trim();
        Ok((quot, a))
    }
}

impl DivAssign<&BigInt> for BigInt {
    /// # Panics
    ///
    /// Panics if `rhs` is zero; `div_rem` is the error-returning form.
    fn div_assign(&mut self, rhs: &BigInt) {
        match self.div_rem(rhs) {
            Ok((q, _)) => *self = q,
            Err(_) => panic!("big integer division by zero"),
        }
    }
}

impl RemAssign<&BigInt> for BigInt {
    /// # Panics
    ///
    /// Panics if `rhs` is zero; `div_rem` is the error-returning form.
    fn rem_assign(&mut self, rhs: &BigInt) {
        match self.div_rem(rhs) {
            Ok((_, r)) => *self = r,
            Err(_) => panic!("big integer division by zero"),
        }
    }
}

forward_binop!(impl Div, div via DivAssign, div_assign);
forward_binop!(impl Rem, rem via RemAssign, rem_assign);
