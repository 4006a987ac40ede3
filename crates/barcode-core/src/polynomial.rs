//! Dense polynomials over GF(256), used by the Reed-Solomon block encoder.
//! This promotes what is often written as inline Russian-peasant multiply
//! and long division free functions into a first-class type built on the
//! `gf256` table module.

use crate::gf256::{gexp, glog};

/// A finite sequence of GF(256) coefficients, stored highest-degree first
/// after leading-zero trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<u8>,
}

impl Polynomial {
    /// Builds a polynomial from `coefficients` (highest degree first),
    /// trimming leading zero terms, then appends `shift` zero coefficients
    /// at the low-degree end — equivalent to multiplying the trimmed
    /// polynomial by `x^shift`.
    pub fn new(coefficients: &[u8], shift: usize) -> Self {
        let offset = coefficients
            .iter()
            .position(|&c| c != 0)
            .unwrap_or(coefficients.len());
        let trimmed_len = coefficients.len() - offset;
        let mut num = vec![0u8; trimmed_len + shift];
        num[..trimmed_len].copy_from_slice(&coefficients[offset..]);
        Self { coefficients: num }
    }

    /// Count of coefficients in the stored representation.
    pub fn length(&self) -> usize {
        self.coefficients.len()
    }

    /// Coefficient `i`, highest degree first.
    ///
    /// # Panics
    /// Panics if `i >= self.length()`; indexing past the polynomial's length
    /// is a programmer error.
    pub fn index(&self, i: usize) -> u8 {
        self.coefficients[i]
    }

    /// Returns `self * other`, with length `self.length() + other.length() - 1`.
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut num = vec![0u8; self.length() + other.length() - 1];
        for i in 0..self.length() {
            let a = self.index(i);
            if a == 0 {
                continue;
            }
            for j in 0..other.length() {
                let b = other.index(j);
                if b != 0 {
                    num[i + j] ^= gexp(glog(a) + glog(b));
                }
            }
        }
        Polynomial::new(&num, 0)
    }

    /// Polynomial long division modulo `divisor`, returning the remainder.
    ///
    /// Implemented iteratively rather than via the textbook recursive
    /// description, since each step is guaranteed to shrink the working
    /// polynomial's length by at least one term.
    pub fn modulo(&self, divisor: &Polynomial) -> Polynomial {
        let mut current = self.clone();
        while current.length() >= divisor.length() {
            let ratio = glog(current.index(0)) - glog(divisor.index(0));
            let mut num = current.coefficients.clone();
            for i in 0..divisor.length() {
                let d = divisor.index(i);
                if d != 0 {
                    num[i] ^= gexp(glog(d) + ratio);
                }
            }
            current = Polynomial::new(&num, 0);
        }
        current
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn trim_leading_zeros_and_apply_shift() {
        let p = Polynomial::new(&[0, 0, 1, 2], 2);
        assert_eq!(p.length(), 4);
        assert_eq!(p.index(0), 1);
        assert_eq!(p.index(1), 2);
        assert_eq!(p.index(2), 0);
        assert_eq!(p.index(3), 0);
    }

    #[test]
    fn collapse_to_the_zero_polynomial_when_all_coefficients_are_zero() {
        let p = Polynomial::new(&[0, 0, 0], 0);
        assert_eq!(p.length(), 0);
    }

    #[test]
    fn multiply_has_the_expected_length() {
        let a = Polynomial::new(&[1, 2, 3], 0);
        let b = Polynomial::new(&[1, 1], 0);
        assert_eq!(a.multiply(&b).length(), 4);
    }

    #[test]
    fn modulo_never_exceeds_divisor_length_minus_one() {
        let dividend = Polynomial::new(&[1, 2, 3, 4, 5], 0);
        let divisor = Polynomial::new(&[1, 7, 9], 0);
        let remainder = dividend.modulo(&divisor);
        assert!(remainder.length() < divisor.length());
    }

    #[test]
    fn return_self_unchanged_when_shorter_than_the_divisor() {
        let dividend = Polynomial::new(&[5, 6], 0);
        let divisor = Polynomial::new(&[1, 2, 3], 0);
        assert_eq!(dividend.modulo(&divisor), dividend);
    }
}
