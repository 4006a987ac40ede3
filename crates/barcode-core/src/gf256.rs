//! GF(256) arithmetic tables for the Reed-Solomon layer.
//!
//! The field is small enough that computing the 256-entry exp/log tables
//! lazily on first use is just as good as a build-time codegen step; they're
//! built once behind a `OnceLock` and shared as immutable state afterward.

use std::sync::OnceLock;

/// Primitive polynomial for this field, per the QR Code specification.
const PRIMITIVE_POLY: u16 = 0x11D;

struct Gf256Tables {
    exp: [u8; 256],
    log: [i32; 256],
}

static TABLES: OnceLock<Gf256Tables> = OnceLock::new();

fn tables() -> &'static Gf256Tables {
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 256];
        let mut log = [-1i32; 256];
        let mut x: u16 = 1;
        for i in 0..255usize {
            exp[i] = x as u8;
            log[x as usize] = i as i32;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
        }
        exp[255] = exp[0]; // lets naive folding past 255 read cleanly
        Gf256Tables { exp, log }
    })
}

/// Returns `α^i`, the `i`th power of the field's generator.
///
/// `i` is normalized modulo 255 (the multiplicative group of GF(256) has
/// order 255), folding negative remainders back into range.
pub fn gexp(i: i32) -> u8 {
    tables().exp[i.rem_euclid(255) as usize]
}

/// Returns the discrete log of `x`, i.e. the `i` such that `gexp(i) == x`.
///
/// # Panics
/// Panics if `x == 0`; the discrete log of zero is undefined in this field.
pub fn glog(x: u8) -> i32 {
    assert!(x != 0, "glog(0) is undefined");
    tables().log[x as usize]
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn round_trip_every_nonzero_element_through_log_and_exp() {
        for x in 1u16..256 {
            let x = x as u8;
            assert_eq!(gexp(glog(x)), x);
        }
    }

    #[test]
    fn fold_exponents_past_the_group_order() {
        assert_eq!(gexp(0), gexp(255));
        assert_eq!(gexp(1), gexp(256));
    }

    #[test]
    fn fold_negative_exponents() {
        assert_eq!(gexp(-1), gexp(254));
    }

    #[test]
    #[should_panic]
    fn panic_on_log_of_zero() {
        glog(0);
    }
}
