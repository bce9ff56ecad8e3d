//! xoshiro transition functions, output scramblers and jump polynomials
//!
//! Each variant is a zero-sized marker type implementing [`Algorithm`]. Variants
//! of the same width share one linear transition and one pair of jump
//! polynomials; they differ only in how a state is scrambled into an output
//! word.
//!
//! # Algorithm
//!
//! The transition is linear over GF(2), so advancing by `d` steps is the
//! application of `T^d`. A jump polynomial holds the coefficients of `T^d`
//! reduced modulo the characteristic polynomial of `T`; accumulating the
//! states selected by its set bits while stepping `64 * W` times yields the
//! advanced state. Cost is O(W × polynomial degree), independent of `d`.

use std::fmt::Debug;
use std::hash::Hash;

/// A xoshiro variant with a fixed state width
pub trait Algorithm: Copy + Debug + Eq + Send + Sync + 'static {
    /// Name recorded in snapshots, e.g. `"xoshiro256**"`
    const NAME: &'static str;

    /// Number of 64-bit words in the state
    const WIDTH: usize;

    /// The raw register, always `[u64; WIDTH]`
    type Words: Copy + Debug + Eq + Hash + Default + Send + Sync + AsRef<[u64]> + AsMut<[u64]>;

    /// Polynomial for the standard jump (2^(32·W) steps)
    const JUMP: Self::Words;

    /// Polynomial for the long jump (2^(48·W) steps)
    const LONG_JUMP: Self::Words;

    /// Advance the register by one step
    fn step(s: &mut Self::Words);

    /// Output word for the current register, read before stepping
    fn scramble(s: &Self::Words) -> u64;
}

/// Advance `s` by the polynomial `poly` (coefficient `k` is bit `k % 64` of
/// word `k / 64`).
pub(crate) fn apply_polynomial<A: Algorithm>(s: &mut A::Words, poly: &A::Words) {
    let mut acc = A::Words::default();
    for &coefficients in poly.as_ref() {
        for bit in 0..64 {
            if coefficients & (1u64 << bit) != 0 {
                for (a, w) in acc.as_mut().iter_mut().zip(s.as_ref()) {
                    *a ^= *w;
                }
            }
            A::step(s);
        }
    }
    *s = acc;
}

#[inline]
fn step256(s: &mut [u64; 4]) {
    let t = s[1] << 17;

    s[2] ^= s[0];
    s[3] ^= s[1];
    s[1] ^= s[2];
    s[0] ^= s[3];

    s[2] ^= t;

    s[3] = s[3].rotate_left(45);
}

#[inline]
fn step512(s: &mut [u64; 8]) {
    let t = s[1] << 11;

    s[2] ^= s[0];
    s[5] ^= s[1];
    s[1] ^= s[2];
    s[7] ^= s[3];
    s[3] ^= s[4];
    s[4] ^= s[5];
    s[0] ^= s[6];
    s[6] ^= s[7];

    s[6] ^= t;

    s[7] = s[7].rotate_left(21);
}

const JUMP_256: [u64; 4] = [
    0x180ec6d33cfd0aba,
    0xd5a61266f0c9392c,
    0xa9582618e03fc9aa,
    0x39abdc4529b1661c,
];

const LONG_JUMP_256: [u64; 4] = [
    0x76e15d3efefdcbbf,
    0xc5004e441c522fb3,
    0x77710069854ee241,
    0x39109bb02acbe635,
];

const JUMP_512: [u64; 8] = [
    0x33ed89b6e7a353f9,
    0x760083d7955323be,
    0x2837f2fbb5f22fae,
    0x4b8c5674d309511c,
    0xb11ac47a7ba28c25,
    0xf1be7667092bcc1c,
    0x53851efdb6df0aaf,
    0x1ebbc8b23eaf25db,
];

const LONG_JUMP_512: [u64; 8] = [
    0x11467fef8f921d28,
    0xa2a819f2e79c8ea8,
    0xa8299fc284b3959a,
    0xb4d347340ca63ee1,
    0x1cb0940bedbff6ce,
    0xd956c5c4fa1f8e17,
    0x915e38fd4eda93bc,
    0x5b3ccdfa5d7daca5,
];

macro_rules! xoshiro_variant {
    (
        $(#[$meta:meta])*
        $ty:ident, $name:literal, $width:literal, $step:ident, $jump:ident, $long:ident,
        |$s:ident| $scramble:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $ty;

        impl Algorithm for $ty {
            const NAME: &'static str = $name;
            const WIDTH: usize = $width;
            type Words = [u64; $width];
            const JUMP: Self::Words = $jump;
            const LONG_JUMP: Self::Words = $long;

            #[inline]
            fn step(s: &mut Self::Words) {
                $step(s)
            }

            #[inline]
            fn scramble($s: &Self::Words) -> u64 {
                $scramble
            }
        }
    };
}

xoshiro_variant!(
    /// xoshiro256**, the all-purpose default
    Xoshiro256StarStar, "xoshiro256**", 4, step256, JUMP_256, LONG_JUMP_256,
    |s| s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9)
);

xoshiro_variant!(
    /// xoshiro256++
    Xoshiro256PlusPlus, "xoshiro256++", 4, step256, JUMP_256, LONG_JUMP_256,
    |s| s[0].wrapping_add(s[3]).rotate_left(23).wrapping_add(s[0])
);

xoshiro_variant!(
    /// xoshiro256+: fastest, with weak low bits. Fine for floating-point draws,
    /// which only use the upper bits
    Xoshiro256Plus, "xoshiro256+", 4, step256, JUMP_256, LONG_JUMP_256,
    |s| s[0].wrapping_add(s[3])
);

xoshiro_variant!(
    /// xoshiro512**
    Xoshiro512StarStar, "xoshiro512**", 8, step512, JUMP_512, LONG_JUMP_512,
    |s| s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9)
);

xoshiro_variant!(
    /// xoshiro512++
    Xoshiro512PlusPlus, "xoshiro512++", 8, step512, JUMP_512, LONG_JUMP_512,
    |s| s[0].wrapping_add(s[2]).rotate_left(17).wrapping_add(s[2])
);

xoshiro_variant!(
    /// xoshiro512+
    Xoshiro512Plus, "xoshiro512+", 8, step512, JUMP_512, LONG_JUMP_512,
    |s| s[0].wrapping_add(s[2])
);

#[cfg(test)]
mod tests {
    use super::*;

    fn polynomial_for_steps<A: Algorithm>(k: usize) -> A::Words {
        let mut poly = A::Words::default();
        poly.as_mut()[k / 64] = 1u64 << (k % 64);
        poly
    }

    fn check_single_term_polynomial<A: Algorithm>() {
        let start: A::Words = {
            let mut w = A::Words::default();
            for (i, word) in w.as_mut().iter_mut().enumerate() {
                *word = 0x0123_4567_89ab_cdef ^ (i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
            }
            w
        };

        for k in [0, 1, 5, 63, 64, 130, 64 * A::WIDTH - 1] {
            let mut stepped = start;
            for _ in 0..k {
                A::step(&mut stepped);
            }

            let mut jumped = start;
            apply_polynomial::<A>(&mut jumped, &polynomial_for_steps::<A>(k));

            assert_eq!(jumped, stepped, "{}: x^{} did not advance {} steps", A::NAME, k, k);
        }
    }

    #[test]
    fn test_single_term_polynomial_equals_stepping_256() {
        check_single_term_polynomial::<Xoshiro256StarStar>();
    }

    #[test]
    fn test_single_term_polynomial_equals_stepping_512() {
        check_single_term_polynomial::<Xoshiro512StarStar>();
    }

    #[test]
    fn test_widths_match_word_arrays() {
        assert_eq!(Xoshiro256Plus::WIDTH, Xoshiro256Plus::JUMP.len());
        assert_eq!(Xoshiro512Plus::WIDTH, Xoshiro512Plus::LONG_JUMP.len());
    }

    #[test]
    fn test_scramblers_differ_on_same_state() {
        let s = [1u64, 2, 3, 4];
        let a = Xoshiro256StarStar::scramble(&s);
        let b = Xoshiro256PlusPlus::scramble(&s);
        let c = Xoshiro256Plus::scramble(&s);
        assert_eq!(c, 5);
        assert_ne!(a, b);
        assert_ne!(b, c);
    }
}
