//! Bitwise equality of fixed-layout values.
//!
//! Two values are bitwise equal when their raw memory representations are
//! identical. This is stricter than `==` for floats: `0.0` and `-0.0` differ,
//! and a NaN equals itself only when the payload bits match.

use core::fmt::Write;
use zerocopy::{Immutable, IntoBytes};

/// Returns true if `a` and `b` have the same bit pattern.
///
/// The `IntoBytes + Immutable` bound admits only types without padding or
/// interior mutability, so every byte compared is initialized. Sizes of 1, 2,
/// 4, 8 and 16 bytes are compared as whole integers; any other size is
/// compared byte by byte.
///
/// # Example
///
/// ```
/// use warden_core::bitwise::is_bitwise_equal;
///
/// assert!(is_bitwise_equal(&1.5f64, &1.5f64));
/// assert!(!is_bitwise_equal(&0.0f64, &-0.0f64));
/// assert!(is_bitwise_equal(&[1u8, 2, 3], &[1u8, 2, 3]));
/// ```
#[inline]
pub fn is_bitwise_equal<T: IntoBytes + Immutable>(a: &T, b: &T) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());

    // The size is a compile-time constant, so only one arm survives.
    match size_of::<T>() {
        1 => words_equal::<u8>(a, b),
        2 => words_equal::<u16>(a, b),
        4 => words_equal::<u32>(a, b),
        8 => bit64_equal(a, b),
        16 => {
            let (a0, a1) = a.split_at(8);
            let (b0, b1) = b.split_at(8);
            bit64_equal(a0, b0) && bit64_equal(a1, b1)
        }
        _ => bytes_equal(a, b),
    }
}

/// Render the raw bytes of `value` as a hexadecimal number, most significant
/// byte first (`0x3f800000` for `1.0f32`).
pub fn to_hex_string<T: IntoBytes + Immutable>(value: &T) -> String {
    let bytes = value.as_bytes();
    let mut out = String::with_capacity(2 + 2 * bytes.len());
    out.push_str("0x");

    let mut push = |byte: &u8| {
        let _ = write!(out, "{:02x}", byte);
    };
    if cfg!(target_endian = "little") {
        bytes.iter().rev().for_each(&mut push);
    } else {
        bytes.iter().for_each(&mut push);
    }
    out
}

/// Fixed-width unsigned integers a byte view can be reinterpreted as.
trait Word: Copy + Eq {
    fn load(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {
        $(
            impl Word for $ty {
                #[inline(always)]
                fn load(bytes: &[u8]) -> Option<Self> {
                    bytes.first_chunk().map(|chunk| <$ty>::from_ne_bytes(*chunk))
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);

#[inline(always)]
fn words_equal<W: Word>(a: &[u8], b: &[u8]) -> bool {
    match (W::load(a), W::load(b)) {
        (Some(a), Some(b)) => a == b,
        _ => bytes_equal(a, b),
    }
}

// Compares 64 bits as one integer, also on 32-bit targets.
#[inline(always)]
fn bit64_equal(a: &[u8], b: &[u8]) -> bool {
    words_equal::<u64>(a, b)
}

#[inline]
fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}
