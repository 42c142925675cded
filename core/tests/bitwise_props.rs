//! Property tests: the size-dispatched comparison agrees with a plain byte
//! comparison for every width it specializes, and for widths it does not.

use proptest::prelude::*;
use warden_core::bitwise::is_bitwise_equal;

fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    a == b
}

macro_rules! width_properties {
    ($($module:ident => $width:literal),* $(,)?) => {
        $(
            mod $module {
                use super::*;

                proptest! {
                    #[test]
                    fn matches_byte_comparison(a in any::<[u8; $width]>(), b in any::<[u8; $width]>()) {
                        prop_assert_eq!(is_bitwise_equal(&a, &b), bytes_equal(&a, &b));
                    }

                    #[test]
                    fn reflexive_and_symmetric(a in any::<[u8; $width]>(), b in any::<[u8; $width]>()) {
                        prop_assert!(is_bitwise_equal(&a, &a));
                        prop_assert_eq!(is_bitwise_equal(&a, &b), is_bitwise_equal(&b, &a));
                    }

                    #[test]
                    fn single_flipped_bit_differs(a in any::<[u8; $width]>(), bit in 0..($width * 8usize)) {
                        let mut b = a;
                        b[bit / 8] ^= 1 << (bit % 8);
                        prop_assert!(!is_bitwise_equal(&a, &b));
                        prop_assert!(!is_bitwise_equal(&b, &a));
                    }
                }
            }
        )*
    };
}

width_properties! {
    width_1 => 1,
    width_2 => 2,
    width_3 => 3,
    width_4 => 4,
    width_8 => 8,
    width_16 => 16,
    width_17 => 17,
}

proptest! {
    #[test]
    fn floats_compare_bits(x in any::<u64>(), y in any::<u64>()) {
        let (a, b) = (f64::from_bits(x), f64::from_bits(y));
        prop_assert_eq!(is_bitwise_equal(&a, &b), x == y);
    }

    #[test]
    fn wide_integers_compare_values(x in any::<u128>(), y in any::<u128>()) {
        prop_assert_eq!(is_bitwise_equal(&x, &y), x == y);
        prop_assert!(is_bitwise_equal(&x, &x));
    }
}
