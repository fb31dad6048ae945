use libfelica::types::{AccessMode, BlockListElement};
use proptest::prelude::*;

#[test]
fn one_number_byte_is_two_byte_form() {
    let e = BlockListElement::new(AccessMode::Decrement, 0, &[0x07]).unwrap();
    assert!(e.is_two_byte());
    assert_eq!(e.encode(), vec![0x80, 0x07]);
}

#[test]
fn two_number_bytes_are_three_byte_form_little_endian() {
    let e = BlockListElement::new(AccessMode::Decrement, 2, &[0x01, 0x02]).unwrap();
    assert!(!e.is_two_byte());
    assert_eq!(e.encode(), vec![0x02, 0x02, 0x01]);
}

#[test]
fn length_bit_is_tested_not_compared() {
    // Flag carries order and access mode bits next to the length bit; the
    // element must still be read back as the 2-byte form.
    let e = BlockListElement::short(AccessMode::CashBack, 0x03, 0x10);
    assert_eq!(e.flag(), 0x93);
    assert_ne!(e.flag(), 0x80);
    assert!(e.is_two_byte());

    let (parsed, consumed) = BlockListElement::parse(&e.encode()).unwrap();
    assert_eq!(consumed, 2);
    assert_eq!(parsed, e);
    assert_eq!(parsed.access_mode(), AccessMode::CashBack);
    assert_eq!(parsed.service_order(), 0x03);
}

#[test]
fn wrong_number_length_is_rejected() {
    assert!(BlockListElement::new(AccessMode::Decrement, 0, &[]).is_err());
    assert!(BlockListElement::new(AccessMode::Decrement, 0, &[1, 2, 3]).is_err());
}

proptest! {
    #[test]
    fn form_selection_by_number_width(order in 0u8..16, hi in any::<u8>(), lo in any::<u8>()) {
        let short = BlockListElement::new(AccessMode::Decrement, order, &[lo]).unwrap();
        prop_assert_eq!(short.encode().len(), 2);

        let long = BlockListElement::new(AccessMode::Decrement, order, &[hi, lo]).unwrap();
        let bytes = long.encode();
        prop_assert_eq!(bytes.len(), 3);
        prop_assert_eq!(&bytes[1..], &[lo, hi][..]);
        prop_assert_eq!(long.block_number(), u16::from_be_bytes([hi, lo]));
    }
}
