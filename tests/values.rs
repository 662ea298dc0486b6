//! Byte-family value tests: text grammar round trips, fixed-length
//! enforcement, the adopt/copy set contracts, comparison semantics, slicing.

use std::sync::Once;

use ftval::{
    init, lookup, CaptureBuffer, Endianness, FieldType, FieldTypeId, FieldValue, LiteralResolver,
    NullResolver, Resolver,
};

static INIT: Once = Once::new();

fn setup() {
    INIT.call_once(init);
}

fn parse_bytes(text: &str) -> FieldValue {
    let ftype = lookup(FieldTypeId::Bytes);
    let mut v = ftype.construct(None);
    ftype.parse_text(&mut v, text, &NullResolver).expect("parse");
    v
}

// ==================== Text grammar ====================

#[test]
fn round_trip_all_separators() {
    setup();
    let ftype = lookup(FieldTypeId::Bytes);
    for text in ["de:ad:be:ef", "de-ad-be-ef", "de.ad.be.ef"] {
        let v = parse_bytes(text);
        assert_eq!(ftype.value_bytes(&v), &[0xde, 0xad, 0xbe, 0xef], "{}", text);
        assert_eq!(ftype.len(&v), 4);
    }
}

#[test]
fn single_nibble_tail() {
    setup();
    let ftype = lookup(FieldTypeId::Bytes);
    let v = parse_bytes("a:b:c");
    assert_eq!(ftype.value_bytes(&v), &[0x0a, 0x0b, 0x0c]);
}

#[test]
fn malformed_text_commits_nothing() {
    setup();
    let ftype = lookup(FieldTypeId::Bytes);
    let mut v = ftype.construct(None);
    ftype
        .parse_text(&mut v, "18:29", &NullResolver)
        .expect("parse");
    assert!(ftype.parse_text(&mut v, "zz:11", &NullResolver).is_err());
    // The previous value survives a failed parse.
    assert_eq!(ftype.value_bytes(&v), &[0x18, 0x29]);
}

// ==================== Fixed lengths ====================

#[test]
fn ether_is_always_six_bytes() {
    setup();
    let ftype = lookup(FieldTypeId::Ether);
    let mut v = ftype.construct(None);
    ftype
        .parse_text(&mut v, "1:2:3:4:5:6", &NullResolver)
        .expect("parse");
    assert_eq!(ftype.len(&v), ftype.fixed_len());
    assert_eq!(ftype.value_bytes(&v), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn short_ether_text_is_not_an_address() {
    setup();
    let ftype = lookup(FieldTypeId::Ether);
    let mut v = ftype.construct(None);
    // Valid byte-grammar text, but not six bytes; with no resolver to fall
    // back on it must fail rather than commit a short value.
    assert!(ftype.parse_text(&mut v, "00:11:22", &NullResolver).is_err());
    assert_eq!(ftype.len(&v), 0);
}

struct FixedResolver;

impl Resolver for FixedResolver {
    fn hardware_address(&self, name: &str) -> Option<[u8; 6]> {
        (name == "gateway").then_some([0x02, 0x42, 0xc0, 0xa8, 0x00, 0x01])
    }

    fn ipv6_address(&self, _text: &str) -> Option<[u8; 16]> {
        None
    }
}

#[test]
fn ether_falls_back_to_resolution() {
    setup();
    let ftype = lookup(FieldTypeId::Ether);
    let mut v = ftype.construct(None);
    ftype
        .parse_text(&mut v, "gateway", &FixedResolver)
        .expect("resolve");
    assert_eq!(ftype.value_bytes(&v), &[0x02, 0x42, 0xc0, 0xa8, 0x00, 0x01]);

    let mut w = ftype.construct(None);
    assert!(ftype.parse_text(&mut w, "unknown-host", &FixedResolver).is_err());
}

#[test]
fn ipv6_is_always_sixteen_bytes() {
    setup();
    let ftype = lookup(FieldTypeId::Ipv6);
    let mut v = ftype.construct(None);
    ftype
        .parse_text(&mut v, "2001:db8::1", &LiteralResolver)
        .expect("parse");
    assert_eq!(ftype.len(&v), 16);
    let bytes = ftype.value_bytes(&v);
    assert_eq!(&bytes[..4], &[0x20, 0x01, 0x0d, 0xb8]);
    assert_eq!(bytes[15], 1);
}

#[test]
fn ipv6_never_uses_the_byte_grammar() {
    setup();
    let ftype = lookup(FieldTypeId::Ipv6);
    let mut v = ftype.construct(None);
    // Valid byte-grammar text but not an IPv6 literal.
    assert!(ftype.parse_text(&mut v, "1:2:3", &LiteralResolver).is_err());
}

// ==================== Set contracts ====================

#[test]
fn bytes_adopts_a_prepared_buffer() {
    setup();
    let ftype = lookup(FieldTypeId::Bytes);
    let mut v = ftype.construct(None);
    ftype.set_adopted(&mut v, vec![1, 2, 3]);
    assert_eq!(ftype.len(&v), 3);
}

#[test]
fn ether_copies_exactly_six() {
    setup();
    let ftype = lookup(FieldTypeId::Ether);
    let mut v = ftype.construct(None);
    let src = [9u8, 8, 7, 6, 5, 4];
    ftype.set_copied(&mut v, &src);
    assert_eq!(ftype.value_bytes(&v), &src);
}

#[test]
#[should_panic(expected = "fixed-length set")]
fn wrong_length_copy_aborts() {
    setup();
    let ftype = lookup(FieldTypeId::Ether);
    let mut v = ftype.construct(None);
    ftype.set_copied(&mut v, &[1, 2, 3, 4]);
}

#[test]
#[should_panic(expected = "set_adopted not supported")]
fn ether_does_not_adopt() {
    setup();
    let ftype = lookup(FieldTypeId::Ether);
    let mut v = ftype.construct(None);
    ftype.set_adopted(&mut v, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
#[should_panic(expected = "set_copied not supported")]
fn bytes_does_not_copy() {
    setup();
    let ftype = lookup(FieldTypeId::Bytes);
    let mut v = ftype.construct(None);
    ftype.set_copied(&mut v, &[1, 2, 3]);
}

// ==================== Comparison semantics ====================

#[test]
fn equality_is_length_sensitive() {
    setup();
    let ftype = lookup(FieldTypeId::Bytes);
    let a = parse_bytes("01:02");
    let b = parse_bytes("01:02:00");
    let c = parse_bytes("01:02");
    assert!(ftype.cmp_eq(&a, &c));
    assert!(!ftype.cmp_eq(&a, &b));
    // Different lengths are neither equal nor unequal.
    assert!(!ftype.cmp_ne(&a, &b));
    assert!(ftype.cmp_ne(&a, &parse_bytes("01:03")));
    assert!(!ftype.cmp_ne(&a, &c));
}

#[test]
fn longer_value_always_wins() {
    setup();
    let ftype = lookup(FieldTypeId::Bytes);
    let long = parse_bytes("01:02:03");
    let short = parse_bytes("ff:ff");
    assert!(ftype.cmp_gt(&long, &short));
    assert!(ftype.cmp_ge(&long, &short));
    assert!(!ftype.cmp_lt(&long, &short));
    assert!(ftype.cmp_lt(&short, &long));
    assert!(ftype.cmp_le(&short, &long));
}

#[test]
fn equal_lengths_compare_bytewise() {
    setup();
    let ftype = lookup(FieldTypeId::Bytes);
    let a = parse_bytes("01:02");
    let b = parse_bytes("01:03");
    assert!(ftype.cmp_lt(&a, &b));
    assert!(ftype.cmp_le(&a, &b));
    assert!(ftype.cmp_gt(&b, &a));
    assert!(ftype.cmp_ge(&a, &a));
    assert!(ftype.cmp_le(&a, &a));
}

// ==================== Slicing ====================

#[test]
fn slice_appends_to_destination() {
    setup();
    let ftype = lookup(FieldTypeId::Bytes);
    let v = parse_bytes("10:20:30:40");
    let mut dest = Vec::new();
    ftype.slice(&v, &mut dest, 1, 2);
    assert_eq!(dest, vec![0x20, 0x30]);
    ftype.slice(&v, &mut dest, 0, 1);
    assert_eq!(dest, vec![0x20, 0x30, 0x10]);
}

// ==================== Unwired operations ====================

struct NoCapture;

impl CaptureBuffer for NoCapture {
    fn fetch(&self, _start: usize, _length: usize) -> &[u8] {
        &[]
    }
}

#[test]
#[should_panic(expected = "dissection engine")]
fn captured_parse_is_not_wired() {
    setup();
    let ftype = lookup(FieldTypeId::Bytes);
    ftype.parse_captured(&NoCapture, 0, 4, Endianness::Big);
}
