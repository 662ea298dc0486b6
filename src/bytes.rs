//! Byte-family value kinds: BYTES (variable length), ETHER (6 bytes) and
//! IPv6 (16 bytes).
//!
//! All three share one representation, a growable byte buffer, and one
//! comparison semantics. Ordering is length-first: a strictly longer value
//! is greater than a strictly shorter one regardless of content, and only
//! equal-length values compare bytewise. This is not plain lexicographic
//! ordering; range and threshold filters over variable-length fields depend
//! on it.

use std::cmp::Ordering;

use crate::capture::{CaptureBuffer, Endianness};
use crate::ftype::{FieldType, FieldTypeId, FieldValue, Registry, ValueError};
use crate::parser::parse_byte_string;
use crate::resolv::Resolver;

const ETHER_LEN: usize = 6;
const IPV6_LEN: usize = 16;

static BYTES: BytesType = BytesType;
static ETHER: EtherType = EtherType;
static IPV6: Ipv6Type = Ipv6Type;

/// Install the three byte-family descriptors.
pub(crate) fn register(registry: &mut Registry) {
    registry.register(&BYTES);
    registry.register(&ETHER);
    registry.register(&IPV6);
}

fn buf(value: &FieldValue) -> &Vec<u8> {
    match value {
        FieldValue::Bytes(b) => b,
    }
}

fn buf_mut(value: &mut FieldValue) -> &mut Vec<u8> {
    match value {
        FieldValue::Bytes(b) => b,
    }
}

/// Copy exactly `expect` bytes of `src` into the value. Any other source
/// length is a caller fault.
fn set_fixed(value: &mut FieldValue, src: &[u8], expect: usize) {
    assert_eq!(
        src.len(),
        expect,
        "fixed-length set with {} bytes, expected {}",
        src.len(),
        expect
    );
    let b = buf_mut(value);
    b.clear();
    b.extend_from_slice(src);
}

fn value_bytes<'a>(value: &'a FieldValue) -> &'a [u8] {
    buf(value)
}

fn len(value: &FieldValue) -> usize {
    buf(value).len()
}

fn slice(value: &FieldValue, dest: &mut Vec<u8>, offset: usize, length: usize) {
    dest.extend_from_slice(&buf(value)[offset..offset + length]);
}

fn cmp_eq(a: &FieldValue, b: &FieldValue) -> bool {
    let (a, b) = (buf(a), buf(b));
    a.len() == b.len() && a == b
}

/// Not the negation of equality: values of different lengths are neither
/// equal nor unequal under this operator.
fn cmp_ne(a: &FieldValue, b: &FieldValue) -> bool {
    let (a, b) = (buf(a), buf(b));
    a.len() == b.len() && a != b
}

/// Length-first ordering: length decides, content only breaks a tie.
fn order(a: &FieldValue, b: &FieldValue) -> Ordering {
    let (a, b) = (buf(a), buf(b));
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn not_wired(name: &str) -> ! {
    unreachable!("{}: captured-bytes parsing is supplied by the dissection engine", name)
}

struct BytesType;

impl FieldType for BytesType {
    fn id(&self) -> FieldTypeId {
        FieldTypeId::Bytes
    }

    fn name(&self) -> &'static str {
        "BYTES"
    }

    fn description(&self) -> &'static str {
        "sequence of bytes"
    }

    fn construct(&self, _seed: Option<FieldValue>) -> FieldValue {
        FieldValue::Bytes(Vec::new())
    }

    fn parse_captured(
        &self,
        _buf: &dyn CaptureBuffer,
        _start: usize,
        _length: usize,
        _endianness: Endianness,
    ) -> FieldValue {
        not_wired(self.name())
    }

    fn parse_text(
        &self,
        value: &mut FieldValue,
        s: &str,
        _resolv: &dyn Resolver,
    ) -> Result<(), ValueError> {
        let bytes = parse_byte_string(s)?;
        *buf_mut(value) = bytes;
        Ok(())
    }

    fn set_adopted(&self, value: &mut FieldValue, buf: Vec<u8>) {
        *buf_mut(value) = buf;
    }

    fn value_bytes<'a>(&self, value: &'a FieldValue) -> &'a [u8] {
        value_bytes(value)
    }

    fn len(&self, value: &FieldValue) -> usize {
        len(value)
    }

    fn slice(&self, value: &FieldValue, dest: &mut Vec<u8>, offset: usize, length: usize) {
        slice(value, dest, offset, length)
    }

    fn cmp_eq(&self, a: &FieldValue, b: &FieldValue) -> bool {
        cmp_eq(a, b)
    }

    fn cmp_ne(&self, a: &FieldValue, b: &FieldValue) -> bool {
        cmp_ne(a, b)
    }

    fn cmp_gt(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) == Ordering::Greater
    }

    fn cmp_ge(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) != Ordering::Less
    }

    fn cmp_lt(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) == Ordering::Less
    }

    fn cmp_le(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) != Ordering::Greater
    }
}

struct EtherType;

impl FieldType for EtherType {
    fn id(&self) -> FieldTypeId {
        FieldTypeId::Ether
    }

    fn name(&self) -> &'static str {
        "ETHER"
    }

    fn description(&self) -> &'static str {
        "Ethernet or other MAC address"
    }

    fn fixed_len(&self) -> usize {
        ETHER_LEN
    }

    fn construct(&self, _seed: Option<FieldValue>) -> FieldValue {
        FieldValue::Bytes(Vec::new())
    }

    fn parse_captured(
        &self,
        _buf: &dyn CaptureBuffer,
        _start: usize,
        _length: usize,
        _endianness: Endianness,
    ) -> FieldValue {
        not_wired(self.name())
    }

    fn parse_text(
        &self,
        value: &mut FieldValue,
        s: &str,
        resolv: &dyn Resolver,
    ) -> Result<(), ValueError> {
        // Byte-grammar text must supply all six bytes; anything else falls
        // through to name resolution.
        if let Ok(bytes) = parse_byte_string(s) {
            if bytes.len() == ETHER_LEN {
                *buf_mut(value) = bytes;
                return Ok(());
            }
        }
        let mac = resolv
            .hardware_address(s)
            .ok_or_else(|| ValueError::UnresolvedHardwareAddress(s.to_string()))?;
        self.set_copied(value, &mac);
        Ok(())
    }

    fn set_copied(&self, value: &mut FieldValue, src: &[u8]) {
        set_fixed(value, src, ETHER_LEN);
    }

    fn value_bytes<'a>(&self, value: &'a FieldValue) -> &'a [u8] {
        value_bytes(value)
    }

    fn len(&self, value: &FieldValue) -> usize {
        len(value)
    }

    fn slice(&self, value: &FieldValue, dest: &mut Vec<u8>, offset: usize, length: usize) {
        slice(value, dest, offset, length)
    }

    fn cmp_eq(&self, a: &FieldValue, b: &FieldValue) -> bool {
        cmp_eq(a, b)
    }

    fn cmp_ne(&self, a: &FieldValue, b: &FieldValue) -> bool {
        cmp_ne(a, b)
    }

    fn cmp_gt(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) == Ordering::Greater
    }

    fn cmp_ge(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) != Ordering::Less
    }

    fn cmp_lt(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) == Ordering::Less
    }

    fn cmp_le(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) != Ordering::Greater
    }
}

struct Ipv6Type;

impl FieldType for Ipv6Type {
    fn id(&self) -> FieldTypeId {
        FieldTypeId::Ipv6
    }

    fn name(&self) -> &'static str {
        "IPv6"
    }

    fn description(&self) -> &'static str {
        "IPv6 address"
    }

    fn fixed_len(&self) -> usize {
        IPV6_LEN
    }

    fn construct(&self, _seed: Option<FieldValue>) -> FieldValue {
        FieldValue::Bytes(Vec::new())
    }

    fn parse_captured(
        &self,
        _buf: &dyn CaptureBuffer,
        _start: usize,
        _length: usize,
        _endianness: Endianness,
    ) -> FieldValue {
        not_wired(self.name())
    }

    fn parse_text(
        &self,
        value: &mut FieldValue,
        s: &str,
        resolv: &dyn Resolver,
    ) -> Result<(), ValueError> {
        // The byte grammar is never consulted for IPv6 text.
        let addr = resolv
            .ipv6_address(s)
            .ok_or_else(|| ValueError::UnresolvedIpv6Address(s.to_string()))?;
        self.set_copied(value, &addr);
        Ok(())
    }

    fn set_copied(&self, value: &mut FieldValue, src: &[u8]) {
        set_fixed(value, src, IPV6_LEN);
    }

    fn value_bytes<'a>(&self, value: &'a FieldValue) -> &'a [u8] {
        value_bytes(value)
    }

    fn len(&self, value: &FieldValue) -> usize {
        len(value)
    }

    fn slice(&self, value: &FieldValue, dest: &mut Vec<u8>, offset: usize, length: usize) {
        slice(value, dest, offset, length)
    }

    fn cmp_eq(&self, a: &FieldValue, b: &FieldValue) -> bool {
        cmp_eq(a, b)
    }

    fn cmp_ne(&self, a: &FieldValue, b: &FieldValue) -> bool {
        cmp_ne(a, b)
    }

    fn cmp_gt(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) == Ordering::Greater
    }

    fn cmp_ge(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) != Ordering::Less
    }

    fn cmp_lt(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) == Ordering::Less
    }

    fn cmp_le(&self, a: &FieldValue, b: &FieldValue) -> bool {
        order(a, b) != Ordering::Greater
    }
}
