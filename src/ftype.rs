//! Field-type descriptors and the process-wide type registry.
//!
//! Every concrete value kind implements [`FieldType`]; the registry maps the
//! closed set of [`FieldTypeId`]s to one static descriptor each. The registry
//! is populated exactly once at startup ([`init`]) and is read-only for the
//! rest of the process lifetime, so lookups after startup need no locking.
//!
//! Misuse of the registry (double registration, lookup of an unregistered or
//! sentinel id, lookup before [`init`]) is a programming fault and aborts;
//! only malformed input text is reported as a recoverable [`ValueError`].

use std::sync::OnceLock;

use crate::bytes;
use crate::capture::{CaptureBuffer, Endianness};
use crate::resolv::Resolver;

/// Identifier of a registered field type.
///
/// A closed set, one entry per value kind. `Uninitialized` is a reserved
/// sentinel: it marks an untyped syntax node and never occupies a registry
/// slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTypeId {
    Uninitialized,
    Bytes,
    Ether,
    Ipv6,
}

/// One slot per `FieldTypeId`, the sentinel slot included (it stays empty).
const NUM_TYPES: usize = 4;

/// One value of a registered field type.
///
/// Concrete kinds add variants; the byte family (BYTES, ETHER, IPv6) shares
/// `Bytes`. A value is exclusively owned by its container and dropped with
/// it. For fixed-length kinds the buffer holds exactly `fixed_len()` bytes
/// after every successful set or parse.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bytes(Vec<u8>),
}

/// Recoverable data errors from parse operations.
///
/// Invariant violations (registry misuse, wrong-length sets, unsupported
/// operations) are faults and abort instead.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("invalid byte string: {0}")]
    InvalidByteString(String),
    #[error("cannot resolve {0} to a hardware address")]
    UnresolvedHardwareAddress(String),
    #[error("cannot resolve {0} to an IPv6 address")]
    UnresolvedIpv6Address(String),
}

/// The contract every concrete value kind satisfies.
///
/// Operations a kind does not provide keep their default body, which aborts
/// with an unsupported-operation message: callers must not invoke an
/// operation a type does not support, and doing so is a fault rather than a
/// runtime condition.
pub trait FieldType: Sync {
    fn id(&self) -> FieldTypeId;

    /// Short display name, e.g. `"BYTES"`.
    fn name(&self) -> &'static str;

    /// Human-readable description of the kind.
    fn description(&self) -> &'static str;

    /// Exact byte length every value of this kind must have; 0 = variable.
    fn fixed_len(&self) -> usize {
        0
    }

    /// Build a fresh value. `seed` is caller-supplied initial data; a kind
    /// with its own constructor may ignore it and allocate fresh state.
    /// Kinds without a constructor adopt the seed verbatim and require one.
    fn construct(&self, seed: Option<FieldValue>) -> FieldValue {
        match seed {
            Some(value) => value,
            None => panic!("{}: construct requires seed data", self.name()),
        }
    }

    /// Read a value out of captured packet bytes.
    ///
    /// Integration point for the dissection engine; no built-in kind is
    /// wired to one yet, and the built-in implementations abort.
    fn parse_captured(
        &self,
        _buf: &dyn CaptureBuffer,
        _start: usize,
        _length: usize,
        _endianness: Endianness,
    ) -> FieldValue {
        panic!("{}: parse_captured not supported", self.name())
    }

    /// Parse filter text into `value`.
    ///
    /// Malformed text is a recoverable [`ValueError`]; on failure `value` is
    /// left untouched, nothing is partially committed.
    fn parse_text(
        &self,
        _value: &mut FieldValue,
        _s: &str,
        _resolv: &dyn Resolver,
    ) -> Result<(), ValueError> {
        panic!("{}: parse_text not supported", self.name())
    }

    /// Adopt a buffer the caller has already prepared.
    fn set_adopted(&self, _value: &mut FieldValue, _buf: Vec<u8>) {
        panic!("{}: set_adopted not supported", self.name())
    }

    /// Copy exactly `fixed_len()` bytes out of `src` into `value`. Any other
    /// source length is a fault.
    fn set_copied(&self, _value: &mut FieldValue, _src: &[u8]) {
        panic!("{}: set_copied not supported", self.name())
    }

    /// Borrowed view of the raw value bytes; valid only while `value` lives.
    fn value_bytes<'a>(&self, _value: &'a FieldValue) -> &'a [u8] {
        panic!("{}: value_bytes not supported", self.name())
    }

    /// Current byte length of `value`.
    fn len(&self, _value: &FieldValue) -> usize {
        panic!("{}: len not supported", self.name())
    }

    /// Append `length` bytes of `value`, starting at `offset`, to `dest`.
    /// Offset and length within the value's bounds are the caller's
    /// contract.
    fn slice(&self, _value: &FieldValue, _dest: &mut Vec<u8>, _offset: usize, _length: usize) {
        panic!("{}: slice not supported", self.name())
    }

    fn cmp_eq(&self, _a: &FieldValue, _b: &FieldValue) -> bool {
        panic!("{}: cmp_eq not supported", self.name())
    }

    fn cmp_ne(&self, _a: &FieldValue, _b: &FieldValue) -> bool {
        panic!("{}: cmp_ne not supported", self.name())
    }

    fn cmp_gt(&self, _a: &FieldValue, _b: &FieldValue) -> bool {
        panic!("{}: cmp_gt not supported", self.name())
    }

    fn cmp_ge(&self, _a: &FieldValue, _b: &FieldValue) -> bool {
        panic!("{}: cmp_ge not supported", self.name())
    }

    fn cmp_lt(&self, _a: &FieldValue, _b: &FieldValue) -> bool {
        panic!("{}: cmp_lt not supported", self.name())
    }

    fn cmp_le(&self, _a: &FieldValue, _b: &FieldValue) -> bool {
        panic!("{}: cmp_le not supported", self.name())
    }
}

/// Registry table, write-once at [`init`].
pub(crate) struct Registry {
    slots: [Option<&'static dyn FieldType>; NUM_TYPES],
}

impl Registry {
    pub(crate) fn new() -> Self {
        Registry {
            slots: [None; NUM_TYPES],
        }
    }

    /// Install a descriptor under its declared id. Each kind registers
    /// exactly once per process lifetime; a second registration is a fault.
    pub(crate) fn register(&mut self, ftype: &'static dyn FieldType) {
        let id = ftype.id();
        assert!(
            id != FieldTypeId::Uninitialized,
            "cannot register the sentinel type id"
        );
        let slot = id as usize;
        assert!(
            self.slots[slot].is_none(),
            "field type {:?} registered twice",
            id
        );
        self.slots[slot] = Some(ftype);
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Register every built-in value kind. Must run exactly once, before any
/// [`lookup`]; a second call is a fault.
pub fn init() {
    let mut registry = Registry::new();
    bytes::register(&mut registry);
    if REGISTRY.set(registry).is_err() {
        panic!("field type registry initialized twice");
    }
}

/// Shutdown hook, for symmetry with [`init`]. Descriptors are static, so
/// there is nothing to free.
pub fn teardown() {}

/// Descriptor for a registered id.
///
/// The id set is closed and known at compile time, so an unregistered or
/// sentinel id here is a programming fault, not a runtime condition: this
/// aborts rather than returning an error.
pub fn lookup(id: FieldTypeId) -> &'static dyn FieldType {
    let registry = REGISTRY
        .get()
        .expect("field type registry not initialized");
    assert!(
        id != FieldTypeId::Uninitialized,
        "lookup of the sentinel type id"
    );
    registry.slots[id as usize]
        .unwrap_or_else(|| panic!("field type {:?} not registered", id))
}
