//! # ftval: typed field values for a protocol-analysis filter language
//!
//! The value layer a display-filter engine builds on: a process-wide
//! registry of field-type descriptors, a generic syntax-tree node that tags
//! owned data with its registered type, and the byte-oriented value kinds
//! (raw byte sequences, hardware addresses, IPv6 addresses) sharing one
//! buffer representation.
//!
//! ## Model
//!
//! - [`FieldTypeId`]: closed set of type identifiers, one per value kind,
//!   plus a reserved sentinel for untyped nodes.
//! - [`FieldType`]: the descriptor contract every kind satisfies:
//!   construct, parse (text and captured bytes), set, get, six ordered
//!   comparisons, length, slice. Operations a kind does not support abort
//!   when invoked.
//! - [`FieldValue`]: the owned value representation.
//! - [`SyntaxNode`]: the tagged container the expression parser builds
//!   operands into.
//!
//! The registry is populated once by [`init`] during application startup and
//! read-only afterwards; [`teardown`] is its (empty) shutdown counterpart.
//!
//! ## Usage
//!
//! ```
//! use ftval::{init, lookup, FieldType, FieldTypeId, NullResolver};
//!
//! init();
//! let bytes = lookup(FieldTypeId::Bytes);
//! let mut v = bytes.construct(None);
//! bytes.parse_text(&mut v, "de:ad:be:ef", &NullResolver).unwrap();
//! assert_eq!(bytes.len(&v), 4);
//! assert_eq!(bytes.value_bytes(&v), &[0xde, 0xad, 0xbe, 0xef]);
//! ```

mod bytes;
pub mod capture;
pub mod ftype;
pub mod parser;
pub mod resolv;
pub mod syntax;

pub use capture::{CaptureBuffer, Endianness};
pub use ftype::{init, lookup, teardown, FieldType, FieldTypeId, FieldValue, ValueError};
pub use parser::parse_byte_string;
pub use resolv::{LiteralResolver, NullResolver, Resolver};
pub use syntax::SyntaxNode;
