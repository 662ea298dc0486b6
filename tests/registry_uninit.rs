//! Lookup before registry initialization is a fault. This runs in its own
//! test binary so no other test can have initialized the registry first.

use ftval::{lookup, FieldTypeId};

#[test]
#[should_panic(expected = "not initialized")]
fn lookup_before_init_aborts() {
    lookup(FieldTypeId::Bytes);
}
