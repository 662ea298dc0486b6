//! Generic syntax-tree node: tags owned data with its registered field type.
//!
//! The expression parser holds operands of any registered kind through this
//! container without knowing their representation. A node is either
//! uninitialized (no type, no data) or typed (descriptor plus owned value),
//! never one without the other, and its type is set at most once: at
//! creation, or through one deferred [`SyntaxNode::init_type`] call.

use std::fmt;

use crate::ftype::{self, FieldType, FieldTypeId, FieldValue};

enum NodeState {
    Uninitialized,
    Typed {
        ftype: &'static dyn FieldType,
        value: FieldValue,
    },
}

pub struct SyntaxNode {
    state: NodeState,
}

impl SyntaxNode {
    /// New node of kind `id`, constructed through the kind's descriptor.
    ///
    /// The sentinel id yields an uninitialized node and takes no seed (an
    /// untyped node cannot own data). For any other id the descriptor's
    /// constructor runs with `seed`; the byte family ignores the seed and
    /// allocates an empty buffer.
    pub fn new(id: FieldTypeId, seed: Option<FieldValue>) -> SyntaxNode {
        let mut node = SyntaxNode {
            state: NodeState::Uninitialized,
        };
        if id == FieldTypeId::Uninitialized {
            assert!(seed.is_none(), "uninitialized node cannot carry data");
        } else {
            node.init_type(id, seed);
        }
        node
    }

    /// Give a type to a node created uninitialized. Re-typing a node is a
    /// fault; a node's type is set at most once.
    pub fn init_type(&mut self, id: FieldTypeId, seed: Option<FieldValue>) {
        assert!(
            matches!(self.state, NodeState::Uninitialized),
            "syntax node already typed"
        );
        let ftype = ftype::lookup(id);
        let value = ftype.construct(seed);
        self.state = NodeState::Typed { ftype, value };
    }

    /// Descriptor name, or `"UNINITIALIZED"` for an untyped node.
    pub fn type_name(&self) -> &'static str {
        match &self.state {
            NodeState::Typed { ftype, .. } => ftype.name(),
            NodeState::Uninitialized => "UNINITIALIZED",
        }
    }

    /// Type id, or the sentinel for an untyped node.
    pub fn type_id(&self) -> FieldTypeId {
        match &self.state {
            NodeState::Typed { ftype, .. } => ftype.id(),
            NodeState::Uninitialized => FieldTypeId::Uninitialized,
        }
    }

    /// Descriptor of a typed node.
    pub fn ftype(&self) -> Option<&'static dyn FieldType> {
        match &self.state {
            NodeState::Typed { ftype, .. } => Some(*ftype),
            NodeState::Uninitialized => None,
        }
    }

    /// The owned value, if the node is typed.
    pub fn value(&self) -> Option<&FieldValue> {
        match &self.state {
            NodeState::Typed { value, .. } => Some(value),
            NodeState::Uninitialized => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut FieldValue> {
        match &mut self.state {
            NodeState::Typed { value, .. } => Some(value),
            NodeState::Uninitialized => None,
        }
    }
}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxNode")
            .field("type", &self.type_name())
            .field("value", &self.value())
            .finish()
    }
}
