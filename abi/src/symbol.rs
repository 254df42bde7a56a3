use crate::tags::{FLAG_RETURN, TypeTag, TYPE_VOID};
use crate::vm::OperandStack;

/// A native trampoline registered with the VM. Invoked directly,
/// without the bytecode interpreter; reads its arguments and writes its
/// result through the operand stack.
pub type Trampoline = fn(&mut dyn OperandStack);

/// Where dispatch lands for a function symbol.
#[derive(Clone, Copy, Debug)]
pub enum FnEntry {
    /// Offset into the VM's compiled bytecode.
    Bytecode(u32),
    /// Registered native function, bypasses the interpreter.
    Trampoline(Trampoline),
}

/// Transient copy of a symbol-table entry's metadata.
///
/// The table itself is owned by the VM; a `Symbol` is only valid for
/// the duration of one call.
#[derive(Clone, Copy, Debug)]
pub struct Symbol {
    /// What kind of entry this is (`TYPE_FUNC` for callables).
    pub type_tag: TypeTag,
    /// Declared return tag. Meaningful for functions only.
    pub ret_tag: TypeTag,
    /// Declared parameter count.
    pub arity: u32,
    /// Raw flag bits (`FLAG_*`).
    pub flags: u32,
    pub entry: FnEntry,
}

impl Symbol {
    pub fn function(ret_tag: TypeTag, arity: u32, flags: u32, entry: FnEntry) -> Self {
        Self {
            type_tag: crate::tags::TYPE_FUNC,
            ret_tag,
            arity,
            flags,
            entry,
        }
    }

    /// A non-callable entry, e.g. a variable or a function parameter.
    pub fn variable(type_tag: TypeTag) -> Self {
        Self {
            type_tag,
            ret_tag: TYPE_VOID,
            arity: 0,
            flags: 0,
            entry: FnEntry::Bytecode(0),
        }
    }

    #[inline]
    pub fn has_return(&self) -> bool {
        self.flags & FLAG_RETURN != 0
    }
}
