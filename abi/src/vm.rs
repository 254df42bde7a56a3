use std::ffi::c_void;

use crate::fold::FoldTable;
use crate::symbol::Symbol;

/// One operand-stack cell.
pub type Word = isize;

/// The VM's operand stack.
///
/// Object-safe on purpose: this is the view a native trampoline gets
/// while it runs.
pub trait OperandStack {
    /// Push one machine word.
    fn push(&mut self, word: Word);

    /// Pop an integer value, resolving the token cell the VM convention
    /// places on top of it.
    fn pop_int(&mut self) -> i32;

    /// Pop a float value (bit pattern preserved).
    fn pop_float(&mut self) -> f32;

    /// Pop an instance reference and resolve it to the pointer stored
    /// in the referenced symbol's data slot.
    fn pop_instance(&mut self) -> *mut c_void;

    /// Discard all pending stack contents.
    fn clear_stack(&mut self);
}

/// Everything the call bridge needs from a VM instance.
///
/// The symbol table, operand stack, interpreter and fold table are all
/// owned by the implementor; the bridge only drives them. All methods
/// are synchronous and must be used from the thread that owns the VM.
pub trait ScriptVm: OperandStack {
    /// The VM's native string representation.
    type Str;

    // --- symbol table ---

    fn symbol_count(&self) -> usize;

    /// Metadata for the entry at `index`, or `None` outside the table.
    fn symbol(&self, index: usize) -> Option<Symbol>;

    /// Raw stored name bytes of the entry at `index`.
    fn symbol_name(&self, index: usize) -> &[u8];

    /// Write an instance pointer into the data slot of the parameter
    /// symbol at `index`.
    fn store_instance(&mut self, index: usize, ptr: *mut c_void);

    // --- strings ---

    /// Pop a string result off the operand stack.
    fn pop_string(&mut self) -> Self::Str;

    /// The word pushed for a string argument (a reference to the
    /// string object, in the VM's stack encoding).
    fn string_word(s: &Self::Str) -> Word;

    /// Character data of a VM string, for name lookup.
    fn string_bytes(s: &Self::Str) -> &[u8];

    // --- dispatch ---

    /// Run the bytecode interpreter at `entry` until the function
    /// returns, leaving its result on the operand stack.
    fn run(&mut self, entry: u32);

    /// The fold table the VM uses for symbol-name comparison.
    fn fold(&self) -> &FoldTable;
}
