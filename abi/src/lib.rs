pub mod fold;
pub mod symbol;
pub mod tags;
pub mod vm;

pub use fold::FoldTable;
pub use symbol::{FnEntry, Symbol, Trampoline};
pub use tags::TypeTag;
pub use vm::{OperandStack, ScriptVm, Word};
