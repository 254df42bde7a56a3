use abi::tags::TYPE_FUNC;
use abi::{ScriptVm, Symbol};

/// Opaque reference to a VM symbol-table entry.
///
/// A handle is only meaningful relative to the VM instance it was
/// resolved from; it carries no validity guarantee of its own and must
/// be resolved against a VM to obtain a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionHandle(i32);

impl FunctionHandle {
    /// Sentinel for "no handle resolved yet".
    pub const UNRESOLVED: FunctionHandle = FunctionHandle(-1);

    pub const fn new(index: i32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> i32 {
        self.0
    }

    pub const fn is_resolved(self) -> bool {
        self.0 >= 0
    }

    /// Bounds-checked descriptor fetch. Does not check that the entry
    /// is a function.
    pub fn symbol<V: ScriptVm>(self, vm: &V) -> Option<Symbol> {
        if self.0 < 0 {
            return None;
        }
        vm.symbol(self.0 as usize)
    }

    /// Descriptor fetch plus the callable check: the entry must carry
    /// the function type tag. A well-formed descriptor for a variable
    /// or constant is rejected here.
    pub fn callable<V: ScriptVm>(self, vm: &V) -> Option<Symbol> {
        self.symbol(vm).filter(|sym| sym.type_tag == TYPE_FUNC)
    }
}
