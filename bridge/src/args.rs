use std::ffi::c_void;

use abi::tags::{
    TypeTag, TYPE_FLOAT, TYPE_FUNC, TYPE_INSTANCE, TYPE_INT, TYPE_STRING, TYPE_VOID,
};
use abi::ScriptVm;

use crate::handle::FunctionHandle;

/// One native argument for a script call.
///
/// Closed union over the value kinds the VM's calling convention
/// knows. Strings are borrowed in the VM's own representation; the
/// borrow must outlive the call.
pub enum ScriptArg<'a, V: ScriptVm> {
    Int(i32),
    Float(f32),
    Str(&'a V::Str),
    Func(FunctionHandle),
    /// Any non-nested pointer, passed through a parameter symbol's
    /// data slot.
    Instance(*mut c_void),
}

impl<'a, V: ScriptVm> ScriptArg<'a, V> {
    /// Convenience for typed instance pointers.
    pub fn instance<T>(ptr: *mut T) -> Self {
        Self::Instance(ptr.cast())
    }

    /// The VM type tag this argument must match.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            ScriptArg::Int(_) => TYPE_INT,
            ScriptArg::Float(_) => TYPE_FLOAT,
            ScriptArg::Str(_) => TYPE_STRING,
            ScriptArg::Func(_) => TYPE_FUNC,
            ScriptArg::Instance(_) => TYPE_INSTANCE,
        }
    }
}

/// A requested return kind for a script call.
///
/// Implemented for the native value types themselves plus the three
/// markers [`VmStr`], [`Void`] and [`Ignore`]; the call entry points
/// are generic over this trait, so the whole signature check compiles
/// down to integer comparisons against the descriptor.
pub trait ReturnKind<V: ScriptVm> {
    type Output;

    /// Tag compared against the descriptor's declared return tag.
    const TAG: TypeTag;

    /// `false` only for [`Ignore`], which accepts any declared return.
    const CHECK_TAG: bool = true;

    /// Whether the caller actually receives a value. `false` for
    /// [`Void`] and [`Ignore`].
    const WANTS_VALUE: bool = true;

    /// Convert (or discard) the value the call left on the stack.
    /// `declared` is the descriptor's return tag; only [`Ignore`]
    /// looks at it.
    fn collect(vm: &mut V, declared: TypeTag) -> Self::Output;
}

impl<V: ScriptVm> ReturnKind<V> for i32 {
    type Output = i32;
    const TAG: TypeTag = TYPE_INT;

    fn collect(vm: &mut V, _declared: TypeTag) -> i32 {
        vm.pop_int()
    }
}

impl<V: ScriptVm> ReturnKind<V> for f32 {
    type Output = f32;
    const TAG: TypeTag = TYPE_FLOAT;

    fn collect(vm: &mut V, _declared: TypeTag) -> f32 {
        vm.pop_float()
    }
}

impl<V: ScriptVm> ReturnKind<V> for FunctionHandle {
    type Output = FunctionHandle;
    const TAG: TypeTag = TYPE_FUNC;

    fn collect(vm: &mut V, _declared: TypeTag) -> FunctionHandle {
        // A function reference is represented on the stack as its
        // symbol index.
        FunctionHandle::new(vm.pop_int())
    }
}

impl<V: ScriptVm, T> ReturnKind<V> for *mut T {
    type Output = *mut T;
    const TAG: TypeTag = TYPE_INSTANCE;

    fn collect(vm: &mut V, _declared: TypeTag) -> *mut T {
        vm.pop_instance().cast()
    }
}

impl<V: ScriptVm, T> ReturnKind<V> for *const T {
    type Output = *const T;
    const TAG: TypeTag = TYPE_INSTANCE;

    fn collect(vm: &mut V, _declared: TypeTag) -> *const T {
        vm.pop_instance().cast_const().cast()
    }
}

/// Marker requesting the VM's string type as the result.
pub struct VmStr;

impl<V: ScriptVm> ReturnKind<V> for VmStr {
    type Output = V::Str;
    const TAG: TypeTag = TYPE_STRING;

    fn collect(vm: &mut V, _declared: TypeTag) -> V::Str {
        vm.pop_string()
    }
}

/// Marker for calling a function declared `void`.
pub struct Void;

impl<V: ScriptVm> ReturnKind<V> for Void {
    type Output = ();
    const TAG: TypeTag = TYPE_VOID;
    const WANTS_VALUE: bool = false;

    fn collect(_vm: &mut V, _declared: TypeTag) {}
}

/// Marker for "do not type-check the return, but keep the stack
/// balanced": whatever the descriptor declares is popped and dropped.
pub struct Ignore;

impl<V: ScriptVm> ReturnKind<V> for Ignore {
    type Output = ();
    const TAG: TypeTag = TYPE_VOID;
    const CHECK_TAG: bool = false;
    const WANTS_VALUE: bool = false;

    fn collect(vm: &mut V, declared: TypeTag) {
        match declared {
            // Function references live on the stack as plain ints.
            TYPE_INT | TYPE_FUNC => {
                vm.pop_int();
            }
            TYPE_FLOAT => {
                vm.pop_float();
            }
            TYPE_STRING => {
                vm.pop_string();
            }
            TYPE_INSTANCE => {
                vm.pop_instance();
            }
            // TYPE_VOID and anything unknown leave nothing behind.
            _ => {}
        }
    }
}
