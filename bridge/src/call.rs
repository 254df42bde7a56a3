use abi::ScriptVm;

use crate::args::{ReturnKind, ScriptArg};
use crate::cache::{find_symbol, NameCache};
use crate::context::CallContext;
use crate::error::CallError;
use crate::handle::FunctionHandle;

/// What happens to operand-stack contents left over from earlier work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackPolicy {
    /// Discard pending stack contents before pushing arguments. The
    /// right choice for top-level invocations.
    Clear,
    /// Leave pending contents untouched beneath the new arguments.
    /// Required for reentrant calls issued from inside a native
    /// trampoline, where the caller's frame is still on the stack.
    Preserve,
}

/// Validated call by handle.
///
/// The whole signature is checked against the descriptor before any
/// stack mutation; on error the VM is untouched.
pub fn call<R, V>(
    vm: &mut V,
    func: FunctionHandle,
    policy: StackPolicy,
    args: &[ScriptArg<'_, V>],
) -> Result<R::Output, CallError>
where
    V: ScriptVm,
    R: ReturnKind<V>,
{
    let mut ctx = CallContext::new(vm, func);
    let sym = ctx.validate::<R>(args)?;
    Ok(ctx.execute::<R>(sym, policy, args))
}

/// Unvalidated call by handle, for call sites that have already proven
/// the same (handle, signature) pair once and run it hot.
///
/// Only the resolve itself still happens (a bounds and callable
/// check); `None` means the handle does not name a function. Argument
/// and return checking is skipped entirely, so a signature mismatch
/// here corrupts the operand stack — that trade is the caller's
/// explicit choice.
pub fn call_unchecked<R, V>(
    vm: &mut V,
    func: FunctionHandle,
    policy: StackPolicy,
    args: &[ScriptArg<'_, V>],
) -> Option<R::Output>
where
    V: ScriptVm,
    R: ReturnKind<V>,
{
    let mut ctx = CallContext::new(vm, func);
    let sym = ctx.descriptor()?;
    Some(ctx.execute::<R>(sym, policy, args))
}

/// Validated call by function name.
pub fn call_by_name<R, V>(
    vm: &mut V,
    cache: &mut NameCache,
    name: &str,
    policy: StackPolicy,
    args: &[ScriptArg<'_, V>],
) -> Result<R::Output, CallError>
where
    V: ScriptVm,
    R: ReturnKind<V>,
{
    call_by_name_bytes::<R, V>(vm, cache, name.as_bytes(), policy, args)
}

/// Validated call by raw name bytes.
///
/// The name is normalized through the VM's own fold table. A cache hit
/// skips the symbol-table scan but not the signature check, so the
/// same cached name stays correct across calls with differing
/// signatures. On a miss the name is scanned for, the call is fully
/// validated and dispatched, and only then is the handle cached — a
/// name that never validated is never cached.
pub fn call_by_name_bytes<R, V>(
    vm: &mut V,
    cache: &mut NameCache,
    name: &[u8],
    policy: StackPolicy,
    args: &[ScriptArg<'_, V>],
) -> Result<R::Output, CallError>
where
    V: ScriptVm,
    R: ReturnKind<V>,
{
    let folded = vm.fold().fold(name);

    if let Some(handle) = cache.lookup(&folded) {
        return call::<R, V>(vm, handle, policy, args);
    }

    let handle = find_symbol(vm, &folded).ok_or(CallError::WrongSymbol)?;
    let out = call::<R, V>(vm, handle, policy, args)?;
    cache.insert(folded, handle);
    Ok(out)
}

/// Validated call named by a VM-native string value.
pub fn call_by_vm_string<R, V>(
    vm: &mut V,
    cache: &mut NameCache,
    name: &V::Str,
    policy: StackPolicy,
    args: &[ScriptArg<'_, V>],
) -> Result<R::Output, CallError>
where
    V: ScriptVm,
    R: ReturnKind<V>,
{
    call_by_name_bytes::<R, V>(vm, cache, V::string_bytes(name), policy, args)
}
