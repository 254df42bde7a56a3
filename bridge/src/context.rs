use abi::tags::{TOK_PUSHINT, TOK_PUSHSTR};
use abi::{FnEntry, ScriptVm, Symbol, Word};

use crate::args::{ReturnKind, ScriptArg};
use crate::call::StackPolicy;
use crate::error::CallError;
use crate::handle::FunctionHandle;

/// One call in flight: the VM borrow, the target handle and its
/// resolved descriptor (if any).
pub(crate) struct CallContext<'vm, V: ScriptVm> {
    vm: &'vm mut V,
    func: FunctionHandle,
    sym: Option<Symbol>,
}

impl<'vm, V: ScriptVm> CallContext<'vm, V> {
    pub(crate) fn new(vm: &'vm mut V, func: FunctionHandle) -> Self {
        let sym = func.callable(&*vm);
        Self { vm, func, sym }
    }

    pub(crate) fn descriptor(&self) -> Option<Symbol> {
        self.sym
    }

    /// Full signature check, strictly before any stack mutation.
    ///
    /// Parameter symbols follow the function entry contiguously, so
    /// the tag for argument `i` lives at `handle + 1 + i`. Positions
    /// are visited in declaration order and the first mismatch wins.
    pub(crate) fn validate<R: ReturnKind<V>>(
        &self,
        args: &[ScriptArg<'_, V>],
    ) -> Result<Symbol, CallError> {
        let sym = self.sym.ok_or(CallError::WrongSymbol)?;

        if args.len() != sym.arity as usize {
            return Err(CallError::WrongArgsSize);
        }

        if !sym.has_return() && R::WANTS_VALUE {
            return Err(CallError::WrongRetVal);
        }

        if R::CHECK_TAG && sym.ret_tag != R::TAG {
            return Err(CallError::WrongRetVal);
        }

        for (pos, arg) in args.iter().enumerate() {
            let slot = self.param_slot(pos);
            let param = self.vm.symbol(slot).ok_or(CallError::WrongArgType)?;
            if param.type_tag != arg.type_tag() {
                return Err(CallError::WrongArgType);
            }
        }

        Ok(sym)
    }

    /// Clear (if asked), marshal, dispatch, convert. The descriptor
    /// must come from a prior resolve of the same handle.
    pub(crate) fn execute<R: ReturnKind<V>>(
        &mut self,
        sym: Symbol,
        policy: StackPolicy,
        args: &[ScriptArg<'_, V>],
    ) -> R::Output {
        if policy == StackPolicy::Clear {
            self.vm.clear_stack();
        }

        for (pos, arg) in args.iter().enumerate() {
            self.push_one(arg, self.param_slot(pos));
        }

        match sym.entry {
            FnEntry::Trampoline(f) => f(&mut *self.vm),
            FnEntry::Bytecode(entry) => self.vm.run(entry),
        }

        R::collect(self.vm, sym.ret_tag)
    }

    fn param_slot(&self, pos: usize) -> usize {
        self.func.index() as usize + 1 + pos
    }

    /// The VM's argument-passing convention: a value cell followed by
    /// a token cell, except instance pointers, which go through the
    /// parameter symbol's data slot and push only that symbol's index.
    fn push_one(&mut self, arg: &ScriptArg<'_, V>, slot: usize) {
        match arg {
            ScriptArg::Int(v) => {
                self.vm.push(*v as Word);
                self.vm.push(TOK_PUSHINT as Word);
            }
            ScriptArg::Float(f) => {
                self.vm.push(f.to_bits() as Word);
                self.vm.push(TOK_PUSHINT as Word);
            }
            ScriptArg::Func(h) => {
                self.vm.push(h.index() as Word);
                self.vm.push(TOK_PUSHINT as Word);
            }
            ScriptArg::Str(s) => {
                self.vm.push(V::string_word(s));
                self.vm.push(TOK_PUSHSTR as Word);
            }
            ScriptArg::Instance(ptr) => {
                self.vm.store_instance(slot, *ptr);
                self.vm.push(slot as Word);
            }
        }
    }
}
