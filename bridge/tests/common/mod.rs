#![allow(dead_code)]

use std::cell::Cell;
use std::ffi::c_void;
use std::ptr;

use abi::tags::{TypeTag, FLAG_RETURN, TOK_PUSHINT, TOK_PUSHSTR, TOK_PUSHVAR, TYPE_VOID};
use abi::{FnEntry, FoldTable, OperandStack, ScriptVm, Symbol, Word};
use bridge::{call, FunctionHandle, ScriptArg, StackPolicy};

// Scripted interpreter behaviors, keyed by bytecode entry offset.
pub const ENTRY_NOP: u32 = 0;
/// Pop one (value, token) pair and push it back: the identity function
/// for int, float, string and function arguments.
pub const ENTRY_ECHO: u32 = 1;
/// Pop an instance index cell and return it as an instance reference.
pub const ENTRY_ECHO_INST: u32 = 2;
/// Take no arguments, return the int 42.
pub const ENTRY_CONST_INT: u32 = 3;
/// Issue a nested bridge call (Preserve) to `TestVm::nested` with the
/// argument 7 and return the result plus one.
pub const ENTRY_OUTER: u32 = 4;

pub struct TestSym {
    pub name: Vec<u8>,
    pub sym: Symbol,
    pub data: *mut c_void,
}

/// Minimal stand-in for the engine VM: a symbol table, a word stack
/// and a scripted interpreter. Counts bridge pushes and name reads so
/// tests can assert "no stack mutation" and "no table scan".
pub struct TestVm {
    pub symbols: Vec<TestSym>,
    pub stack: Vec<Word>,
    pub table: FoldTable,
    pub pushes: usize,
    pub runs: Vec<u32>,
    pub name_reads: Cell<usize>,
    pub nested: Option<FunctionHandle>,
}

impl TestVm {
    pub fn new() -> Self {
        // ASCII uppercasing plus one non-ASCII pair, standing in for
        // the engine's locale table.
        let table = FoldTable::from_fn(|b| match b {
            b'a'..=b'z' => b - 32,
            0xE4 => 0xC4,
            other => other,
        });
        Self {
            symbols: Vec::new(),
            stack: Vec::new(),
            table,
            pushes: 0,
            runs: Vec::new(),
            name_reads: Cell::new(0),
            nested: None,
        }
    }

    pub fn add_symbol(&mut self, name: &[u8], sym: Symbol) -> FunctionHandle {
        self.symbols.push(TestSym {
            name: name.to_vec(),
            sym,
            data: ptr::null_mut(),
        });
        FunctionHandle::new((self.symbols.len() - 1) as i32)
    }

    /// A function entry followed by its contiguous parameter symbols.
    pub fn add_function(
        &mut self,
        name: &[u8],
        ret: TypeTag,
        params: &[TypeTag],
        entry: FnEntry,
    ) -> FunctionHandle {
        let flags = if ret == TYPE_VOID { 0 } else { FLAG_RETURN };
        let handle = self.add_symbol(
            name,
            Symbol::function(ret, params.len() as u32, flags, entry),
        );
        for (i, &p) in params.iter().enumerate() {
            let mut par_name = name.to_vec();
            par_name.extend_from_slice(format!(".PAR{i}").as_bytes());
            self.add_symbol(&par_name, Symbol::variable(p));
        }
        handle
    }
}

impl OperandStack for TestVm {
    fn push(&mut self, word: Word) {
        self.pushes += 1;
        self.stack.push(word);
    }

    fn pop_int(&mut self) -> i32 {
        let tok = self.stack.pop().expect("pop_int on empty stack");
        assert_eq!(tok, TOK_PUSHINT as Word, "expected an int token");
        self.stack.pop().expect("int value cell missing") as i32
    }

    fn pop_float(&mut self) -> f32 {
        let tok = self.stack.pop().expect("pop_float on empty stack");
        assert_eq!(tok, TOK_PUSHINT as Word, "expected an int token");
        let word = self.stack.pop().expect("float value cell missing");
        f32::from_bits(word as u32)
    }

    fn pop_instance(&mut self) -> *mut c_void {
        let tok = self.stack.pop().expect("pop_instance on empty stack");
        assert_eq!(tok, TOK_PUSHVAR as Word, "expected a var token");
        let index = self.stack.pop().expect("instance index cell missing") as usize;
        self.symbols[index].data
    }

    fn clear_stack(&mut self) {
        self.stack.clear();
    }
}

impl ScriptVm for TestVm {
    type Str = String;

    fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    fn symbol(&self, index: usize) -> Option<Symbol> {
        self.symbols.get(index).map(|s| s.sym)
    }

    fn symbol_name(&self, index: usize) -> &[u8] {
        self.name_reads.set(self.name_reads.get() + 1);
        &self.symbols[index].name
    }

    fn store_instance(&mut self, index: usize, ptr: *mut c_void) {
        self.symbols[index].data = ptr;
    }

    fn pop_string(&mut self) -> String {
        let tok = self.stack.pop().expect("pop_string on empty stack");
        assert_eq!(tok, TOK_PUSHSTR as Word, "expected a string token");
        let word = self.stack.pop().expect("string cell missing");
        // The word is the address of the caller's string, exactly as
        // the bridge pushed it.
        unsafe { (*(word as *const String)).clone() }
    }

    fn string_word(s: &String) -> Word {
        s as *const String as Word
    }

    fn string_bytes(s: &String) -> &[u8] {
        s.as_bytes()
    }

    fn run(&mut self, entry: u32) {
        self.runs.push(entry);
        match entry {
            ENTRY_NOP => {}
            ENTRY_ECHO => {
                let tok = self.stack.pop().expect("echo: token missing");
                let val = self.stack.pop().expect("echo: value missing");
                self.stack.push(val);
                self.stack.push(tok);
            }
            ENTRY_ECHO_INST => {
                let index = self.stack.pop().expect("echo_inst: index missing");
                self.stack.push(index);
                self.stack.push(TOK_PUSHVAR as Word);
            }
            ENTRY_CONST_INT => {
                self.stack.push(42);
                self.stack.push(TOK_PUSHINT as Word);
            }
            ENTRY_OUTER => {
                let inner = self.nested.expect("no nested target configured");
                let value = call::<i32, _>(
                    self,
                    inner,
                    StackPolicy::Preserve,
                    &[ScriptArg::Int(7)],
                )
                .expect("nested call failed");
                self.stack.push((value + 1) as Word);
                self.stack.push(TOK_PUSHINT as Word);
            }
            other => panic!("unknown entry offset {other}"),
        }
    }

    fn fold(&self) -> &FoldTable {
        &self.table
    }
}
