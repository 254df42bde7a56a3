// --- Symbol-table ABI constants ---
// These values are fixed by the VM's compiled scripts; the bridge must
// agree with them bit-for-bit.

/// Type tag stored in a symbol-table entry.
pub type TypeTag = u32;

pub const TYPE_VOID: TypeTag = 0;
pub const TYPE_FLOAT: TypeTag = 1;
pub const TYPE_INT: TypeTag = 2;
pub const TYPE_STRING: TypeTag = 3;
pub const TYPE_CLASS: TypeTag = 4;
pub const TYPE_FUNC: TypeTag = 5;
pub const TYPE_PROTOTYPE: TypeTag = 6;
pub const TYPE_INSTANCE: TypeTag = 7;

// Operand-stack tokens. Arguments travel as (value, token) word pairs;
// the token tells the interpreter how to read the value cell back.
pub const TOK_PUSHINT: i32 = 64;
pub const TOK_PUSHVAR: i32 = 65;
pub const TOK_PUSHSTR: i32 = 66;

// Symbol flag bits.
pub const FLAG_CONST: u32 = 1 << 0;
pub const FLAG_RETURN: u32 = 1 << 1;
pub const FLAG_CLASSVAR: u32 = 1 << 2;
pub const FLAG_EXTERNAL: u32 = 1 << 3;

// Compile-time guards
const _: () = assert!(TYPE_INSTANCE < 8, "type tags must fit in 3 bits");
const _: () = assert!(TOK_PUSHINT != TOK_PUSHSTR, "tokens must be distinct");
const _: () = assert!(TOK_PUSHINT != TOK_PUSHVAR, "tokens must be distinct");
const _: () = assert!(FLAG_RETURN & FLAG_EXTERNAL == 0, "flag bits must not overlap");
