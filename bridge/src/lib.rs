pub mod args;
pub mod cache;
pub mod call;
mod context;
pub mod error;
pub mod handle;

pub use args::{Ignore, ReturnKind, ScriptArg, VmStr, Void};
pub use cache::{find_symbol, NameCache};
pub use call::{call, call_by_name, call_by_name_bytes, call_by_vm_string, call_unchecked, StackPolicy};
pub use error::CallError;
pub use handle::FunctionHandle;
