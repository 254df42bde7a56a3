use std::collections::HashMap;

use abi::ScriptVm;

use crate::handle::FunctionHandle;

/// Per-VM-instance memo of resolved function names.
///
/// Keys are names normalized through the VM's fold table, so they are
/// raw bytes rather than guaranteed UTF-8. One cache belongs to
/// exactly one VM instance; the embedder keeps them together. Entries
/// are appended, never evicted — correct as long as the VM never
/// rebinds a cached name to a different symbol index, which compiled
/// script tables do not do.
#[derive(Default)]
pub struct NameCache {
    entries: HashMap<Vec<u8>, FunctionHandle>,
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, folded: &[u8]) -> Option<FunctionHandle> {
        self.entries.get(folded).copied()
    }

    pub fn insert(&mut self, folded: Vec<u8>, handle: FunctionHandle) {
        self.entries.insert(folded, handle);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Linear symbol-table scan for an already-folded name.
///
/// Scans in table order; the first exact match (lowest index) wins,
/// matching the VM's own lookup. Stored names are folded on the fly,
/// so the scan never allocates.
pub fn find_symbol<V: ScriptVm>(vm: &V, folded: &[u8]) -> Option<FunctionHandle> {
    let table = vm.fold();
    (0..vm.symbol_count())
        .find(|&i| table.eq_folded(vm.symbol_name(i), folded))
        .map(|i| FunctionHandle::new(i as i32))
}
