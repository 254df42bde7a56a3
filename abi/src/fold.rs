/// The VM's fixed 256-entry byte folding table.
///
/// Symbol comparison inside the VM folds every byte through this table
/// before comparing, including non-ASCII bytes. The bridge must use the
/// exact same table for its name cache keys, or cached lookups would
/// diverge from a fresh symbol-table scan.
#[derive(Clone)]
pub struct FoldTable {
    map: [u8; 256],
}

impl FoldTable {
    pub const fn new(map: [u8; 256]) -> Self {
        Self { map }
    }

    /// Build a table from a byte mapping function.
    pub fn from_fn(mut f: impl FnMut(u8) -> u8) -> Self {
        let mut map = [0u8; 256];
        let mut i = 0usize;
        while i < 256 {
            map[i] = f(i as u8);
            i += 1;
        }
        Self { map }
    }

    #[inline]
    pub fn fold_byte(&self, b: u8) -> u8 {
        self.map[b as usize]
    }

    /// Normalized form of a name, used as the cache key.
    pub fn fold(&self, name: &[u8]) -> Vec<u8> {
        name.iter().map(|&b| self.fold_byte(b)).collect()
    }

    /// Compare a raw stored name against an already-folded key without
    /// allocating.
    pub fn eq_folded(&self, raw: &[u8], folded: &[u8]) -> bool {
        raw.len() == folded.len()
            && raw
                .iter()
                .zip(folded)
                .all(|(&r, &f)| self.fold_byte(r) == f)
    }
}
