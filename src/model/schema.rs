//! Column metadata

use serde::{Deserialize, Serialize};

/// Column metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (from header, made unique)
    pub name: String,
    /// Column index (0-based position)
    pub index: usize,
}

impl Column {
    /// Create a new column with name and index
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// Make header names unique by suffixing repeats with `.1`, `.2`, ...
pub fn dedupe_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: rustc_hash::FxHashMap<String, usize> = Default::default();
    let mut out: Vec<String> = Vec::new();

    for name in names {
        let name = name.as_ref();
        let mut candidate = name.to_string();
        let mut count = seen.get(name).copied().unwrap_or(0);
        while seen.contains_key(&candidate) {
            count += 1;
            candidate = format!("{}.{}", name, count);
        }
        seen.insert(name.to_string(), count);
        seen.entry(candidate.clone()).or_insert(0);
        out.push(candidate);
    }

    out
}
