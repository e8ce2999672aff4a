// crates/shared-kernel/src/value_objects/store_id.rs
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    path::Path,
};

/// Store identifier taken from the directory that holds a sales file.
///
/// Equality, hashing and ordering all go through [`StoreId::folded`], so
/// grouping and report ordering can never disagree about which ids are the
/// same store. The original casing is kept for display.
#[derive(Debug, Clone, Default)]
#[repr(transparent)]
pub struct StoreId(String);

impl StoreId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Name of the immediate parent directory of `path`.
    ///
    /// Paths without a named parent (`"a.json"`, `"/a.json"`) map to the empty id.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .parent()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-folded view of the identifier, upper-casing each char.
    ///
    /// The fold is one char to one char: a char whose upper case expands
    /// (`ß` → `SS`) is kept as is.
    pub fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().map(fold_char)
    }

    /// Case-insensitive ordinal comparison.
    #[must_use]
    pub fn cmp_ignore_case(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

fn fold_char(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

impl PartialEq for StoreId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_ignore_case(other) == Ordering::Equal
    }
}

impl Eq for StoreId {}

impl PartialOrd for StoreId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StoreId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_ignore_case(other)
    }
}

impl Hash for StoreId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for ch in self.folded() {
            ch.hash(state);
        }
        // terminator keeps ("ab", "c") and ("a", "bc") distinct in composite keys
        state.write_u8(0xff);
    }
}

impl From<&str> for StoreId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StoreId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for StoreId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
