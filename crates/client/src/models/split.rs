//! CSV split archive model.

/// A split result held in memory until saved or released.
#[derive(Clone, PartialEq, Eq)]
pub struct SplitArchive {
    /// Basename suggested by the server (or the fallback name).
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SplitArchive {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Reduce a suggested file name to a safe basename.
///
/// Directory parts (either separator) are dropped; empty and dot-only names
/// yield `None`.
pub fn safe_file_name(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name).trim();
    if base.is_empty() || base.chars().all(|c| c == '.') {
        None
    } else {
        Some(base.to_string())
    }
}

impl std::fmt::Debug for SplitArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitArchive")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
