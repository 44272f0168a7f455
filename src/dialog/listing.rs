use std::fs;
use std::path::Path;

/// Classification the dialog styles rows by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Anything that is neither a directory nor a regular file.
    Special,
    File,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Lists `dir`, directories first, then by name.
///
/// An unreadable directory yields an empty list so the dialog stays
/// navigable on its parent entry; entries that fail to stat are skipped.
/// Re-invocable: every call re-reads the directory.
pub fn list_dir(dir: &Path) -> Vec<FileEntry> {
    let Ok(read) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut entries: Vec<FileEntry> = read
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let file_type = entry.file_type().ok()?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Special
            };
            Some(FileEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                kind,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        let a_dir = a.kind == EntryKind::Directory;
        let b_dir = b.kind == EntryKind::Directory;
        b_dir.cmp(&a_dir).then_with(|| a.name.cmp(&b.name))
    });

    entries
}
