use std::path::PathBuf;

use compact_str::CompactString;

/// Index into the arena `Vec<Folder>`. Uses u32 to save memory (supports up to ~4 billion folders).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FolderId(pub u32);

impl FolderId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A file kept for layout, stored inline in its folder.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub name: CompactString,
    pub size: u64,
}

/// A single folder, stored in a flat arena.
#[derive(Debug, Clone)]
pub struct Folder {
    /// Folder name (not full path)
    pub name: CompactString,
    /// Full path
    pub path: PathBuf,
    /// Aggregated size of every file below this folder (set by `aggregate_sizes`)
    pub size: u64,
    /// Direct sub-folders, in insertion order
    pub subfolders: Vec<FolderId>,
    /// Direct files, in insertion order
    pub files: Vec<FileRecord>,
}

/// Folder hierarchy stored as a flat arena. Children always have higher
/// indices than their parents.
pub struct FolderTree {
    pub folders: Vec<Folder>,
    pub root: FolderId,
}

impl FolderTree {
    /// Create a tree holding only the root folder.
    pub fn new(root_path: PathBuf) -> Self {
        let name = root_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root_path.to_string_lossy().to_string());

        FolderTree {
            folders: vec![Folder {
                name: CompactString::new(&name),
                path: root_path,
                size: 0,
                subfolders: Vec::new(),
                files: Vec::new(),
            }],
            root: FolderId(0),
        }
    }

    /// Add a sub-folder under `parent`. Returns the new folder's ID.
    pub fn add_folder(&mut self, parent: FolderId, name: &str, path: PathBuf) -> FolderId {
        let id = FolderId(self.folders.len() as u32);
        self.folders.push(Folder {
            name: CompactString::new(name),
            path,
            size: 0,
            subfolders: Vec::new(),
            files: Vec::new(),
        });
        self.folders[parent.index()].subfolders.push(id);
        id
    }

    pub fn add_file(&mut self, folder: FolderId, name: &str, size: u64) {
        self.folders[folder.index()].files.push(FileRecord {
            name: CompactString::new(name),
            size,
        });
    }

    pub fn get(&self, id: FolderId) -> &Folder {
        &self.folders[id.index()]
    }

    /// Total number of folders, root included.
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn file_count(&self) -> usize {
        self.folders.iter().map(|f| f.files.len()).sum()
    }
}
