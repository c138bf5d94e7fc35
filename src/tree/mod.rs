pub mod aggregate;
pub mod arena;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use compact_str::CompactString;

use self::arena::{FolderId, FolderTree};
use crate::layout::TreeMapNode;
use crate::scanner::types::RawFileEntry;

/// Settings for turning scan results into layout input.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Files smaller than this many bytes are left out entirely
    pub min_file_size: u64,
    /// Label of the synthetic node grouping a folder's direct files
    pub files_label: CompactString,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            min_file_size: 100_000,
            files_label: CompactString::new("<files>"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
    /// The direct files of one folder, grouped
    FileGroup,
}

/// Payload carried by every layout node built from a scan.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub size: u64,
    pub kind: EntryKind,
}

impl FileEntry {
    /// Text for tooltips: path and byte count with thousands separators.
    pub fn hover_text(&self) -> String {
        format!("{} - {}", self.path.display(), group_thousands(self.size))
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Build a folder tree from scan entries below `root_path`.
///
/// Only files of at least `min_file_size` bytes are kept, and only folders on
/// the path to a kept file are created.
pub fn build_tree(entries: &[RawFileEntry], root_path: &Path, config: &TreeConfig) -> FolderTree {
    let mut tree = FolderTree::new(root_path.to_path_buf());
    let mut path_map: HashMap<PathBuf, FolderId> = HashMap::new();
    path_map.insert(root_path.to_path_buf(), tree.root);

    let mut skipped = 0usize;
    for entry in entries.iter().filter(|e| !e.is_dir) {
        if entry.size < config.min_file_size {
            skipped += 1;
            continue;
        }
        let Some(name) = entry.path.file_name() else {
            continue;
        };
        let parent_path = entry.path.parent().unwrap_or(Path::new(""));
        let parent = ensure_folder(&mut tree, &mut path_map, parent_path);
        tree.add_file(parent, &name.to_string_lossy(), entry.size);
    }

    aggregate::aggregate_sizes(&mut tree);

    tracing::info!(
        "Tree built: {} folders, {} files kept, {} below {} bytes skipped, {:.2} GB",
        tree.folder_count(),
        tree.file_count(),
        skipped,
        config.min_file_size,
        tree.get(tree.root).size as f64 / 1_073_741_824.0
    );

    tree
}

/// Ensure a folder exists at `path`, creating intermediate folders as needed.
/// Iterative, so deep paths cannot overflow the stack. Paths outside the root
/// attach to the root.
fn ensure_folder(
    tree: &mut FolderTree,
    path_map: &mut HashMap<PathBuf, FolderId>,
    path: &Path,
) -> FolderId {
    if let Some(&id) = path_map.get(path) {
        return id;
    }

    // Collect missing ancestors from the target upward
    let mut missing = Vec::new();
    let mut current = path;
    loop {
        if path_map.contains_key(current) {
            break;
        }
        missing.push(current.to_path_buf());
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent,
            _ => break,
        }
    }

    let mut last_id = tree.root;
    for ancestor in missing.into_iter().rev() {
        let parent_id = ancestor
            .parent()
            .and_then(|p| path_map.get(p).copied())
            .unwrap_or(tree.root);
        let name = ancestor
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let id = tree.add_folder(parent_id, &name, ancestor.clone());
        path_map.insert(ancestor, id);
        last_id = id;
    }

    last_id
}

/// The folder the view starts at: walk down from the root while a folder has
/// no files of its own and exactly one sub-folder.
pub fn base_folder(tree: &FolderTree) -> FolderId {
    let mut id = tree.root;
    loop {
        let folder = tree.get(id);
        match folder.subfolders.as_slice() {
            [only] if folder.files.is_empty() => id = *only,
            _ => return id,
        }
    }
}

/// Convert one folder (and everything below it) into a layout node.
///
/// A folder's children are a `<files>` group holding its direct files (when it
/// has any) followed by its sub-folders.
pub fn folder_node(tree: &FolderTree, id: FolderId, config: &TreeConfig) -> TreeMapNode<FileEntry> {
    let folder = tree.get(id);
    let mut children = Vec::with_capacity(folder.subfolders.len() + 1);

    if !folder.files.is_empty() {
        let file_nodes: Vec<TreeMapNode<FileEntry>> = folder
            .files
            .iter()
            .map(|f| {
                let path = folder.path.join(f.name.as_str());
                let label = path.to_string_lossy().to_string();
                TreeMapNode::leaf(
                    f.size as f64,
                    &label,
                    FileEntry {
                        path,
                        size: f.size,
                        kind: EntryKind::File,
                    },
                )
            })
            .collect();
        let files_size: u64 = folder.files.iter().map(|f| f.size).sum();
        let path = folder.path.join(config.files_label.as_str());
        let label = path.to_string_lossy().to_string();
        children.push(TreeMapNode::new(
            files_size as f64,
            &label,
            FileEntry {
                path,
                size: files_size,
                kind: EntryKind::FileGroup,
            },
            file_nodes,
        ));
    }

    children.extend(
        folder
            .subfolders
            .iter()
            .map(|&sub| folder_node(tree, sub, config)),
    );

    TreeMapNode::new(
        folder.size as f64,
        &folder.path.to_string_lossy(),
        FileEntry {
            path: folder.path.clone(),
            size: folder.size,
            kind: EntryKind::Folder,
        },
        children,
    )
}

/// Top-level layout input for a scanned tree: the children of the base folder.
pub fn layout_inputs(tree: &FolderTree, config: &TreeConfig) -> Vec<TreeMapNode<FileEntry>> {
    let base = base_folder(tree);
    tracing::debug!("Base folder: {}", tree.get(base).path.display());
    folder_node(tree, base, config).children
}
