use super::arena::FolderTree;

/// Compute aggregated sizes for all folders (bottom-up).
/// After this, each folder's `size` equals the sum of all files below it.
pub fn aggregate_sizes(tree: &mut FolderTree) {
    // Children always have higher indices than their parents (see `add_folder`),
    // so a reverse sweep sees every sub-folder before its parent.
    for i in (0..tree.folders.len()).rev() {
        let folder = &tree.folders[i];
        let files: u64 = folder.files.iter().map(|f| f.size).sum();
        let subfolders: u64 = folder
            .subfolders
            .iter()
            .map(|id| tree.folders[id.index()].size)
            .sum();
        tree.folders[i].size = files + subfolders;
    }
}
