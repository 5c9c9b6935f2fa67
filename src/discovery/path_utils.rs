use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// Recursively collect every non-directory path under `root` whose file name
/// ends with `suffix`.
///
/// No ignore rules apply: hidden files and `.gitignore`d files are included.
/// Entries are yielded in file-name order within each directory. The first
/// entry that cannot be read aborts the walk.
pub fn find_files(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut result_paths = Vec::new();

    for entry in builder.build() {
        let entry = entry?;

        let is_dir = entry.file_type().is_some_and(|file_type| file_type.is_dir());
        if is_dir {
            continue;
        }

        if has_suffix(entry.path(), suffix) {
            result_paths.push(entry.into_path());
        }
    }

    Ok(result_paths)
}

/// Case-sensitive suffix match on the final path component. A file named
/// exactly `.tsv` matches `.tsv`, unlike `Path::extension`.
fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
}
