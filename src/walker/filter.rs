use std::path::Path;

use super::entry::EntryInfo;

/// Decide whether an entry is skipped.
///
/// Rules, first match wins:
/// 1. directories are always skipped
/// 2. files smaller than `min_size` are skipped
/// 3. when `required_ext` is non-empty, files whose extension differs are skipped
///
/// The extension comparison is exact and case-sensitive, leading dot included.
pub fn filter_out(path: &Path, min_size: u64, required_ext: &str, info: &EntryInfo) -> bool {
    if info.is_dir || info.size < min_size {
        return true;
    }

    !required_ext.is_empty() && required_ext.as_bytes() != extension(path)
}

/// Extension of the final path segment, leading dot included.
///
/// Everything from the last `.` of the file name, or empty when there is no
/// dot. Unlike [`Path::extension`], `.bashrc` yields `.bashrc` and `file.`
/// yields `.`.
fn extension(path: &Path) -> &[u8] {
    let Some(name) = path.file_name() else {
        return &[];
    };
    let name = name.as_encoded_bytes();

    match name.iter().rposition(|&b| b == b'.') {
        Some(dot) => &name[dot..],
        None => &[],
    }
}
