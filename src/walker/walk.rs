use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;

use super::entry::EntryInfo;

/// Visit `root` and every entry below it, calling `visit` once per entry.
///
/// Directories are visited before their contents and siblings in file name
/// order. Symlinks, the root included, are reported as themselves and never
/// followed. The first traversal error or handler error stops the walk and is
/// returned as is.
///
/// The root is reported exactly as given. Every other entry is reported as
/// the lexically cleaned root joined with its root-relative path, so a root
/// of `./logs` yields `logs/app.log` and a root of `.` yields `app.log`.
pub fn walk<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&EntryInfo) -> Result<()>,
{
    let cleaned_root = clean(root);
    let walker = WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false)
        .sort_by_file_name();

    for result in walker {
        let entry = result?;
        let metadata = entry.metadata()?;

        let path = if entry.depth() == 0 {
            entry.path().to_path_buf()
        } else {
            child_path(&cleaned_root, root, entry.path())
        };

        let info = EntryInfo {
            path,
            is_dir: metadata.is_dir(),
            size: metadata.len(),
        };

        visit(&info)?;
    }

    Ok(())
}

fn child_path(cleaned_root: &Path, root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(relative) => cleaned_root.join(relative),
        Err(_) => path.to_path_buf(),
    }
}

/// Lexically clean a path: drop `.` components and redundant separators and
/// fold `name/..` pairs. The filesystem is never consulted. A path that
/// cleans away entirely becomes empty, so joining onto it yields the child
/// alone.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                // `..` at the filesystem root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalkDelError;
    use std::fs::{self, File};
    use std::io::{self, Write};
    use tempfile::TempDir;

    fn create_test_structure() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::create_dir(root.join("b_dir")).unwrap();
        File::create(root.join("b_dir/inner.txt"))
            .unwrap()
            .write_all(b"nested content")
            .unwrap();
        File::create(root.join("a.txt"))
            .unwrap()
            .write_all(b"alpha")
            .unwrap();
        File::create(root.join("c.log")).unwrap();

        dir
    }

    fn collect(root: &Path) -> Result<Vec<EntryInfo>> {
        let mut seen = Vec::new();
        walk(root, |info| {
            seen.push(info.clone());
            Ok(())
        })?;
        Ok(seen)
    }

    #[test]
    fn test_walk_is_preorder_and_sorted() {
        let dir = create_test_structure();
        let root = dir.path();

        let paths: Vec<PathBuf> = collect(root).unwrap().into_iter().map(|e| e.path).collect();

        assert_eq!(
            paths,
            vec![
                root.to_path_buf(),
                root.join("a.txt"),
                root.join("b_dir"),
                root.join("b_dir/inner.txt"),
                root.join("c.log"),
            ]
        );
    }

    #[test]
    fn test_walk_reports_metadata() {
        let dir = create_test_structure();
        let entries = collect(dir.path()).unwrap();

        assert!(entries[0].is_dir);
        let a = entries.iter().find(|e| e.path.ends_with("a.txt")).unwrap();
        assert!(!a.is_dir);
        assert_eq!(a.size, 5);
        let c = entries.iter().find(|e| e.path.ends_with("c.log")).unwrap();
        assert_eq!(c.size, 0);
    }

    #[test]
    fn test_walk_empty_directory_visits_root_only() {
        let dir = TempDir::new().unwrap();
        let entries = collect(dir.path()).unwrap();

        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_dir);
    }

    #[test]
    fn test_walk_file_root_is_single_entry() {
        let dir = create_test_structure();
        let file = dir.path().join("a.txt");

        let entries = collect(&file).unwrap();

        assert_eq!(entries, vec![EntryInfo::file(file, 5)]);
    }

    #[test]
    fn test_walk_nonexistent_root() {
        let result = collect(Path::new("/nonexistent/path/12345"));
        assert!(matches!(result, Err(WalkDelError::Walk(_))));
    }

    #[test]
    fn test_handler_error_stops_walk() {
        let dir = create_test_structure();
        let mut visited = 0;

        let result = walk(dir.path(), |info| {
            visited += 1;
            if info.path.ends_with("a.txt") {
                return Err(WalkDelError::Write(io::Error::other("stop")));
            }
            Ok(())
        });

        assert!(matches!(result, Err(WalkDelError::Write(_))));
        // root, then a.txt
        assert_eq!(visited, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_follow_symlinks() {
        let dir = create_test_structure();
        let root = dir.path();
        std::os::unix::fs::symlink(root.join("b_dir"), root.join("link")).unwrap();

        let entries = collect(root).unwrap();

        let link = entries.iter().find(|e| e.path.ends_with("link")).unwrap();
        assert!(!link.is_dir);
        assert!(!entries
            .iter()
            .any(|e| e.path.starts_with(root.join("link")) && e.path != root.join("link")));
    }

    #[test]
    fn test_clean_paths() {
        assert_eq!(clean(Path::new(".")), PathBuf::new());
        assert_eq!(clean(Path::new("./")), PathBuf::new());
        assert_eq!(clean(Path::new("./tests")), PathBuf::from("tests"));
        assert_eq!(clean(Path::new("a//b/./c/")), PathBuf::from("a/b/c"));
        assert_eq!(clean(Path::new("a/../b")), PathBuf::from("b"));
        assert_eq!(clean(Path::new("a/..")), PathBuf::new());
        assert_eq!(clean(Path::new("../x/../..")), PathBuf::from("../.."));
        assert_eq!(clean(Path::new("/../etc")), PathBuf::from("/etc"));
        assert_eq!(clean(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_child_path_uses_cleaned_root() {
        let cases = [
            (".", "./ten.txt", "ten.txt"),
            ("./", "./a/b.txt", "a/b.txt"),
            ("./tests", "./tests/ten.txt", "tests/ten.txt"),
            ("tests", "tests/ten.txt", "tests/ten.txt"),
            ("x//y", "x//y/ten.txt", "x/y/ten.txt"),
            ("a/../b", "a/../b/ten.txt", "b/ten.txt"),
            ("/", "/etc", "/etc"),
        ];

        for (root, path, expected) in cases {
            let root = Path::new(root);
            assert_eq!(
                child_path(&clean(root), root, Path::new(path)),
                PathBuf::from(expected),
                "root {:?}",
                root
            );
        }
    }

    #[test]
    fn test_walk_reports_root_as_given() {
        let dir = create_test_structure();
        let root = dir.path().join("b_dir/.");

        let paths: Vec<PathBuf> = collect(&root).unwrap().into_iter().map(|e| e.path).collect();

        assert_eq!(paths, vec![root, dir.path().join("b_dir/inner.txt")]);
    }
}
