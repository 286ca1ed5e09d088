// utils crate

use std::io;
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` segments and fold `..` into the
/// preceding segment. Never touches the filesystem, so symlinks are not
/// resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            Component::Normal(segment) => normalized.push(segment),
        }
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Absolute, normalized form of `path`, joined onto the current directory
/// when relative
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize_path(path))
    } else {
        Ok(normalize_path(&std::env::current_dir()?.join(path)))
    }
}

/// The absolute directory containing a crontab file. Relative script paths
/// on its lines are resolved against this directory.
pub fn crontab_dir(file_path: &Path) -> io::Result<PathBuf> {
    let absolute = absolute_path(file_path)?;
    Ok(match absolute.parent() {
        Some(parent) => parent.to_path_buf(),
        None => absolute,
    })
}

/// Resolve a script path token against the crontab directory. Absolute
/// tokens are returned unchanged.
pub fn resolve_path(script_path: &str, crontab_dir: &Path) -> PathBuf {
    let path = Path::new(script_path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        normalize_path(&crontab_dir.join(path))
    }
}
