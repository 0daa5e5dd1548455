//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/app/assets/icon/  ← cwd
/// /home/user/app/iconprep.toml ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub(super) fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    // Walk up from start looking for config file
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("assets/icon");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("iconprep.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("iconprep.toml")).unwrap();
        assert_eq!(found, dir.path().join("iconprep.toml"));
    }

    #[test]
    fn test_absolute_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file_from(dir.path(), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_not_found() {
        let dir = TempDir::new().unwrap();
        let name = Path::new("definitely-not-a-config-9f2c.toml");
        assert_eq!(find_config_file_from(dir.path(), name), None);
    }
}
