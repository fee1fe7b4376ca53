//! Tool lookup on a search path.
//!
//! Lookup walks PATH entries directly instead of shelling out to `which`,
//! whose behavior varies across systems.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// File names a tool may have on disk.
fn candidate_names(tool: &str) -> Vec<String> {
    if cfg!(target_os = "windows") && Path::new(tool).extension().is_none() {
        ["", ".exe", ".bat", ".cmd"]
            .iter()
            .map(|ext| format!("{}{}", tool, ext))
            .collect()
    } else {
        vec![tool.to_string()]
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Whether a tool value names a path rather than a bare command.
pub fn is_path_like(tool: &str) -> bool {
    tool.contains('/') || tool.contains(std::path::MAIN_SEPARATOR)
}

/// Split a PATH-style value into directories.
pub fn split_path(value: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| split_path(&path))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    #[cfg(unix)]
    fn resolves_first_matching_entry() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        make_executable(&first.path().join("flake8"));
        make_executable(&second.path().join("flake8"));

        let found = resolve_tool_path(
            "flake8",
            &[first.path().to_path_buf(), second.path().to_path_buf()],
        );

        assert_eq!(found, Some(first.path().join("flake8")));
    }

    #[test]
    #[cfg(unix)]
    fn skips_non_executable_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("flake8"), "not a program").unwrap();

        assert!(resolve_tool_path("flake8", &[dir.path().to_path_buf()]).is_none());
    }

    #[test]
    fn missing_tool_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(resolve_tool_path("no-such-linter", &[dir.path().to_path_buf()]).is_none());
    }

    #[test]
    fn path_like_tools() {
        assert!(is_path_like("tools/lint.sh"));
        assert!(is_path_like("/usr/bin/flake8"));
        assert!(!is_path_like("flake8"));
    }

    #[test]
    #[cfg(unix)]
    fn split_path_drops_empty_entries() {
        let entries = split_path(OsStr::new("/usr/bin::/bin"));
        assert_eq!(
            entries,
            vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]
        );
    }
}
