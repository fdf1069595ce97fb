use std::path::{Path, PathBuf};

/// Suffix of the file names of package dumps
pub const DUMP_SUFFIX: &str = ".pkg.json";

/// The recursive wildcard, e.g. `./...`
const WILDCARD: &str = "...";

/// A package selector given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// `dir/...`: all package dumps below `dir`
    Recursive(PathBuf),
    /// A single dump file, or all package dumps directly inside a directory
    Path(PathBuf),
}

impl Pattern {
    /// Returns `None` for `/...`, which would walk the whole file system
    pub fn parse(pattern: &str) -> Option<Self> {
        if pattern == WILDCARD {
            return Some(Pattern::Recursive(PathBuf::from(".")));
        }
        let pattern = match pattern.strip_suffix(WILDCARD).and_then(|dir| dir.strip_suffix('/')) {
            Some("") => return None,
            Some(dir) => Pattern::Recursive(PathBuf::from(dir)),
            None => Pattern::Path(PathBuf::from(pattern)),
        };
        Some(pattern)
    }
}

pub fn is_dump(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.len() > DUMP_SUFFIX.len() && name.ends_with(DUMP_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recursive() {
        assert_eq!(Pattern::parse("./..."), Some(Pattern::Recursive(PathBuf::from("."))));
        assert_eq!(Pattern::parse("..."), Some(Pattern::Recursive(PathBuf::from("."))));
        assert_eq!(Pattern::parse("a/b/..."), Some(Pattern::Recursive(PathBuf::from("a/b"))));
    }

    #[test]
    fn parse_path() {
        assert_eq!(Pattern::parse("a/b"), Some(Pattern::Path(PathBuf::from("a/b"))));
        assert_eq!(Pattern::parse("a..."), Some(Pattern::Path(PathBuf::from("a..."))));
    }

    #[test]
    fn file_system_root_is_rejected() {
        assert_eq!(Pattern::parse("/..."), None);
        assert_eq!(Pattern::parse("/"), Some(Pattern::Path(PathBuf::from("/"))));
    }

    #[test]
    fn dump_file_names() {
        assert!(is_dump(Path::new("dir/p.pkg.json")));
        assert!(!is_dump(Path::new("dir/.pkg.json")));
        assert!(!is_dump(Path::new("dir/p.json")));
    }
}
