use std::fs;
use std::path::{Path, PathBuf};

use fxhash::FxHashSet;
use miette::NamedSource;
use walkdir::WalkDir;

use printpkg_ast::Package;
use printpkg_miette_util::ToMiette;
use printpkg_miette_util::codespan::{ByteIndex, LineStarts, Location, Span};

use crate::dump::PackageDump;
use crate::lower::lower;
use crate::{DumpSyntaxError, LoadError, LoadMode, Loader, Pattern, is_dump};

/// A loader that reads package dumps from the file system
pub struct DumpLoader {
    root: PathBuf,
}

impl DumpLoader {
    /// Patterns are resolved relative to `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// The dump files matched by a single pattern, in file name order
    pub fn matches(&self, pattern: &str) -> Result<Vec<PathBuf>, LoadError> {
        let not_found = || LoadError::NotFound { pattern: pattern.to_owned() };
        let Some(parsed) = Pattern::parse(pattern) else {
            return Err(LoadError::InvalidPattern { pattern: pattern.to_owned() });
        };
        let paths = match parsed {
            Pattern::Recursive(dir) => {
                let dir = self.root.join(dir);
                if !dir.is_dir() {
                    return Err(not_found());
                }
                walk(&dir, None)?
            }
            Pattern::Path(path) => {
                let path = self.root.join(path);
                if path.is_dir() {
                    walk(&path, Some(1))?
                } else if path.is_file() {
                    vec![path]
                } else {
                    return Err(not_found());
                }
            }
        };
        if paths.is_empty() {
            log::warn!("pattern `{pattern}` matched no packages");
        }
        Ok(paths)
    }

    /// Read and lower a single dump file
    pub fn load_file(&self, path: &Path, mode: LoadMode) -> Result<Package, LoadError> {
        log::debug!("Loading package dump {}", path.display());
        let text = fs::read_to_string(path)
            .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
        let dump: PackageDump =
            serde_json::from_str(&text).map_err(|err| syntax_error(path, text.clone(), &err))?;
        let pkg = lower(dump, mode)
            .map_err(|source| LoadError::Malformed { path: path.to_path_buf(), source })?;

        for error in &pkg.errors {
            log::warn!("{}: {error}", pkg.name);
        }
        log::info!("Loaded package `{}` ({}) from {}", pkg.name, pkg.path, path.display());
        Ok(pkg)
    }
}

impl Loader for DumpLoader {
    fn load(&self, mode: LoadMode, patterns: &[String]) -> Result<Vec<Package>, LoadError> {
        log::debug!("Loading {patterns:?} with {mode:?}");
        let mut seen = FxHashSet::default();
        let mut packages = Vec::new();
        for pattern in patterns {
            for path in self.matches(pattern)? {
                let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
                if !seen.insert(key) {
                    log::debug!("Skipping {}, it was already loaded", path.display());
                    continue;
                }
                packages.push(self.load_file(&path, mode)?);
            }
        }
        Ok(packages)
    }
}

fn walk(dir: &Path, max_depth: Option<usize>) -> Result<Vec<PathBuf>, LoadError> {
    let mut walker = WalkDir::new(dir).sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }
    let mut paths = Vec::new();
    for entry in walker {
        let entry =
            entry.map_err(|source| LoadError::Walk { root: dir.to_path_buf(), source })?;
        if entry.file_type().is_file() && is_dump(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

fn syntax_error(path: &Path, text: String, err: &serde_json::Error) -> LoadError {
    // serde_json reports 1-based lines and columns, and line 0 if it has no location
    let location =
        Location::new(err.line().saturating_sub(1) as u32, err.column().saturating_sub(1) as u32);
    let offset = LineStarts::from_source(&text)
        .byte_index(location)
        .map_or(text.len(), ByteIndex::to_usize)
        .min(text.len());
    let span = Span::point(ByteIndex(offset as u32)).to_miette();
    let message = strip_location(&err.to_string());
    let src = NamedSource::new(path.display().to_string(), text);
    LoadError::Syntax(Box::new(DumpSyntaxError { src, span, message }))
}

/// Drop the " at line X column Y" suffix of a serde_json message, the label shows the location
fn strip_location(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_owned(),
        None => message.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::LowerError;

    const P: &str = r#"{
        "name": "p",
        "path": "example.com/p",
        "files": [{ "name": "p.go", "base": 1, "source": "package p\n" }],
        "defs": [{ "name": "p", "pos": 9, "symbol": null }]
    }"#;

    fn package(name: &str) -> String {
        format!(r#"{{ "name": "{name}", "path": "example.com/{name}" }}"#)
    }

    fn tree() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("p.pkg.json"), P).unwrap();
        fs::write(dir.path().join("notes.json"), "{}").unwrap();
        fs::write(dir.path().join("a/a.pkg.json"), package("a")).unwrap();
        fs::write(dir.path().join("a/b/b.pkg.json"), package("b")).unwrap();
        dir
    }

    fn names(packages: &[Package]) -> Vec<&str> {
        packages.iter().map(|pkg| pkg.name.as_str()).collect()
    }

    #[test]
    fn recursive_pattern_finds_all_dumps() {
        let dir = tree();
        let loader = DumpLoader::new(dir.path());
        let packages = loader.load(LoadMode::ALL, &["./...".to_owned()]).unwrap();
        assert_eq!(names(&packages), ["a", "b", "p"]);
    }

    #[test]
    fn directory_pattern_is_not_recursive() {
        let dir = tree();
        let loader = DumpLoader::new(dir.path());
        let packages = loader.load(LoadMode::ALL, &["a".to_owned()]).unwrap();
        assert_eq!(names(&packages), ["a"]);
    }

    #[test]
    fn file_pattern_loads_file() {
        let dir = tree();
        let loader = DumpLoader::new(dir.path());
        let packages = loader.load(LoadMode::ALL, &["p.pkg.json".to_owned()]).unwrap();
        assert_eq!(names(&packages), ["p"]);
        assert_eq!(packages[0].defs.len(), 1);
    }

    #[test]
    fn overlapping_patterns_load_once() {
        let dir = tree();
        let loader = DumpLoader::new(dir.path());
        let patterns = ["a/b".to_owned(), "a/...".to_owned()];
        let packages = loader.load(LoadMode::ALL, &patterns).unwrap();
        assert_eq!(names(&packages), ["b", "a"]);
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = tree();
        let loader = DumpLoader::new(dir.path());
        let err = loader.load(LoadMode::ALL, &["missing/...".to_owned()]).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { pattern } if pattern == "missing/..."));
    }

    #[test]
    fn file_system_root_is_not_walked() {
        let dir = tree();
        let loader = DumpLoader::new(dir.path());
        let err = loader.load(LoadMode::ALL, &["/...".to_owned()]).unwrap_err();
        assert!(matches!(err, LoadError::InvalidPattern { pattern } if pattern == "/..."));
    }

    #[test]
    fn empty_directory_matches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let loader = DumpLoader::new(dir.path());
        assert!(loader.load(LoadMode::ALL, &[".".to_owned()]).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_points_at_location() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.pkg.json"), "{\n  \"name\": 3\n}").unwrap();
        let loader = DumpLoader::new(dir.path());
        let err = loader.load(LoadMode::ALL, &["bad.pkg.json".to_owned()]).unwrap_err();
        let LoadError::Syntax(err) = err else { panic!("expected a syntax error") };
        assert!(err.message.starts_with("invalid type: integer `3`"), "{}", err.message);
        // the error is reported at line 2
        assert!(err.span.offset() > 2 && err.span.offset() <= 13, "{:?}", err.span);
    }

    #[test]
    fn malformed_dump_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let dump = r#"{ "name": "p", "uses": [{ "name": "x", "pos": 1, "symbol": 0 }] }"#;
        fs::write(dir.path().join("p.pkg.json"), dump).unwrap();
        let loader = DumpLoader::new(dir.path());
        let err = loader.load(LoadMode::ALL, &[".".to_owned()]).unwrap_err();
        assert!(err.to_string().contains("p.pkg.json"), "{err}");
        let LoadError::Malformed { source, .. } = err else { panic!("expected a malformed dump") };
        assert!(matches!(source, LowerError::DanglingSymbol { symbol: 0, count: 0, .. }));
    }
}
