use std::io::Write;
use std::process::ExitCode;

use miette::IntoDiagnostic;

use printpkg_ast::PackageSet;
use printpkg_loader::{LoadMode, Loader};
use printpkg_printer::print_package;
use printpkg_report::Reporter;

use crate::settings::Settings;

pub const USAGE: &str = "\
printpkg - print package syntax trees to stdout, defs and uses to stderr
Usage:
  printpkg PATTERNS...
    e.g. printpkg ./...
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    /// No patterns were given, only the usage was printed
    Usage,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Printed => ExitCode::SUCCESS,
            Outcome::Usage => ExitCode::FAILURE,
        }
    }
}

/// Load the packages matched by the patterns in `settings` and print each of them
///
/// For every package, in load order, the syntax trees are written to `out`,
/// followed by the definitions and uses written to `err`.
pub fn run<L, O, E>(
    loader: &L,
    settings: &Settings,
    out: &mut O,
    err: &mut E,
) -> miette::Result<Outcome>
where
    L: Loader,
    O: Write,
    E: Write,
{
    if settings.patterns.is_empty() {
        err.write_all(USAGE.as_bytes()).into_diagnostic()?;
        err.flush().into_diagnostic()?;
        return Ok(Outcome::Usage);
    }

    let packages = loader.load(LoadMode::ALL, &settings.patterns)?;
    log::debug!("Loaded {} packages", packages.len());
    let set = PackageSet::new(&packages);

    for pkg in &packages {
        print_package(out, pkg).into_diagnostic()?;
        out.flush().into_diagnostic()?;
        Reporter::new(pkg, &set, &mut *err).report_all().into_diagnostic()?;
        err.flush().into_diagnostic()?;
    }
    Ok(Outcome::Printed)
}

#[cfg(test)]
mod tests {
    use printpkg_ast::*;
    use printpkg_loader::LoadError;

    use super::*;

    struct Unreachable;

    impl Loader for Unreachable {
        fn load(&self, _mode: LoadMode, _patterns: &[String]) -> Result<Vec<Package>, LoadError> {
            panic!("the loader must not be called")
        }
    }

    struct Fixed(fn() -> Vec<Package>);

    impl Loader for Fixed {
        fn load(&self, mode: LoadMode, _patterns: &[String]) -> Result<Vec<Package>, LoadError> {
            assert_eq!(mode, LoadMode::ALL);
            Ok((self.0)())
        }
    }

    struct Missing;

    impl Loader for Missing {
        fn load(&self, _mode: LoadMode, patterns: &[String]) -> Result<Vec<Package>, LoadError> {
            Err(LoadError::NotFound { pattern: patterns[0].clone() })
        }
    }

    fn settings(patterns: &[&str]) -> Settings {
        Settings {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            log_level: log::LevelFilter::Off,
        }
    }

    /// `package lib; var Answer = 42` and `package q; var _ = lib.Answer`
    fn packages() -> Vec<Package> {
        let answer = Symbol {
            pkg: Some("lib".to_owned()),
            pos: Pos(18),
            repr: "var lib.Answer int".to_owned(),
            ty: Some(TypeKind::Basic),
        };
        let mut lib = Package {
            name: "lib".to_owned(),
            path: "example.com/lib".to_owned(),
            positions: PositionTable::new(vec![SourceFile::from_source(
                "lib.go",
                Pos(1),
                "package lib\n\nvar Answer = 42\n",
            )]),
            symbols: vec![answer.clone()],
            ..Default::default()
        };
        lib.defs.insert(Ident::new("Answer", Pos(18)), Some(SymbolId(0)));

        let mut q = Package {
            name: "q".to_owned(),
            path: "example.com/q".to_owned(),
            positions: PositionTable::new(vec![SourceFile::from_source(
                "q.go",
                Pos(100),
                "package q\n\nvar _ = lib.Answer\n",
            )]),
            symbols: vec![answer],
            ..Default::default()
        };
        q.uses.insert(Ident::new("Answer", Pos(123)), Some(SymbolId(0)));
        vec![lib, q]
    }

    #[test]
    fn no_patterns_prints_usage_without_loading() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let outcome = run(&Unreachable, &settings(&[]), &mut out, &mut err).unwrap();
        assert_eq!(outcome, Outcome::Usage);
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), USAGE);
    }

    #[test]
    fn packages_are_printed_in_load_order() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let outcome = run(&Fixed(packages), &settings(&["./..."]), &mut out, &mut err).unwrap();
        assert_eq!(outcome, Outcome::Printed);

        let out = String::from_utf8(out).unwrap();
        let names: Vec<_> = out.lines().filter(|line| line.starts_with("    Name: ")).collect();
        assert_eq!(names, ["    Name: \"lib\"", "    Name: \"q\""]);

        let err = String::from_utf8(err).unwrap();
        assert_eq!(err, "\
[lib][defs] lib.go:3:5 (18) lib var lib.Answer int Basic
[q][uses] q.go:3:13 (123) => lib lib.go:3:5 (18) var lib.Answer int Basic
");
    }

    #[test]
    fn loader_errors_are_fatal() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let report = run(&Missing, &settings(&["nowhere"]), &mut out, &mut err).unwrap_err();
        assert!(report.to_string().contains("nowhere"), "{report}");
        assert!(out.is_empty() && err.is_empty());
    }
}
