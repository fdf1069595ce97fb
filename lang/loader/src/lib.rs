//! Loading of packages from dump files
//!
//! The language frontend writes one `*.pkg.json` file per package, holding its
//! syntax trees, source files and the resolved definitions and uses of
//! identifiers. This crate resolves package patterns to such files and turns
//! them into [`Package`](printpkg_ast::Package) values.

mod dump;
mod fs;
mod lower;
mod mode;
mod pattern;
mod result;

pub use fs::*;
pub use mode::*;
pub use pattern::*;
pub use result::*;

use printpkg_ast::Package;

/// Resolves package patterns to fully loaded packages
pub trait Loader {
    /// Load all packages matched by `patterns`, in pattern order.
    ///
    /// Parts of a package which are not requested by `mode` are left empty.
    fn load(&self, mode: LoadMode, patterns: &[String]) -> Result<Vec<Package>, LoadError>;
}
