//! Dumps the syntax trees of a loaded package in a generic, nested form
//!
//! Every object node is printed as its kind followed by its non-null fields
//! in braces, lists are printed with the index of each element and raw
//! positions are resolved through the position table of the package.

use std::io;

use printpkg_ast::Package;

mod node;
mod package;
mod print_to_string;
pub mod tokens;
mod types;

pub use print_to_string::*;
pub use types::*;

pub const DEFAULT_WIDTH: usize = 100;

pub trait PrintExt {
    fn print<W: io::Write>(&self, cfg: &PrintCfg, out: &mut W) -> io::Result<()>;
}

impl<T: for<'a> Print<'a>> PrintExt for T {
    fn print<W: io::Write>(&self, cfg: &PrintCfg, out: &mut W) -> io::Result<()> {
        let alloc = Alloc::new();
        let doc_builder = T::print(self, cfg, &alloc);
        doc_builder.1.render(cfg.width, out)?;
        writeln!(out)
    }
}

/// Write the syntax tree dump of `pkg` to `out`
///
/// Fails only if writing to `out` fails.
pub fn print_package<W: io::Write>(out: &mut W, pkg: &Package) -> io::Result<()> {
    PrintExt::print(pkg, &PrintCfg::default(), out)
}
