use std::fmt;
use std::io;

use printpkg_ast::{Package, PackageSet, Table};

use crate::Line;

/// The label in front of every reported line, e.g. `[p][defs]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix<'a> {
    pub package: &'a str,
    pub table: Table,
}

impl fmt::Display for Prefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.package, self.table)
    }
}

/// Writes the resolution tables of one package
pub struct Reporter<'a, W> {
    pkg: &'a Package,
    packages: &'a PackageSet<'a>,
    out: W,
}

impl<'a, W: io::Write> Reporter<'a, W> {
    pub fn new(pkg: &'a Package, packages: &'a PackageSet<'a>, out: W) -> Self {
        Self { pkg, packages, out }
    }

    /// Report the definitions, then the uses
    pub fn report_all(&mut self) -> io::Result<()> {
        self.report(Table::Defs)?;
        self.report(Table::Uses)
    }

    /// Write one line per entry of `table`
    ///
    /// Fails only if writing fails. Unresolved entries are reported, not raised.
    pub fn report(&mut self, table: Table) -> io::Result<()> {
        let pkg = self.pkg;
        let prefix = Prefix { package: &pkg.name, table };
        for (ident, symbol) in pkg.resolutions(table) {
            let line = Line::classify(pkg, ident, symbol, self.packages);
            if let Line::Unresolved { at } = &line {
                log::debug!("{prefix} `{}` at {at} is unresolved", ident.name);
            }
            writeln!(self.out, "{prefix} {line}")?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
