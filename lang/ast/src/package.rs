use std::fmt;

use crate::{Ident, Node, PositionTable, Symbol, SymbolId};

/// A fully resolved compilation unit as delivered by the frontend
#[derive(Debug, Clone, Default)]
pub struct Package {
    /// The package name, used as key in the `PackageSet`
    pub name: String,
    /// The import path of the package
    pub path: String,
    pub positions: PositionTable,
    pub syntax: Vec<Node>,
    /// Paths of the packages imported by this package
    pub imports: Vec<String>,
    /// Errors the frontend reported while loading this package
    pub errors: Vec<String>,
    /// Arena of all symbols referenced by `defs` and `uses`
    pub symbols: Vec<Symbol>,
    pub defs: ResolutionTable,
    pub uses: ResolutionTable,
}

impl Package {
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0]
    }

    pub fn table(&self, table: Table) -> &ResolutionTable {
        match table {
            Table::Defs => &self.defs,
            Table::Uses => &self.uses,
        }
    }

    /// All occurrences of the given table together with the symbol they resolve to
    pub fn resolutions(&self, table: Table) -> impl Iterator<Item = (&Ident, Option<&Symbol>)> {
        self.table(table)
            .entries()
            .iter()
            .map(|entry| (&entry.ident, entry.symbol.map(|id| self.symbol(id))))
    }
}

/// The two resolution tables of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Occurrences which declare a symbol
    Defs,
    /// Occurrences which refer to a symbol declared elsewhere
    Uses,
}

impl Table {
    pub fn as_str(self) -> &'static str {
        match self {
            Table::Defs => "defs",
            Table::Uses => "uses",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps identifier occurrences to the symbol they resolve to
///
/// An occurrence is identified by its slot in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionTable {
    entries: Vec<Resolution>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub ident: Ident,
    /// `None` if the frontend failed to resolve the occurrence
    pub symbol: Option<SymbolId>,
}

impl ResolutionTable {
    pub fn insert(&mut self, ident: Ident, symbol: Option<SymbolId>) {
        self.entries.push(Resolution { ident, symbol });
    }

    pub fn entries(&self) -> &[Resolution] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
