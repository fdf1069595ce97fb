use printpkg_ast::{Package, PackageSet, Pos, Position, Symbol};

/// Package name shown for symbols without a declaring package
pub const BUILTIN: &str = "builtin";

/// File name shown for the declaration of builtin symbols
pub const UNKNOWN_FILE: &str = "unknown";

/// Where the declaration of a symbol can be located
#[derive(Debug, Clone, Copy)]
pub enum DeclSite<'a> {
    /// The symbol is predeclared by the language
    Builtin,
    /// The declaring package was loaded and its position table is available
    Loaded(&'a Package),
    /// The declaring package is known by name only
    Unloaded(&'a str),
}

impl<'a> DeclSite<'a> {
    pub fn of(symbol: &'a Symbol, packages: &PackageSet<'a>) -> Self {
        match symbol.pkg.as_deref() {
            None => DeclSite::Builtin,
            Some(name) => match packages.get(name) {
                Some(pkg) => DeclSite::Loaded(pkg),
                None => DeclSite::Unloaded(name),
            },
        }
    }

    pub fn package_name(&self) -> &'a str {
        match *self {
            DeclSite::Builtin => BUILTIN,
            DeclSite::Loaded(pkg) => &pkg.name,
            DeclSite::Unloaded(name) => name,
        }
    }

    /// Resolve the raw position of a declaration
    ///
    /// Raw positions are only meaningful in the table of the package that
    /// recorded them, so only a loaded declaring package yields line and column.
    pub fn position(&self, pos: Pos) -> Position {
        match *self {
            DeclSite::Builtin => Position::file_only(UNKNOWN_FILE),
            DeclSite::Loaded(pkg) => pkg.positions.position(pos),
            DeclSite::Unloaded(name) => Position::file_only(name),
        }
    }
}
