use std::fmt;

use printpkg_ast::{Ident, Package, PackageSet, Pos, Position, Symbol};

use crate::DeclSite;

/// Shown instead of the type kind of symbols without a type
pub const NIL_TYPE: &str = "<nil>";

/// The report for a single entry of a resolution table
#[derive(Debug, Clone)]
pub enum Line<'a> {
    /// The frontend could not resolve the occurrence
    Unresolved { at: Position },
    /// The occurrence is the declaration of its symbol
    Def { at: Position, pos: Pos, pkg: &'a str, symbol: &'a Symbol },
    /// The occurrence refers to a declaration elsewhere
    Use { at: Position, pos: Pos, pkg: &'a str, decl: Position, symbol: &'a Symbol },
}

impl<'a> Line<'a> {
    /// Classify an occurrence of `pkg` by comparing its raw position with the
    /// raw position of the declaration of its symbol
    ///
    /// Raw positions of different packages are unrelated, so only a symbol
    /// declared in `pkg` itself can be defined by the occurrence.
    pub fn classify(
        pkg: &Package,
        ident: &Ident,
        symbol: Option<&'a Symbol>,
        packages: &PackageSet<'a>,
    ) -> Self {
        let at = pkg.positions.position(ident.pos);
        let Some(symbol) = symbol else {
            return Line::Unresolved { at };
        };
        let declared_here = symbol.pkg.as_deref() == Some(pkg.name.as_str());
        let site = DeclSite::of(symbol, packages);
        let decl_pkg = site.package_name();
        if declared_here && ident.pos == symbol.pos {
            Line::Def { at, pos: ident.pos, pkg: decl_pkg, symbol }
        } else {
            let decl = site.position(symbol.pos);
            Line::Use { at, pos: ident.pos, pkg: decl_pkg, decl, symbol }
        }
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Unresolved { at } => write!(f, "{at} (nil)"),
            Line::Def { at, pos, pkg, symbol } => {
                write!(f, "{at} ({pos}) {pkg} {} {}", symbol.repr, TypeKindOf(symbol))
            }
            Line::Use { at, pos, pkg, decl, symbol } => write!(
                f,
                "{at} ({pos}) => {pkg} {decl} ({}) {} {}",
                symbol.pos,
                symbol.repr,
                TypeKindOf(symbol)
            ),
        }
    }
}

struct TypeKindOf<'a>(&'a Symbol);

impl fmt::Display for TypeKindOf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.ty {
            Some(kind) => write!(f, "{kind}"),
            None => f.write_str(NIL_TYPE),
        }
    }
}
