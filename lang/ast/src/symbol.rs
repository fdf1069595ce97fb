use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Pos;

/// Index of a symbol in the symbol arena of its package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub usize);

/// The declared entity an identifier occurrence refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Name of the package containing the declaration, `None` for builtins
    pub pkg: Option<String>,
    /// Raw position of the declaration in the position table of `pkg`
    pub pos: Pos,
    /// Canonical description of the symbol, e.g. `var p.x int`
    pub repr: String,
    pub ty: Option<TypeKind>,
}

/// Coarse category of the type of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Basic,
    Named,
    Alias,
    Pointer,
    Slice,
    Array,
    Map,
    Chan,
    Struct,
    Tuple,
    Signature,
    Interface,
    TypeParam,
    Union,
}

impl TypeKind {
    pub const ALL: [TypeKind; 14] = [
        TypeKind::Basic,
        TypeKind::Named,
        TypeKind::Alias,
        TypeKind::Pointer,
        TypeKind::Slice,
        TypeKind::Array,
        TypeKind::Map,
        TypeKind::Chan,
        TypeKind::Struct,
        TypeKind::Tuple,
        TypeKind::Signature,
        TypeKind::Interface,
        TypeKind::TypeParam,
        TypeKind::Union,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Basic => "Basic",
            TypeKind::Named => "Named",
            TypeKind::Alias => "Alias",
            TypeKind::Pointer => "Pointer",
            TypeKind::Slice => "Slice",
            TypeKind::Array => "Array",
            TypeKind::Map => "Map",
            TypeKind::Chan => "Chan",
            TypeKind::Struct => "Struct",
            TypeKind::Tuple => "Tuple",
            TypeKind::Signature => "Signature",
            TypeKind::Interface => "Interface",
            TypeKind::TypeParam => "TypeParam",
            TypeKind::Union => "Union",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown type kind `{0}`")]
pub struct UnknownTypeKind(pub String);

impl FromStr for TypeKind {
    type Err = UnknownTypeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownTypeKind(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_parse_back() {
        for kind in TypeKind::ALL {
            assert_eq!(kind.to_string().parse::<TypeKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert_eq!("basic".parse::<TypeKind>(), Err(UnknownTypeKind("basic".to_owned())));
    }
}
