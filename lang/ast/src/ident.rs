use crate::Pos;

/// A single occurrence of an identifier in the source text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
    /// Raw position of the first byte of the identifier, relative to the
    /// position table of the package the occurrence belongs to
    pub pos: Pos,
}

impl Ident {
    pub fn new(name: impl Into<String>, pos: Pos) -> Self {
        Ident { name: name.into(), pos }
    }
}
