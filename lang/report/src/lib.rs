//! Reports how the identifiers of a package were resolved
//!
//! For every entry of the `defs` and `uses` tables of a package one line is
//! written. An occurrence located at the declaration of its symbol is reported
//! as a definition, any other occurrence as a use pointing to the declaration.
//! Declarations are located with the position table of the package that
//! declares them, which need not be the package being reported.

mod line;
mod reporter;
mod site;

pub use line::*;
pub use reporter::*;
pub use site::*;
