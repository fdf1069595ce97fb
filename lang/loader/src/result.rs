use std::io;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use printpkg_ast::{Table, UnknownTypeKind};

#[derive(Error, Diagnostic, Debug)]
pub enum LoadError {
    #[error("{pattern}: no such file or directory")]
    #[diagnostic(code(load::not_found))]
    NotFound { pattern: String },
    #[error("{pattern}: refusing to load every package of the file system")]
    #[diagnostic(code(load::invalid_pattern), help("name a directory, e.g. `./...`"))]
    InvalidPattern { pattern: String },
    #[error("Failed to read {}", path.display())]
    #[diagnostic(code(load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to list the packages below {}", root.display())]
    #[diagnostic(code(load::walk))]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] Box<DumpSyntaxError>),
    #[error("Malformed package dump {}", path.display())]
    #[diagnostic(code(load::malformed))]
    Malformed {
        path: PathBuf,
        #[source]
        source: LowerError,
    },
}

/// A package dump which is valid JSON but does not describe a consistent package
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LowerError {
    #[error("file `{file}` must have a base of at least 1")]
    ZeroBase { file: String },
    #[error("file `{file}` has neither `source` nor `size`")]
    MissingExtent { file: String },
    #[error("line starts of file `{file}` must increase starting from 0")]
    InvalidLineStarts { file: String },
    #[error("file `{file}` exceeds the range of positions")]
    FileTooLarge { file: String },
    #[error(transparent)]
    UnknownTypeKind(#[from] UnknownTypeKind),
    #[error(
        "`{table}` entry `{name}` at {pos} refers to symbol {symbol}, \
         but there are only {count} symbols"
    )]
    DanglingSymbol { table: Table, name: String, pos: u32, symbol: usize, count: usize },
    #[error("number {0} is out of range")]
    NumberOutOfRange(String),
    #[error("position {0} is out of range")]
    PositionOutOfRange(u64),
    #[error("the kind of a syntax node must be a string, found {0}")]
    KindNotString(String),
    #[error("syntax node without a `kind`")]
    MissingKind,
}

/// A package dump which is not valid JSON or does not have the expected shape
#[derive(Error, Diagnostic, Debug)]
#[error("Invalid package dump")]
#[diagnostic(code(load::syntax))]
pub struct DumpSyntaxError {
    #[source_code]
    pub src: NamedSource<String>,
    #[label("{message}")]
    pub span: SourceSpan,
    pub message: String,
}
