use std::fmt;

use printpkg_miette_util::codespan::{ByteIndex, LineStarts, Location};

/// A raw position in the position table of a package.
///
/// Raw positions are only meaningful relative to the table of the package
/// they were recorded in. `Pos::NONE` stands for "no position".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos(pub u32);

impl Pos {
    pub const NONE: Pos = Pos(0);

    pub fn is_valid(self) -> bool {
        self != Pos::NONE
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A human-readable source position
///
/// Positions that could not be resolved to a line carry only a filename,
/// or nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    pub filename: String,
    pub location: Option<Location>,
}

impl Position {
    pub fn new(filename: impl Into<String>, location: Location) -> Self {
        Position { filename: filename.into(), location: Some(location) }
    }

    /// A position that only names a file, without line and column
    pub fn file_only(filename: impl Into<String>) -> Self {
        Position { filename: filename.into(), location: None }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(Location { line, column }) if self.filename.is_empty() => {
                write!(f, "{}:{}", line.number(), column.number())
            }
            Some(Location { line, column }) => {
                write!(f, "{}:{}:{}", self.filename, line.number(), column.number())
            }
            None if self.filename.is_empty() => write!(f, "-"),
            None => write!(f, "{}", self.filename),
        }
    }
}

/// A source file registered in a position table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    base: Pos,
    size: u32,
    lines: LineStarts,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, base: Pos, size: u32, lines: LineStarts) -> Self {
        SourceFile { name: name.into(), base, size, lines }
    }

    pub fn from_source(name: impl Into<String>, base: Pos, source: &str) -> Self {
        Self::new(name, base, source.len() as u32, LineStarts::from_source(source))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> Pos {
        self.base
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether the raw position lies within this file. The end-of-file position is included.
    pub fn contains(&self, pos: Pos) -> bool {
        let (pos, base) = (u64::from(pos.0), u64::from(self.base.0));
        base <= pos && pos <= base + u64::from(self.size)
    }

    fn position(&self, pos: Pos) -> Position {
        let offset = ByteIndex(pos.0 - self.base.0);
        Position::new(self.name.clone(), self.lines.location(offset))
    }
}

/// Resolves raw positions of one package to file, line and column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionTable {
    files: Vec<SourceFile>,
}

impl PositionTable {
    pub fn new(files: Vec<SourceFile>) -> Self {
        PositionTable { files }
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn position(&self, pos: Pos) -> Position {
        if !pos.is_valid() {
            return Position::default();
        }
        self.files
            .iter()
            .find(|file| file.contains(pos))
            .map(|file| file.position(pos))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PositionTable {
        PositionTable::new(vec![
            SourceFile::from_source("a.go", Pos(1), "package a\n\nvar x int\n"),
            SourceFile::from_source("b.go", Pos(30), "package a\n"),
        ])
    }

    #[test]
    fn resolves_line_and_column() {
        assert_eq!(table().position(Pos(16)).to_string(), "a.go:3:5");
        assert_eq!(table().position(Pos(1)).to_string(), "a.go:1:1");
    }

    #[test]
    fn picks_file_by_base() {
        assert_eq!(table().position(Pos(38)).to_string(), "b.go:1:9");
    }

    #[test]
    fn end_of_file_belongs_to_file() {
        // a.go holds 21 bytes starting at 1
        assert_eq!(table().position(Pos(22)).to_string(), "a.go:3:11");
    }

    #[test]
    fn unresolvable_positions_render_as_dash() {
        assert_eq!(table().position(Pos::NONE).to_string(), "-");
        assert_eq!(table().position(Pos(27)).to_string(), "-");
        assert_eq!(table().position(Pos(1000)).to_string(), "-");
    }

    #[test]
    fn file_only_position_renders_filename() {
        assert_eq!(Position::file_only("unknown").to_string(), "unknown");
        assert_eq!(Position::file_only("").to_string(), "-");
    }
}
