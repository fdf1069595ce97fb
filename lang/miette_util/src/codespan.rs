use std::fmt;
use std::ops::Range;

/// The raw, untyped index. We use a 32-bit integer here for space efficiency,
/// assuming we won't be working with sources larger than 4GB.
pub type RawIndex = u32;

/// A byte position in a source file.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteIndex(pub RawIndex);

impl ByteIndex {
    /// Convert the position into a `usize`, for use in array indexing
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<RawIndex> for ByteIndex {
    fn from(i: RawIndex) -> Self {
        ByteIndex(i)
    }
}

impl fmt::Debug for ByteIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ByteIndex(")?;
        self.0.fmt(f)?;
        write!(f, ")")
    }
}

impl fmt::Display for ByteIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    start: ByteIndex,
    end: ByteIndex,
}

impl Span {
    /// Create a new span from a starting and ending span.
    pub fn new(start: impl Into<ByteIndex>, end: impl Into<ByteIndex>) -> Span {
        let start = start.into();
        let end = end.into();

        assert!(end >= start);

        Span { start, end }
    }

    /// Gives an empty span at the given index.
    pub fn point(at: impl Into<ByteIndex>) -> Span {
        let at = at.into();
        Span { start: at, end: at }
    }

    /// Get the starting byte index.
    pub fn start(self) -> ByteIndex {
        self.start
    }

    /// Get the ending byte index.
    pub fn end(self) -> ByteIndex {
        self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{start}, {end})", start = self.start(), end = self.end(),)
    }
}

impl<I> From<Range<I>> for Span
where
    I: Into<ByteIndex>,
{
    fn from(range: Range<I>) -> Span {
        Span::new(range.start, range.end)
    }
}

/// A zero-indexed line offset into a source file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineIndex(pub RawIndex);

/// A 1-indexed line number. Useful for pretty printing source locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineNumber(RawIndex);

impl LineIndex {
    /// The 1-indexed line number. Useful for pretty printing source locations.
    ///
    /// ```rust
    /// use printpkg_miette_util::codespan::LineIndex;
    ///
    /// assert_eq!(format!("{}", LineIndex(0).number()), "1");
    /// assert_eq!(format!("{}", LineIndex(3).number()), "4");
    /// ```
    pub const fn number(self) -> LineNumber {
        LineNumber(self.0 + 1)
    }

    /// Convert the index into a `usize`, for use in array indexing
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A zero-indexed column offset into a source file, counted in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnIndex(pub RawIndex);

/// A 1-indexed column number. Useful for pretty printing source locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnNumber(RawIndex);

impl ColumnIndex {
    /// The 1-indexed column number. Useful for pretty printing source locations.
    ///
    /// ```rust
    /// use printpkg_miette_util::codespan::ColumnIndex;
    ///
    /// assert_eq!(format!("{}", ColumnIndex(0).number()), "1");
    /// assert_eq!(format!("{}", ColumnIndex(3).number()), "4");
    /// ```
    pub const fn number(self) -> ColumnNumber {
        ColumnNumber(self.0 + 1)
    }
}

impl fmt::Display for ColumnNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A location in a source file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// The line index in the source file.
    pub line: LineIndex,
    /// The column index in the source file.
    pub column: ColumnIndex,
}

impl Location {
    /// Construct a new location from a line index and a column index.
    pub fn new(line: impl Into<LineIndex>, column: impl Into<ColumnIndex>) -> Location {
        Location { line: line.into(), column: column.into() }
    }
}

impl From<RawIndex> for LineIndex {
    fn from(i: RawIndex) -> Self {
        LineIndex(i)
    }
}

impl From<RawIndex> for ColumnIndex {
    fn from(i: RawIndex) -> Self {
        ColumnIndex(i)
    }
}

/// The starting byte indices of the lines of a source file.
///
/// The first line always starts at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStarts(Vec<ByteIndex>);

impl LineStarts {
    pub fn from_source(source: &str) -> Self {
        let size = source.len();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            // A trailing newline does not open another line
            .filter(|i| *i == 0 || *i < size)
            .map(|i| ByteIndex(i as RawIndex))
            .collect();
        LineStarts(line_starts)
    }

    /// Build from explicit line starts, which must be strictly increasing.
    ///
    /// Returns `None` if that is not the case or the first line does not start at 0.
    pub fn from_indices(line_starts: Vec<ByteIndex>) -> Option<Self> {
        if line_starts.is_empty() {
            return Some(LineStarts(vec![ByteIndex(0)]));
        }
        let increasing = line_starts.windows(2).all(|pair| pair[0] < pair[1]);
        (line_starts[0] == ByteIndex(0) && increasing).then_some(LineStarts(line_starts))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn line_index(&self, byte_index: ByteIndex) -> LineIndex {
        match self.0.binary_search(&byte_index) {
            // Found the start of a line
            Ok(line) => LineIndex(line as RawIndex),
            Err(next_line) => LineIndex(next_line as RawIndex - 1),
        }
    }

    /// The line and byte column of the given index.
    pub fn location(&self, byte_index: ByteIndex) -> Location {
        let line = self.line_index(byte_index);
        let line_start = self.0[line.to_usize()];
        Location { line, column: ColumnIndex(byte_index.0 - line_start.0) }
    }

    /// The byte index of the given location, if the line exists.
    pub fn byte_index(&self, location: Location) -> Option<ByteIndex> {
        let line_start = self.0.get(location.line.to_usize())?;
        Some(ByteIndex(line_start.0 + location.column.0))
    }
}
