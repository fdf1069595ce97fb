//! Symbols used in the tree dump

/// The symbol `{`
pub const BRACE_OPEN: &str = "{";

/// The symbol `}`
pub const BRACE_CLOSE: &str = "}";

/// The symbol `{}`
pub const EMPTY_BRACES: &str = "{}";

/// The symbol `[`
pub const BRACKET_OPEN: &str = "[";

/// The symbol `]`
pub const BRACKET_CLOSE: &str = "]";

/// The symbol `[]`
pub const EMPTY_BRACKETS: &str = "[]";

/// The symbol `:`
pub const COLON: &str = ":";

/// Printed for null list elements
pub const NIL: &str = "nil";
