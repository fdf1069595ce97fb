use std::fmt;
use std::ops::BitOr;

/// The parts of a package a [`Loader`](crate::Loader) is asked to provide
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LoadMode(u8);

impl LoadMode {
    /// Package name and import path
    pub const NAME: LoadMode = LoadMode(1 << 0);
    /// Type descriptors of resolved symbols
    pub const TYPES: LoadMode = LoadMode(1 << 1);
    /// Resolved symbols and the `defs` and `uses` tables
    pub const TYPES_INFO: LoadMode = LoadMode(1 << 2);
    /// Syntax trees
    pub const SYNTAX: LoadMode = LoadMode(1 << 3);
    /// Paths of imported packages
    pub const IMPORTS: LoadMode = LoadMode(1 << 4);

    pub const ALL: LoadMode = LoadMode(0b1_1111);

    pub fn contains(self, other: LoadMode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for LoadMode {
    type Output = LoadMode;

    fn bitor(self, rhs: LoadMode) -> LoadMode {
        LoadMode(self.0 | rhs.0)
    }
}

impl fmt::Debug for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (LoadMode::NAME, "NAME"),
            (LoadMode::TYPES, "TYPES"),
            (LoadMode::TYPES_INFO, "TYPES_INFO"),
            (LoadMode::SYNTAX, "SYNTAX"),
            (LoadMode::IMPORTS, "IMPORTS"),
        ];
        let set: Vec<_> =
            names.iter().filter(|(mode, _)| self.contains(*mode)).map(|(_, name)| *name).collect();
        write!(f, "LoadMode({})", set.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_contains_parts() {
        let mode = LoadMode::NAME | LoadMode::SYNTAX;
        assert!(mode.contains(LoadMode::NAME));
        assert!(mode.contains(LoadMode::SYNTAX));
        assert!(!mode.contains(LoadMode::TYPES));
        assert!(!mode.contains(LoadMode::NAME | LoadMode::TYPES));
    }

    #[test]
    fn all_is_union_of_every_part() {
        let all = LoadMode::NAME
            | LoadMode::TYPES
            | LoadMode::TYPES_INFO
            | LoadMode::SYNTAX
            | LoadMode::IMPORTS;
        assert_eq!(all, LoadMode::ALL);
        assert_eq!(format!("{:?}", LoadMode::NAME | LoadMode::IMPORTS), "LoadMode(NAME | IMPORTS)");
    }
}
