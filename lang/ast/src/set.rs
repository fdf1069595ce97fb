use crate::{HashMap, Package};

/// All loaded packages, keyed by package name
///
/// Built once before any package is reported and never modified afterwards.
/// If several packages share a name, the one loaded last is kept.
#[derive(Debug, Default)]
pub struct PackageSet<'a> {
    by_name: HashMap<&'a str, &'a Package>,
}

impl<'a> PackageSet<'a> {
    pub fn new(packages: &'a [Package]) -> Self {
        let by_name = packages.iter().map(|pkg| (pkg.name.as_str(), pkg)).collect();
        PackageSet { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a Package> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
