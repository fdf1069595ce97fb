//! The on-disk format of package dumps

use serde_derive::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct PackageDump {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub files: Vec<FileDump>,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    /// Syntax trees in generic form, see `lower::lower_node`
    #[serde(default)]
    pub syntax: Vec<Value>,
    #[serde(default)]
    pub symbols: Vec<SymbolDump>,
    #[serde(default)]
    pub defs: Vec<IdentDump>,
    #[serde(default)]
    pub uses: Vec<IdentDump>,
}

/// A source file, given either by its text or by its size and line starts
#[derive(Debug, Deserialize)]
pub struct FileDump {
    pub name: String,
    pub base: u32,
    pub source: Option<String>,
    pub size: Option<u32>,
    pub lines: Option<Vec<u32>>,
}

#[derive(Debug, Deserialize)]
pub struct SymbolDump {
    /// `None` for builtins
    pub pkg: Option<String>,
    #[serde(default)]
    pub pos: u32,
    pub repr: String,
    #[serde(rename = "type")]
    pub ty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IdentDump {
    pub name: String,
    pub pos: u32,
    /// Index into `symbols`, `None` if the identifier is unresolved
    pub symbol: Option<usize>,
}
