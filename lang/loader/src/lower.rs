use serde_json::Value;

use printpkg_ast::*;
use printpkg_miette_util::codespan::{ByteIndex, LineStarts};

use crate::{LoadMode, LowerError};
use crate::dump::{FileDump, IdentDump, PackageDump, SymbolDump};

/// Turn a package dump into a package, keeping only the parts requested by `mode`
pub fn lower(dump: PackageDump, mode: LoadMode) -> Result<Package, LowerError> {
    let PackageDump { name, path, files, imports, errors, syntax, symbols, defs, uses } = dump;

    let files = files.into_iter().map(lower_file).collect::<Result<_, _>>()?;
    let mut pkg = Package { positions: PositionTable::new(files), errors, ..Default::default() };

    if mode.contains(LoadMode::NAME) {
        pkg.name = name;
        pkg.path = path;
    }
    if mode.contains(LoadMode::IMPORTS) {
        pkg.imports = imports;
    }
    if mode.contains(LoadMode::SYNTAX) {
        pkg.syntax = syntax.into_iter().map(lower_node).collect::<Result<_, _>>()?;
    }
    if mode.contains(LoadMode::TYPES_INFO) {
        let with_types = mode.contains(LoadMode::TYPES);
        pkg.symbols = symbols
            .into_iter()
            .map(|symbol| lower_symbol(symbol, with_types))
            .collect::<Result<_, _>>()?;
        pkg.defs = lower_table(Table::Defs, defs, pkg.symbols.len())?;
        pkg.uses = lower_table(Table::Uses, uses, pkg.symbols.len())?;
    }

    Ok(pkg)
}

fn lower_file(file: FileDump) -> Result<SourceFile, LowerError> {
    let FileDump { name, base, source, size, lines } = file;
    if base == 0 {
        return Err(LowerError::ZeroBase { file: name });
    }
    let base = Pos(base);

    if let Some(source) = source {
        return Ok(SourceFile::from_source(name, base, &source));
    }
    let Some(size) = size else {
        return Err(LowerError::MissingExtent { file: name });
    };
    let lines = lines.unwrap_or_default().into_iter().map(ByteIndex).collect();
    let Some(lines) = LineStarts::from_indices(lines) else {
        return Err(LowerError::InvalidLineStarts { file: name });
    };
    if base.0.checked_add(size).is_none() {
        return Err(LowerError::FileTooLarge { file: name });
    }
    Ok(SourceFile::new(name, base, size, lines))
}

fn lower_symbol(symbol: SymbolDump, with_types: bool) -> Result<Symbol, LowerError> {
    let SymbolDump { pkg, pos, repr, ty } = symbol;
    let ty = match ty {
        Some(ty) if with_types => Some(ty.parse::<TypeKind>()?),
        _ => None,
    };
    Ok(Symbol { pkg, pos: Pos(pos), repr, ty })
}

fn lower_table(
    table: Table,
    idents: Vec<IdentDump>,
    count: usize,
) -> Result<ResolutionTable, LowerError> {
    let mut resolutions = ResolutionTable::default();
    for IdentDump { name, pos, symbol } in idents {
        if let Some(symbol) = symbol.filter(|symbol| *symbol >= count) {
            return Err(LowerError::DanglingSymbol { table, name, pos, symbol, count });
        }
        resolutions.insert(Ident::new(name, Pos(pos)), symbol.map(SymbolId));
    }
    Ok(resolutions)
}

/// Syntax trees are encoded as plain JSON:
///
/// * `null`, booleans, numbers, strings and arrays map to the corresponding node
/// * an object with a string member `kind` is an object node; its other members
///   are the fields of the node, in document order
/// * an object whose only member is an unsigned integer `pos` is a raw position
pub fn lower_node(value: Value) -> Result<Node, LowerError> {
    let node = match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(n), _) => Node::Int(n),
            (None, Some(x)) => Node::Float(x),
            (None, None) => return Err(LowerError::NumberOutOfRange(n.to_string())),
        },
        Value::String(s) => Node::Str(s),
        Value::Array(items) => {
            Node::List(items.into_iter().map(lower_node).collect::<Result<_, _>>()?)
        }
        Value::Object(mut members) => match members.shift_remove("kind") {
            Some(Value::String(kind)) => {
                let fields = members
                    .into_iter()
                    .map(|(name, value)| lower_node(value).map(|node| (name, node)))
                    .collect::<Result<_, _>>()?;
                Node::Object(Object { kind, fields })
            }
            Some(kind) => return Err(LowerError::KindNotString(kind.to_string())),
            None => match members.get("pos").and_then(Value::as_u64) {
                Some(pos) if members.len() == 1 => {
                    let pos =
                        u32::try_from(pos).map_err(|_| LowerError::PositionOutOfRange(pos))?;
                    Node::Pos(Pos(pos))
                }
                _ => return Err(LowerError::MissingKind),
            },
        },
    };
    Ok(node)
}
