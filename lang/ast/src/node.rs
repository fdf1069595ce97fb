use crate::Pos;

/// A node of a syntax tree in generic form
///
/// The loader does not know the grammar of the source language, so syntax
/// trees are kept as nested objects, lists and leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A raw position, resolved through the position table of the package
    Pos(Pos),
    List(Vec<Node>),
    Object(Object),
}

impl Node {
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }
}

/// A syntax node with a kind and named fields, e.g. `Ident { Name, NamePos }`
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub kind: String,
    /// Fields in source order
    pub fields: Vec<(String, Node)>,
}

impl Object {
    pub fn new(kind: impl Into<String>) -> Self {
        Object { kind: kind.into(), fields: Vec::new() }
    }

    pub fn with(mut self, name: impl Into<String>, node: Node) -> Self {
        self.fields.push((name.into(), node));
        self
    }

    pub fn field(&self, name: &str) -> Option<&Node> {
        self.fields.iter().find(|(field, _)| field == name).map(|(_, node)| node)
    }
}

impl From<Object> for Node {
    fn from(value: Object) -> Self {
        Node::Object(value)
    }
}
