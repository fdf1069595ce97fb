use pretty::DocAllocator;

use printpkg_ast::{Node, Object, PositionTable};

use crate::tokens::*;
use crate::{Alloc, Builder, PrintCfg, PrintInCtx};

impl<'a> PrintInCtx<'a> for Node {
    type Ctx = PositionTable;

    fn print_in_ctx(
        &'a self,
        cfg: &PrintCfg,
        ctx: &'a Self::Ctx,
        alloc: &'a Alloc<'a>,
    ) -> Builder<'a> {
        match self {
            Node::Null => alloc.text(NIL),
            Node::Bool(b) => alloc.text(b.to_string()),
            Node::Int(n) => alloc.text(n.to_string()),
            Node::Float(x) => alloc.text(format!("{x:?}")),
            Node::Str(s) => quoted(s, alloc),
            Node::Pos(pos) => alloc.text(ctx.position(*pos).to_string()),
            Node::List(items) => {
                list(items.iter().map(|item| item.print_in_ctx(cfg, ctx, alloc)), cfg, alloc)
            }
            Node::Object(obj) => obj.print_in_ctx(cfg, ctx, alloc),
        }
    }
}

impl<'a> PrintInCtx<'a> for Object {
    type Ctx = PositionTable;

    fn print_in_ctx(
        &'a self,
        cfg: &PrintCfg,
        ctx: &'a Self::Ctx,
        alloc: &'a Alloc<'a>,
    ) -> Builder<'a> {
        let Object { kind, fields } = self;
        let fields = fields
            .iter()
            .filter(|(_, node)| !node.is_null())
            .map(|(name, node)| (name.as_str(), node.print_in_ctx(cfg, ctx, alloc)));
        object(kind, fields, cfg, alloc)
    }
}

pub(crate) fn quoted<'a>(s: &str, alloc: &'a Alloc<'a>) -> Builder<'a> {
    alloc.text(format!("{s:?}"))
}

/// `Kind { field: value ... }` with one field per line
pub(crate) fn object<'a, I>(
    kind: &'a str,
    fields: I,
    cfg: &PrintCfg,
    alloc: &'a Alloc<'a>,
) -> Builder<'a>
where
    I: Iterator<Item = (&'a str, Builder<'a>)>,
{
    let fields: Vec<_> = fields
        .map(|(name, value)| alloc.text(name).append(COLON).append(alloc.space()).append(value))
        .collect();
    let head = alloc.text(kind).append(alloc.space());
    if fields.is_empty() {
        return head.append(EMPTY_BRACES);
    }
    let body = alloc.hardline().append(alloc.intersperse(fields, alloc.hardline()));
    head.append(BRACE_OPEN)
        .append(body.nest(cfg.indent))
        .append(alloc.hardline())
        .append(BRACE_CLOSE)
}

/// `[ 0: item ... ]` with one indexed item per line
pub(crate) fn list<'a, I>(items: I, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a>
where
    I: Iterator<Item = Builder<'a>>,
{
    let items: Vec<_> = items
        .enumerate()
        .map(|(i, item)| alloc.text(i.to_string()).append(COLON).append(alloc.space()).append(item))
        .collect();
    if items.is_empty() {
        return alloc.text(EMPTY_BRACKETS);
    }
    let body = alloc.hardline().append(alloc.intersperse(items, alloc.hardline()));
    alloc
        .text(BRACKET_OPEN)
        .append(body.nest(cfg.indent))
        .append(alloc.hardline())
        .append(BRACKET_CLOSE)
}
