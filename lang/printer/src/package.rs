use pretty::DocAllocator;

use printpkg_ast::Package;

use crate::node::{list, object, quoted};
use crate::{Alloc, Builder, Print, PrintCfg, PrintInCtx};

impl<'a> Print<'a> for Package {
    fn print(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Package { name, path, positions, syntax, imports, errors, .. } = self;

        let strings =
            |strings: &'a [String]| list(strings.iter().map(|s| quoted(s, alloc)), cfg, alloc);
        let files = positions.files().iter().map(|file| quoted(file.name(), alloc));

        let mut fields = vec![
            ("Name", quoted(name, alloc)),
            ("Path", quoted(path, alloc)),
            ("Files", list(files, cfg, alloc)),
            ("Imports", strings(imports.as_slice())),
        ];
        if !errors.is_empty() {
            fields.push(("Errors", strings(errors.as_slice())));
        }
        let syntax = syntax.iter().map(|node| node.print_in_ctx(cfg, positions, alloc));
        fields.push(("Syntax", list(syntax, cfg, alloc)));

        object("Package", fields.into_iter(), cfg, alloc)
    }
}
