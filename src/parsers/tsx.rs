use anyhow::{Result, anyhow};
use swc_common::{FileName, SourceMap, comments::SingleThreadedComments};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedTsx {
    pub module: Module,
    pub comments: SingleThreadedComments,
}

/// Parse TSX source code into an AST with comments retained.
///
/// Comments are kept in the returned `SingleThreadedComments` so the walker
/// can look up the documentation attached to each top-level declaration.
pub fn parse_tsx_source(code: String, file_path: &str) -> Result<ParsedTsx> {
    let source_map = SourceMap::default();
    let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let comments = SingleThreadedComments::default();
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("Failed to parse tsx string: {:?}", e))?;
    Ok(ParsedTsx { module, comments })
}
