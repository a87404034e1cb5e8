use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::glob;
use swc_common::{
    Spanned,
    comments::{CommentKind, Comments},
};
use swc_ecma_ast::{Decl, DefaultDecl, ModuleDecl, ModuleItem, Pat, Stmt};

use crate::catalog::component::Component;
use crate::catalog::extract::extract_component;
use crate::parsers::comment::{Block, parse_blocks};
use crate::parsers::tsx::parse_tsx_source;

/// Expand the configured glob pattern into the set of source files to scan.
///
/// Paths are canonicalized so image references resolve against the real
/// source directory regardless of how the pattern was written. Entries that
/// cannot be accessed or resolved are skipped (warned about when verbose).
pub fn matched_files(pattern: &str, verbose: bool) -> Result<Vec<PathBuf>> {
    let entries =
        glob(pattern).with_context(|| format!("Invalid glob pattern '{}'", pattern))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), err);
                }
                continue;
            }
        };
        if let Ok(resolved) = path.canonicalize()
            && resolved.is_file()
        {
            files.push(resolved);
        }
    }
    Ok(files)
}

/// Walk every matched file's top-level declarations and accumulate the
/// components their documentation declares, in file order then declaration
/// order.
///
/// Unreadable or unparseable files are skipped (warned about when verbose);
/// a single bad source must not abort the run. Only immediate module items
/// are scanned; members nested inside a class or namespace are not.
pub fn build_catalog(files: &[PathBuf], verbose: bool) -> Vec<Component> {
    let mut components = Vec::new();

    for file in files {
        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(err) => {
                if verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        file.display(),
                        err
                    );
                }
                continue;
            }
        };

        let parsed = match parse_tsx_source(source, &file.to_string_lossy()) {
            Ok(parsed) => parsed,
            Err(err) => {
                if verbose {
                    eprintln!(
                        "{} Skipping {}: {}",
                        "warning:".bold().yellow(),
                        file.display(),
                        err
                    );
                }
                continue;
            }
        };

        let source_dir = file.parent().unwrap_or(Path::new("."));

        for item in &parsed.module.body {
            // Leading comments are attached at the declaration's first
            // token, so trailing comments of the previous statement never
            // show up here.
            let Some(leading) = parsed.comments.get_leading(item.span_lo()) else {
                continue;
            };

            let blocks: Vec<Block> = leading
                .iter()
                .filter(|comment| comment.kind == CommentKind::Block)
                .flat_map(|comment| parse_blocks(&comment.text))
                .collect();

            // Only the first block counts, even when it carries no
            // component tag and a later one does.
            let Some(first) = blocks.first() else {
                continue;
            };

            if let Some(component) =
                extract_component(first, declaration_ident(item).as_deref(), source_dir)
            {
                components.push(component);
            }
        }
    }

    components
}

/// Identifier of a top-level declaration, used as the component-name
/// fallback when `@lsComponent` carries no inline value.
fn declaration_ident(item: &ModuleItem) -> Option<String> {
    match item {
        ModuleItem::Stmt(Stmt::Decl(decl)) => decl_ident(decl),
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => decl_ident(&export.decl),
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => match &export.decl {
            DefaultDecl::Fn(expr) => expr.ident.as_ref().map(|ident| ident.sym.to_string()),
            DefaultDecl::Class(expr) => expr.ident.as_ref().map(|ident| ident.sym.to_string()),
            DefaultDecl::TsInterfaceDecl(decl) => Some(decl.id.sym.to_string()),
        },
        _ => None,
    }
}

fn decl_ident(decl: &Decl) -> Option<String> {
    match decl {
        Decl::Fn(decl) => Some(decl.ident.sym.to_string()),
        Decl::Class(decl) => Some(decl.ident.sym.to_string()),
        Decl::Var(decl) => decl.decls.first().and_then(|declarator| match &declarator.name {
            Pat::Ident(binding) => Some(binding.id.sym.to_string()),
            _ => None,
        }),
        Decl::TsInterface(decl) => Some(decl.id.sym.to_string()),
        Decl::TsTypeAlias(decl) => Some(decl.id.sym.to_string()),
        Decl::TsEnum(decl) => Some(decl.id.sym.to_string()),
        _ => None,
    }
}
