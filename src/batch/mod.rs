//! At the command line, scripts are parsed in one go and their trees or errors
//! printed.

use std::fmt::Write;
use std::path::Path;

use anyhow::{anyhow, Context};
use dxl_syntax::errors::Severity;
use dxl_syntax::source::LineIndex;
use dxl_syntax::symbols::symbols;
use dxl_syntax::syntax::{ast, red};
use dxl_syntax::Document;
use log::info;

pub fn dump(path: &Path, as_ast: bool, with_symbols: bool) -> anyhow::Result<()> {
    let document = load(path)?;
    print!("{}", report(&document));

    let root = document.root();

    if as_ast {
        let node = ast::cast(root.clone()).ok_or_else(|| anyhow!("the tree has no root"))?;
        println!("{}", ast::dump(&node));
    } else {
        println!("{}", root.dump());
    }

    if with_symbols {
        print!("{}", symbol_listing(&root, &document.text, &document.lines));
    }

    Ok(())
}

pub fn check(path: &Path) -> anyhow::Result<()> {
    let document = load(path)?;
    print!("{}", report(&document));

    let errors = &document.parse.errors;
    let summary = format!("{} errors and {} warnings", errors.num_errors(), errors.num_warnings());

    if errors.num_errors() == 0 {
        println!("{summary}");
        Ok(())
    } else {
        Err(anyhow!(summary))
    }
}

fn load(path: &Path) -> anyhow::Result<Document> {
    let text = std::fs::read_to_string(path).with_context(|| format!("unable to read {}", path.display()))?;
    info!("read {} bytes from {}", text.len(), path.display());
    Ok(Document::new(0, text))
}

/// Every error of the document as `line:col: message`, one-based.
fn report(document: &Document) -> String {
    let mut result = String::new();

    for error in document.parse.errors.iter() {
        let position = document.lines.position(error.at);
        let severity = match error.severity {
            Severity::Error => "",
            Severity::Warning => "warning: ",
        };

        let _ = writeln!(
            result,
            "{}:{}: {severity}{}",
            position.line + 1,
            position.col + 1,
            error.message
        );
    }

    result
}

fn symbol_listing(root: &red::Node, text: &str, lines: &LineIndex) -> String {
    let symbols = symbols(root);
    let mut result = String::new();

    for token in symbols.tokens.iter() {
        let position = lines.position(token.span.start);
        let _ = writeln!(
            result,
            "{}:{}: {} {:?}",
            position.line + 1,
            position.col + 1,
            token.kind,
            &text[token.span.clone()]
        );
    }

    for symbol in symbols.outline.iter() {
        let _ = writeln!(result, "{:?} {} @ {:?}", symbol.kind, symbol.name, symbol.range);
    }

    result
}

#[cfg(test)]
mod tests {
    use dxl_syntax::Document;

    use super::{report, symbol_listing};

    #[test]
    fn errors_are_reported_by_line() {
        let _ = pretty_env_logger::try_init();

        let document = Document::new(0, "int a\nint");
        assert_eq!("2:4: Expected= IDENT. Got= EOF\n", report(&document));
    }

    #[test]
    fn warnings_are_marked() {
        let document = Document::new(0, "const int a");
        let report = report(&document);
        assert!(report.starts_with("1:1: warning: "), "{report}");
    }

    #[test]
    fn symbols_are_listed() {
        let document = Document::new(0, "int f() {}");
        let listing = symbol_listing(&document.root(), &document.text, &document.lines);
        assert_eq!("1:1: type \"int\"\n1:5: function \"f\"\nFunction f @ 0..10\n", listing);
    }
}
