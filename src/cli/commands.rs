//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use cook_syntax::ast::Document;
use cook_syntax::diagnostics::ParseError;
use cook_syntax::{lexer, parse_recipe};
use miette::{GraphicalReportHandler, NamedSource, Report};

use super::{CliError, CliResult, ExitCode};
use crate::config::RenderConfig;
use crate::conformance::{self, Corpus};
use crate::render::{HtmlRenderer, ShoppingList};

/// Maximum source file size (16 MiB)
///
/// Recipes are small; anything larger is rejected before reading.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Read a recipe as raw bytes after checking its size.
///
/// Bytes rather than a `String`: invalid UTF-8 is reported by the tokenizer with a position.
pub fn read_source(path: &Path) -> CliResult<Vec<u8>> {
    let name = path.display();
    let metadata = fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{name}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{name}' is too large ({} bytes, max {MAX_SOURCE_SIZE} bytes)",
            metadata.len(),
        )));
    }

    fs::read(path).map_err(|e| CliError::failure(format!("Error reading file '{name}': {e}")))
}

/// Wide enough that `path:line:col: message` headers are not wrapped.
const DIAGNOSTIC_WIDTH: usize = 160;

/// Render a diagnostic with source context.
pub fn format_diagnostic(source: &[u8], error: &ParseError) -> String {
    let source = NamedSource::new(&error.source_name, String::from_utf8_lossy(source).into_owned());
    let report = Report::new(error.clone()).with_source_code(source);
    let mut out = String::new();
    match GraphicalReportHandler::new()
        .with_width(DIAGNOSTIC_WIDTH)
        .render_report(&mut out, &*report)
    {
        Ok(()) => out,
        Err(_) => error.to_string(),
    }
}

fn diagnostics_error(source: &[u8], errors: &[ParseError]) -> CliError {
    let mut msg = String::new();
    for err in errors {
        msg.push_str(&format_diagnostic(source, err));
    }
    CliError::failure(msg.trim_end())
}

/// Read and parse a recipe; warnings are printed to stderr.
fn load_document(path: &Path) -> CliResult<(Vec<u8>, Document)> {
    let source = read_source(path)?;
    let name = path.display().to_string();
    let document = parse_recipe(&name, &source).map_err(|err| diagnostics_error(&source, &[err]))?;
    for warning in &document.errors {
        eprintln!("{}", format_diagnostic(&source, warning));
    }
    Ok((source, document))
}

/// Tokenize and print tokens.
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let name = path.display().to_string();
    let tokens = lexer::tokenize(&name, &source)
        .into_result()
        .map_err(|errs| diagnostics_error(&source, &errs))?;

    for token in &tokens {
        println!("{token}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and print the document structure.
pub fn parse_file(path: &Path) -> CliResult<ExitCode> {
    let (_, document) = load_document(path)?;
    println!("{document:#?}");
    Ok(ExitCode::SUCCESS)
}

/// Parse and print the debug dump.
pub fn dump_file(path: &Path) -> CliResult<ExitCode> {
    let (_, document) = load_document(path)?;
    println!("{document}");
    Ok(ExitCode::SUCCESS)
}

/// Render a recipe as HTML to `out` or stdout.
pub fn render_file(path: &Path, out: Option<&Path>, config: RenderConfig) -> CliResult<ExitCode> {
    let (_, document) = load_document(path)?;
    let html = HtmlRenderer::new(config)
        .render(&document)
        .map_err(|e| CliError::failure(format!("Error rendering '{}': {e}", path.display())))?;

    match out {
        Some(out) => {
            fs::write(out, html)
                .map_err(|e| CliError::failure(format!("Error writing '{}': {e}", out.display())))?;
            tracing::debug!(path = %out.display(), "wrote HTML");
        }
        None => print!("{html}"),
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the shopping list for all `paths`.
pub fn shopping_list(paths: &[impl AsRef<Path>]) -> CliResult<ExitCode> {
    let mut list = ShoppingList::new();
    for path in paths {
        let (_, document) = load_document(path.as_ref())?;
        list.add_document(&document);
    }
    print!("{list}");
    Ok(ExitCode::SUCCESS)
}

/// Print the metadata view as pretty JSON.
pub fn metadata(path: &Path) -> CliResult<ExitCode> {
    let (_, document) = load_document(path)?;
    let json = serde_json::to_string_pretty(&document.metadata())
        .map_err(|e| CliError::failure(format!("Error serializing metadata: {e}")))?;
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}

/// Parse every file, reporting all diagnostics; fails if any file fails.
pub fn check_files(paths: &[impl AsRef<Path>]) -> CliResult<ExitCode> {
    let mut failed = 0usize;
    for path in paths {
        let path = path.as_ref();
        match load_document(path) {
            Ok(_) => println!("{}: ok", path.display()),
            Err(e) => {
                eprintln!("{}", e.message);
                failed += 1;
            }
        }
    }

    if failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(format!("{failed} of {} files failed to parse", paths.len())))
    }
}

/// Run a conformance corpus and print a summary.
pub fn conformance(corpus_path: &Path, verbose: bool) -> CliResult<ExitCode> {
    let corpus = Corpus::load(corpus_path).map_err(|e| CliError::failure(e.to_string()))?;
    let report = conformance::run(&corpus);

    if verbose {
        for (name, reasons) in report.failures() {
            println!("FAIL {name}");
            for reason in reasons {
                println!("    {reason}");
            }
        }
    }
    println!("{report}");

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_recipe(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("cook_cli_{}_{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/definitely/not/here.cook")).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }

    #[test]
    fn test_load_document_reports_diagnostics() {
        let path = temp_recipe("broken.cook", b">> servings 4\n");
        let err = load_document(&path).unwrap_err();
        assert!(err.message.contains("expected ':' to separate metadata key and value on line 1"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_check_files_counts_failures() {
        let good = temp_recipe("good.cook", b"Boil @water.\n");
        let bad = temp_recipe("bad.cook", b"@{1%g}\n");
        let err = check_files(&[&good, &bad]).unwrap_err();
        assert_eq!(err.message, "1 of 2 files failed to parse");
        assert_eq!(check_files(&[&good]).unwrap(), ExitCode::SUCCESS);
        let _ = fs::remove_file(good);
        let _ = fs::remove_file(bad);
    }

    #[test]
    fn test_lex_file_rejects_invalid_utf8() {
        let path = temp_recipe("latin1.cook", b"cr\xe8me");
        let err = lex_file(&path).unwrap_err();
        assert!(err.message.contains("invalid UTF-8 encoding"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_render_file_writes_output() {
        let recipe = temp_recipe("render.cook", b"Rest ~{5%minutes}\n");
        let out = std::env::temp_dir().join(format!("cook_cli_{}_render.html", std::process::id()));
        render_file(&recipe, Some(&out), RenderConfig::new()).unwrap();
        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains(r#"data-seconds="300""#));
        let _ = fs::remove_file(recipe);
        let _ = fs::remove_file(out);
    }
}
